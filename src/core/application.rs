//! # Application Core
//!
//! 워커 프로세스 하나의 수명 동안 유지되는 애플리케이션 객체입니다.
//! 원시 설정을 받아 검증하고 (Configuring), 서비스 레지스트리와 에러 트랩을
//! 준비한 뒤 (Ready), 라우트 문자열을 핸들러와 액션으로 디스패치합니다.
//!
//! ## 상태 전이
//!
//! ```text
//! Application::new(raw)
//!   ├─ AppConfig::from_value + pre_init     → id / basePath 필수, 내장 컴포넌트 병합
//!   ├─ basePath, runtimePath 해석 및 검증   → 존재하는 디렉터리여야 함
//!   ├─ 시간대 결정                          → timeZone, TZ, "UTC" 순
//!   ├─ ServiceRegistry::from_components     → 디스크립터만 등록
//!   ├─ bootstrap 컴포넌트 생성
//!   └─ ErrorTrap 설치                       → Ready
//!
//! Ready
//!   ├─ dispatch(route) → Option<Dispatched>
//!   └─ run_route(route) → AppResult<Value>
//! ```
//!
//! 실패한 시작은 항상 `ConfigurationError` 이며, 그 경우 트랩은 설치되지 않습니다.
//! Ready 이후 레지스트리는 `Arc` 뒤에서 읽기 전용으로만 공유됩니다.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use log::{debug, info};
use serde_json::{Map, Value};
use crate::config::{
    AppConfig, Aliases, ExecutionMode, ServerConfigs, APP_ALIAS, RUNTIME_ALIAS,
};
use crate::core::error_trap::{self, ErrorTrap};
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{
    Service, ServiceClassTable, ServiceRegistry, LOG_SERVICE, URL_MANAGER_SERVICE,
};
use crate::handlers::{Dispatched, Handler, HandlerLocator, HandlerPool, HandlerTable};
use crate::routes::resolver::resolve;
use crate::services::log_dispatcher::LogDispatcher;
use crate::services::url_manager::UrlManager;

/// 시간대를 설정하지 않았고 `TZ` 도 없을 때의 기본값
pub const FALLBACK_TIME_ZONE: &str = "UTC";

/// 기본 런타임 디렉터리 (`@app` 기준)
const DEFAULT_RUNTIME_PATH: &str = "@app/runtime";

pub struct Application {
    id: String,
    base_path: PathBuf,
    runtime_path: PathBuf,
    time_zone: String,
    default_route: String,
    mode: ExecutionMode,
    process_name: String,
    params: Map<String, Value>,
    servers: ServerConfigs,
    tcp_enabled: bool,
    aliases: Aliases,
    registry: Arc<ServiceRegistry>,
    locator: HandlerLocator,
    pool: Option<HandlerPool>,
    trap: Arc<ErrorTrap>,
}

impl Application {
    /// inventory 로 수집된 서비스 클래스와 핸들러로 애플리케이션을 만듭니다.
    ///
    /// # Errors
    ///
    /// 시작 단계의 모든 실패는 `ConfigurationError` 입니다.
    pub fn new(raw: Value) -> AppResult<Self> {
        Self::with_tables(raw, ServiceClassTable::from_inventory(), HandlerTable::from_inventory())
    }

    /// 서비스 클래스 테이블과 핸들러 테이블을 직접 지정해 애플리케이션을 만듭니다.
    pub fn with_tables(raw: Value, classes: ServiceClassTable, handlers: HandlerTable) -> AppResult<Self> {
        let mut config = AppConfig::from_value(raw)?;
        config.pre_init()?;

        let id = config.id.clone().unwrap_or_default();
        let raw_base_path = config.base_path.clone().unwrap_or_default();

        let mut aliases = Aliases::new();
        let base_path = existing_directory(&aliases.resolve(&raw_base_path)?, "basePath")?;
        aliases.set(APP_ALIAS, base_path.clone());
        for (alias, path) in &config.aliases {
            let resolved = aliases.resolve(path)?;
            aliases.set(alias, resolved);
        }

        let raw_runtime_path = config.runtime_path.as_deref().unwrap_or(DEFAULT_RUNTIME_PATH);
        let runtime_path = existing_directory(&aliases.resolve(raw_runtime_path)?, "runtimePath")?;
        aliases.set(RUNTIME_ALIAS, runtime_path.clone());

        let time_zone = resolve_time_zone(config.time_zone.as_deref());

        let registry = Arc::new(ServiceRegistry::from_components(&config.components, &classes)?);
        for name in &config.bootstrap {
            registry.get(name).map_err(|e| {
                AppError::ConfigurationError(format!("Failed to bootstrap component \"{}\": {}", name, e))
            })?;
            debug!("bootstrap 컴포넌트 생성: {}", name);
        }

        let locator = HandlerLocator::new(config.controller_namespace.clone(), handlers, config.mode);
        let pool = config.pool_handlers.then(HandlerPool::new);

        let trap = Arc::new(ErrorTrap::new(registry.clone()));
        error_trap::install(trap.clone());

        info!(
            "애플리케이션 준비 완료: {} (base: {}, runtime: {}, timeZone: {}, 컴포넌트 {}개, 핸들러 {}개)",
            id,
            base_path.display(),
            runtime_path.display(),
            time_zone,
            registry.len(),
            locator.table().len()
        );

        Ok(Self {
            id,
            base_path,
            runtime_path,
            time_zone,
            default_route: config.default_route,
            mode: config.mode,
            process_name: config.process_name,
            params: config.params,
            servers: config.configs,
            tcp_enabled: config.tcp_enable,
            aliases,
            registry,
            locator,
            pool,
            trap,
        })
    }

    /// 라우트를 해석하고 핸들러 인스턴스를 찾습니다.
    ///
    /// 잘못된 라우트, 허용되지 않는 핸들러 ID, 미등록 타입은 모두 `None` 입니다.
    /// 풀이 켜져 있으면 같은 타입, 같은 ID 로 보관된 인스턴스를 먼저 꺼냅니다.
    pub fn dispatch(&self, route: &str) -> Option<Dispatched> {
        let resolved = resolve(route, &self.default_route)?;

        let pooled = match &self.pool {
            Some(pool) => {
                let type_name = self.locator.compose_type_name(&resolved.handler_id)?;
                pool.checkout(&type_name, &resolved.handler_id)
            }
            None => None,
        };
        let handler = match pooled {
            Some(handler) => handler,
            None => self.locator.locate(&resolved.handler_id)?,
        };

        Some(Dispatched {
            handler,
            action_id: resolved.action_id,
        })
    }

    /// 라우트를 요청 경계 안에서 디스패치하고 액션을 실행합니다.
    ///
    /// 핸들러 생성자와 액션의 패닉은 모두 경계에서 회수되어 이 애플리케이션의
    /// 에러 트랩으로 `file:line message` 형태로 보고됩니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 디스패치 실패 또는 핸들러가 모르는 액션
    /// * `HandlerPanic` - 생성이나 실행 중 패닉 (해당 인스턴스는 버려짐)
    pub fn run_route(&self, route: &str) -> AppResult<Value> {
        match error_trap::guard(|| self.run_dispatched(route)) {
            Ok(result) => result,
            Err(condition) => {
                self.trap.handle_error(&condition.message, &condition.file, condition.line);
                Err(AppError::HandlerPanic(condition.message))
            }
        }
    }

    fn run_dispatched(&self, route: &str) -> AppResult<Value> {
        let Some(Dispatched { mut handler, action_id }) = self.dispatch(route) else {
            return Err(AppError::NotFound(format!("Unable to resolve the request \"{}\".", route)));
        };

        let action_id = if action_id.is_empty() {
            handler.default_action().to_string()
        } else {
            action_id
        };

        let result = handler.run_action(&action_id, self);
        self.release(handler);
        result
    }

    /// 요청이 끝난 핸들러를 반환합니다. 풀이 꺼져 있으면 버립니다.
    pub fn release(&self, handler: Box<dyn Handler>) {
        if let Some(pool) = &self.pool {
            pool.checkin(handler);
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn runtime_path(&self) -> &Path {
        &self.runtime_path
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn default_route(&self) -> &str {
        &self.default_route
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// 주변 서버 부트스트랩용 프로토콜별 설정 블록
    pub fn servers(&self) -> &ServerConfigs {
        &self.servers
    }

    /// `configs.tcp` 블록을 서비스할지 여부 (`tcpEnable`, 기본값 true)
    pub fn tcp_enabled(&self) -> bool {
        self.tcp_enabled
    }

    pub fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    pub fn locator(&self) -> &HandlerLocator {
        &self.locator
    }

    pub fn pool(&self) -> Option<&HandlerPool> {
        self.pool.as_ref()
    }

    pub fn error_trap(&self) -> &Arc<ErrorTrap> {
        &self.trap
    }

    /// 공유 서비스 조회 (`ServiceRegistry::get`)
    pub fn get(&self, name: &str) -> AppResult<Arc<dyn Service>> {
        self.registry.get(name)
    }

    pub fn log(&self) -> AppResult<Arc<LogDispatcher>> {
        self.registry.get_as(LOG_SERVICE)
    }

    pub fn url_manager(&self) -> AppResult<Arc<UrlManager>> {
        self.registry.get_as(URL_MANAGER_SERVICE)
    }
}

fn existing_directory(path: &Path, field: &str) -> AppResult<PathBuf> {
    let canonical = path.canonicalize().map_err(|_| {
        AppError::ConfigurationError(format!(
            "The \"{}\" directory does not exist: {}",
            field,
            path.display()
        ))
    })?;
    if !canonical.is_dir() {
        return Err(AppError::ConfigurationError(format!(
            "The \"{}\" path is not a directory: {}",
            field,
            path.display()
        )));
    }
    Ok(canonical)
}

fn resolve_time_zone(configured: Option<&str>) -> String {
    if let Some(zone) = configured {
        return zone.to_string();
    }
    std::env::var("TZ")
        .ok()
        .map(|zone| zone.trim().to_string())
        .filter(|zone| !zone.is_empty())
        .unwrap_or_else(|| FALLBACK_TIME_ZONE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use serde_json::json;
    use tempfile::TempDir;
    use crate::handlers::index::IndexController;
    use crate::handlers::{HandlerKind, HandlerRegistration};
    use crate::core::error_trap::test_support;
    use crate::trap_error;

    const COUNTER: &str = "app::controllers::CounterController";

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("runtime")).unwrap();
        dir
    }

    fn base_config(dir: &TempDir) -> Value {
        json!({"id": "shop", "basePath": dir.path().to_str().unwrap()})
    }

    fn with(mut config: Value, key: &str, value: Value) -> Value {
        config[key] = value;
        config
    }

    struct Counter {
        id: String,
        hits: u32,
    }

    impl Handler for Counter {
        fn id(&self) -> &str {
            &self.id
        }

        fn type_name(&self) -> &str {
            "app::controllers::CounterController"
        }

        fn run_action(&mut self, action_id: &str, _app: &Application) -> AppResult<Value> {
            match action_id {
                "index" | "hit" => {
                    self.hits += 1;
                    Ok(json!({"hits": self.hits}))
                }
                "explode" => panic!("counter exploded"),
                other => Err(AppError::NotFound(other.to_string())),
            }
        }

        fn reset(&mut self) {
            self.hits = 0;
        }
    }

    fn counter(id: &str) -> Box<dyn Handler> {
        Box::new(Counter { id: id.to_string(), hits: 0 })
    }

    struct Migrate {
        id: String,
    }

    impl Handler for Migrate {
        fn id(&self) -> &str {
            &self.id
        }

        fn type_name(&self) -> &str {
            "app::controllers::MigrateController"
        }

        fn run_action(&mut self, _action_id: &str, _app: &Application) -> AppResult<Value> {
            Ok(json!("migrated"))
        }
    }

    fn migrate(id: &str) -> Box<dyn Handler> {
        Box::new(Migrate { id: id.to_string() })
    }

    fn test_handlers() -> HandlerTable {
        let mut table = HandlerTable::from_inventory();
        table.register(HandlerRegistration {
            type_name: "app::controllers::CounterController",
            kind: HandlerKind::Web,
            constructor: counter,
        });
        table.register(HandlerRegistration {
            type_name: "app::controllers::MigrateController",
            kind: HandlerKind::Console,
            constructor: migrate,
        });
        table
    }

    fn app_with(config: Value) -> Application {
        Application::with_tables(config, ServiceClassTable::from_inventory(), test_handlers()).unwrap()
    }

    #[test]
    fn test_missing_base_path_never_reaches_ready() {
        let _installs = test_support::shared();
        let err = Application::new(json!({"id": "shop"})).err().unwrap();

        assert!(err.is_configuration());
        assert!(err.to_string().contains("basePath"));
    }

    #[test]
    fn test_missing_id_never_reaches_ready() {
        let _installs = test_support::shared();
        let dir = fixture();
        let err = Application::new(json!({"basePath": dir.path().to_str().unwrap()})).err().unwrap();

        assert!(err.is_configuration());
    }

    #[test]
    fn test_nonexistent_base_path_is_fatal() {
        let _installs = test_support::shared();
        let dir = fixture();
        let missing = dir.path().join("missing");
        let err = Application::new(json!({"id": "shop", "basePath": missing.to_str().unwrap()}))
            .err()
            .unwrap();

        assert!(err.is_configuration());
    }

    #[test]
    fn test_base_path_must_be_directory() {
        let _installs = test_support::shared();
        let dir = fixture();
        let file = dir.path().join("app.json");
        fs::write(&file, "{}").unwrap();
        let err = Application::new(json!({"id": "shop", "basePath": file.to_str().unwrap()}))
            .err()
            .unwrap();

        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_runtime_directory_is_fatal() {
        let _installs = test_support::shared();
        let dir = tempfile::tempdir().unwrap();
        let err = Application::new(base_config(&dir)).err().unwrap();

        assert!(err.is_configuration());
        assert!(err.to_string().contains("runtimePath"));
    }

    #[test]
    fn test_default_runtime_path_and_aliases() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(base_config(&dir)).unwrap();
        let base = dir.path().canonicalize().unwrap();

        assert_eq!(app.id(), "shop");
        assert_eq!(app.base_path(), base.as_path());
        assert_eq!(app.runtime_path(), base.join("runtime").as_path());
        assert_eq!(app.aliases().get(APP_ALIAS), Some(base.as_path()));
        assert_eq!(app.aliases().get(RUNTIME_ALIAS), Some(base.join("runtime").as_path()));
    }

    #[test]
    fn test_runtime_path_through_configured_alias() {
        let _installs = test_support::shared();
        let dir = fixture();
        fs::create_dir_all(dir.path().join("var/tmp")).unwrap();
        let config = with(base_config(&dir), "aliases", json!({"@var": "@app/var"}));
        let app = Application::new(with(config, "runtimePath", json!("@var/tmp"))).unwrap();

        assert_eq!(app.runtime_path(), dir.path().canonicalize().unwrap().join("var/tmp").as_path());
    }

    #[test]
    fn test_explicit_time_zone() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(with(base_config(&dir), "timeZone", json!("Asia/Seoul"))).unwrap();

        assert_eq!(app.time_zone(), "Asia/Seoul");
    }

    #[test]
    fn test_time_zone_fallback_is_never_empty() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(base_config(&dir)).unwrap();

        assert!(!app.time_zone().is_empty());
        assert_eq!(resolve_time_zone(Some("Europe/Paris")), "Europe/Paris");
    }

    #[test]
    fn test_unknown_component_class_is_fatal() {
        let _installs = test_support::shared();
        let dir = fixture();
        let config = with(base_config(&dir), "components", json!({"cache": {"class": "RedisCache"}}));
        let err = Application::new(config).err().unwrap();

        assert!(err.is_configuration());
    }

    #[test]
    fn test_failing_bootstrap_component_is_fatal() {
        let _installs = test_support::shared();
        let dir = fixture();
        let config = with(base_config(&dir), "components", json!({"log": {"historySize": "lots"}}));
        let err = Application::new(with(config, "bootstrap", json!(["log"]))).err().unwrap();

        assert!(err.is_configuration());
    }

    #[test]
    fn test_bootstrap_components_are_constructed() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(with(base_config(&dir), "bootstrap", json!(["log"]))).unwrap();

        assert!(app.registry().peek(LOG_SERVICE).is_some());
        assert!(app.registry().peek(URL_MANAGER_SERVICE).is_none());
    }

    #[test]
    fn test_core_services_are_shared() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(base_config(&dir)).unwrap();

        let first = app.get(LOG_SERVICE).unwrap();
        let second = app.get(LOG_SERVICE).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(app.url_manager().unwrap().create_url("user/profile"), "/user/profile");
        assert!(matches!(app.get("mailer"), Err(AppError::UnknownService(_))));
    }

    #[test]
    fn test_error_trap_forwards_to_log_component() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(base_config(&dir)).unwrap();

        trap_error!(app.error_trap(), "quota exceeded for {}", "shop");

        let log = app.log().unwrap();
        assert!(log.recent().iter().any(|record| record.ends_with("quota exceeded for shop")));
    }

    #[test]
    fn test_dispatch_default_route() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(base_config(&dir)).unwrap();
        let dispatched = app.dispatch("").unwrap();

        assert_eq!(dispatched.handler.type_name(), IndexController::TYPE_NAME);
        assert_eq!(dispatched.handler.id(), "index");
        assert_eq!(dispatched.action_id, "");
    }

    #[test]
    fn test_dispatch_not_found_cases() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(base_config(&dir)).unwrap();

        for route in ["index//health", "missing/index", "in dex", "9index", "/", "index;ls/x"] {
            assert!(app.dispatch(route).is_none(), "route {:?}", route);
        }
    }

    #[test]
    fn test_run_route_builtin_actions() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(with(base_config(&dir), "processName", json!("shop-worker"))).unwrap();

        let index = app.run_route("").unwrap();
        assert_eq!(index["id"], json!("shop"));
        assert_eq!(index["processName"], json!("shop-worker"));
        assert_eq!(index["version"], json!(env!("CARGO_PKG_VERSION")));

        let health = app.run_route("index/health").unwrap();
        assert_eq!(health["status"], json!("healthy"));
        assert_eq!(health["components"], json!(["log", "urlManager"]));
    }

    #[test]
    fn test_run_route_not_found() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = Application::new(base_config(&dir)).unwrap();

        assert!(matches!(app.run_route("missing"), Err(AppError::NotFound(_))));
        assert!(matches!(app.run_route("a//b"), Err(AppError::NotFound(_))));
        assert!(matches!(app.run_route("index/missing"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_handler_panic_is_recovered() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = app_with(with(base_config(&dir), "poolHandlers", json!(true)));

        let err = app.run_route("counter/explode").unwrap_err();
        assert!(matches!(err, AppError::HandlerPanic(ref message) if message == "counter exploded"));
        assert_eq!(app.pool().unwrap().idle_count(COUNTER), 0);

        assert_eq!(app.run_route("counter/hit").unwrap(), json!({"hits": 1}));
    }

    #[test]
    fn test_handler_panic_reaches_lazily_built_log() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = app_with(base_config(&dir));
        assert!(app.registry().peek(LOG_SERVICE).is_none());

        assert!(matches!(app.run_route("counter/explode"), Err(AppError::HandlerPanic(_))));

        let log = app.log().unwrap();
        let records = log.recent();
        assert_eq!(records.len(), 1);
        assert!(records[0].ends_with(" counter exploded"), "record {:?}", records[0]);
        assert!(records[0].starts_with(file!()), "record {:?}", records[0]);
    }

    fn exploding(_id: &str) -> Box<dyn Handler> {
        panic!("constructor exploded")
    }

    #[test]
    fn test_constructor_panic_is_recovered() {
        let _installs = test_support::shared();
        let dir = fixture();
        let mut handlers = test_handlers();
        handlers.register(HandlerRegistration {
            type_name: "app::controllers::BrokenController",
            kind: HandlerKind::Web,
            constructor: exploding,
        });
        let app = Application::with_tables(base_config(&dir), ServiceClassTable::from_inventory(), handlers)
            .unwrap();

        let err = app.run_route("broken/index").unwrap_err();
        assert!(matches!(err, AppError::HandlerPanic(ref message) if message == "constructor exploded"));

        let log = app.log().unwrap();
        assert!(log.recent().iter().any(|record| record.ends_with(" constructor exploded")));
        assert_eq!(app.run_route("index/health").unwrap()["status"], json!("healthy"));
    }

    #[test]
    fn test_pooled_handlers_are_reset_before_reuse() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = app_with(with(base_config(&dir), "poolHandlers", json!(true)));

        assert_eq!(app.run_route("counter/hit").unwrap(), json!({"hits": 1}));
        assert_eq!(app.pool().unwrap().idle_count(COUNTER), 1);
        assert_eq!(app.run_route("counter").unwrap(), json!({"hits": 1}));
        assert_eq!(app.pool().unwrap().idle_count(COUNTER), 1);

        let checked_out = app.dispatch("counter/hit").unwrap();
        assert_eq!(app.pool().unwrap().idle_count(COUNTER), 0);
        app.release(checked_out.handler);
        assert_eq!(app.pool().unwrap().idle_count(COUNTER), 1);
    }

    #[test]
    fn test_case_variants_share_one_pool_slot() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = app_with(with(base_config(&dir), "poolHandlers", json!(true)));

        for route in ["counter/hit", "Counter/hit", "counter/hit", "Counter/hit"] {
            assert_eq!(app.run_route(route).unwrap(), json!({"hits": 1}), "route {}", route);
        }
        assert_eq!(app.pool().unwrap().idle_count(COUNTER), 2);

        let reused = app.dispatch("Counter/hit").unwrap();
        assert_eq!(reused.handler.id(), "Counter");
        assert_eq!(app.pool().unwrap().idle_count(COUNTER), 1);
    }

    #[test]
    fn test_pool_disabled_by_default() {
        let _installs = test_support::shared();
        let dir = fixture();
        let app = app_with(base_config(&dir));

        assert!(app.pool().is_none());
        assert_eq!(app.run_route("counter/hit").unwrap(), json!({"hits": 1}));
    }

    #[test]
    fn test_console_handlers_follow_mode() {
        let _installs = test_support::shared();
        let dir = fixture();
        let web = app_with(base_config(&dir));
        let console = app_with(with(base_config(&dir), "mode", json!("console")));

        assert!(web.dispatch("migrate").is_none());
        assert_eq!(console.mode(), ExecutionMode::Console);
        assert_eq!(console.run_route("migrate").unwrap(), json!("migrated"));
        assert!(console.dispatch("index").is_some());
    }

    #[test]
    fn test_params_and_server_blocks() {
        let _installs = test_support::shared();
        let dir = fixture();
        let config = with(base_config(&dir), "params", json!({"adminEmail": "ops@example.com"}));
        let app = Application::new(with(config, "configs", json!({"http": {"port": 9501}, "tcp": {"port": 9502}})))
            .unwrap();

        assert_eq!(app.param("adminEmail"), Some(&json!("ops@example.com")));
        assert_eq!(app.servers().http.as_ref().map(|http| http.port), Some(9501));
        assert!(app.servers().tcp.is_some());
        assert!(app.tcp_enabled());
    }

    #[test]
    fn test_tcp_can_be_disabled() {
        let _installs = test_support::shared();
        let dir = fixture();
        let config = with(base_config(&dir), "configs", json!({"tcp": {"port": 9502}}));
        let app = Application::new(with(config, "tcpEnable", json!(false))).unwrap();

        assert!(app.servers().tcp.is_some());
        assert!(!app.tcp_enabled());
    }
}
