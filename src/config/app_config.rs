//! 애플리케이션 설정 모델
//!
//! 시작 단계에서 한 번 소비되는 원시 설정 매핑(JSON)을 타입으로 역직렬화합니다.
//! 키는 camelCase 를 사용합니다.
//!
//! ```json
//! {
//!   "id": "shop",
//!   "basePath": "/srv/shop",
//!   "timeZone": "Asia/Seoul",
//!   "components": { "log": { "target": "shop" } },
//!   "configs": { "http": { "port": 9501 }, "tcp": { "port": 9502 } }
//! }
//! ```

use std::collections::BTreeMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::config::server_config::HttpServerConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::merge_core_components;
use crate::utils::string_utils::{deserialize_optional_string, validate_required_string};

/// 기본 라우트 (빈 라우트 문자열 대체값)
pub const DEFAULT_ROUTE: &str = "index";

/// 핸들러 타입 이름의 기본 네임스페이스
pub const DEFAULT_CONTROLLER_NAMESPACE: &str = "app::controllers";

/// 기본 프로세스 이름
pub const DEFAULT_PROCESS_NAME: &str = "dispatch-core";

fn default_route() -> String {
    DEFAULT_ROUTE.to_string()
}

fn default_controller_namespace() -> String {
    DEFAULT_CONTROLLER_NAMESPACE.to_string()
}

fn default_process_name() -> String {
    DEFAULT_PROCESS_NAME.to_string()
}

fn default_tcp_enable() -> bool {
    true
}

/// 실행 모드
///
/// 콘솔 모드에서만 콘솔 핸들러가 라우트 대상이 될 수 있습니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Web,
    Console,
}

/// 서비스 컴포넌트 설정
///
/// `class` 를 생략하면 같은 이름의 내장 컴포넌트 클래스가 병합됩니다.
/// 나머지 키는 모두 클래스별 옵션(`params`)으로 보관됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl ComponentConfig {
    pub fn of_class(class: &str) -> Self {
        Self {
            class: Some(class.to_string()),
            params: Map::new(),
        }
    }

    /// 옵션을 클래스별 타입으로 역직렬화합니다.
    pub fn options<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_value(Value::Object(self.params.clone())).map_err(|e| {
            AppError::ConfigurationError(format!(
                "Invalid options for class \"{}\": {}",
                self.class.as_deref().unwrap_or("<unset>"),
                e
            ))
        })
    }
}

/// 프로토콜별 서버 설정 블록
///
/// 코어가 아닌 주변 서버 부트스트랩이 소비합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigs {
    #[serde(default)]
    pub http: Option<HttpServerConfig>,
    #[serde(default)]
    pub tcp: Option<Value>,
}

/// 애플리케이션 원시 설정
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub base_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub runtime_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub time_zone: Option<String>,
    #[serde(default = "default_route")]
    pub default_route: String,
    #[serde(default = "default_controller_namespace")]
    pub controller_namespace: String,
    #[serde(default)]
    pub mode: ExecutionMode,
    #[serde(default = "default_process_name")]
    pub process_name: String,
    #[serde(default)]
    pub pool_handlers: bool,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    #[serde(default)]
    pub components: BTreeMap<String, ComponentConfig>,
    #[serde(default)]
    pub bootstrap: Vec<String>,
    #[serde(default)]
    pub params: Map<String, Value>,
    #[serde(default)]
    pub configs: ServerConfigs,
    /// `configs.tcp` 블록 사용 여부
    #[serde(default = "default_tcp_enable")]
    pub tcp_enable: bool,
}

impl AppConfig {
    /// 원시 설정 매핑을 역직렬화합니다.
    ///
    /// 매핑이 아니거나 타입이 맞지 않으면 `ConfigurationError` 입니다.
    pub fn from_value(raw: Value) -> AppResult<Self> {
        if !raw.is_object() {
            return Err(AppError::ConfigurationError(
                "Application configuration must be a mapping".to_string(),
            ));
        }
        serde_json::from_value(raw)
            .map_err(|e| AppError::ConfigurationError(format!("Invalid application configuration: {}", e)))
    }

    /// 필수 필드를 검증하고 내장 컴포넌트를 병합합니다.
    ///
    /// `id` 와 `basePath` 가 없으면 시작을 중단해야 하는 `ConfigurationError` 입니다.
    /// 병합은 멱등이므로 여러 번 호출해도 결과가 같습니다.
    pub fn pre_init(&mut self) -> AppResult<()> {
        self.id = Some(validate_required_string(self.id.as_deref(), "id")?);
        self.base_path = Some(validate_required_string(self.base_path.as_deref(), "basePath")?);
        merge_core_components(&mut self.components);
        Ok(())
    }
}
