//! # Service Registry - 지연 생성 공유 서비스 컨테이너
//!
//! 논리 이름(`log`, `urlManager` ...)을 서비스 디스크립터에 매핑하고,
//! 첫 조회 시점에 인스턴스를 만들어 프로세스 수명 동안 캐시합니다.
//!
//! ## 주요 구성 요소
//!
//! ### ServiceRegistry
//! - **명시적 컨테이너**: 전역 조회 없이 `Application`이 소유하고 참조로 전달
//! - **지연 초기화**: 첫 `get()` 에서 팩토리를 정확히 한 번 실행
//! - **single-flight**: `OnceCell::get_or_try_init` 으로 동시 호출자는 같은 인스턴스를 관찰
//! - **불변 조회**: Ready 이후에는 `&self` 만 노출되므로 디스크립터 변경이 불가능
//!
//! ### 자동 레지스트리 (클래스 스캔)
//! - **inventory 기반**: `ServiceRegistration` 을 컴파일 타임에 수집
//! - **클래스 테이블**: 컴포넌트 설정의 `class` 값을 팩토리로 해석
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 컴파일 타임
//!    └─ inventory::submit! { ServiceRegistration { class, constructor } }
//!
//! 2. 시작 단계 (Configuring)
//!    ├─ merge_core_components() → 내장 컴포넌트 병합
//!    ├─ ServiceClassTable::from_inventory() → class 이름 → 팩토리
//!    └─ ServiceRegistry::from_components() → 디스크립터 등록 (인스턴스 없음)
//!
//! 3. 요청 처리 (Ready)
//!    ├─ get(name) → 캐시 확인 → 없으면 팩토리 실행 후 캐시
//!    └─ 이후 같은 이름 조회 → 동일 Arc 반환
//! ```

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use log::debug;
use once_cell::sync::OnceCell;
use crate::config::ComponentConfig;
use crate::core::error_trap::ErrorSink;
use crate::core::errors::{AppError, AppResult};
use crate::services::log_dispatcher::LogDispatcher;
use crate::services::url_manager::UrlManager;

/// 내장 로그 디스패처 컴포넌트 이름
pub const LOG_SERVICE: &str = "log";

/// 내장 라우트 매니저 컴포넌트 이름
pub const URL_MANAGER_SERVICE: &str = "urlManager";

/// 레지스트리가 관리하는 공유 서비스
///
/// 구현체는 `into_any` 에서 `self` 를 그대로 반환하면 됩니다.
/// 에러 싱크 역할을 겸하는 서비스는 `as_error_sink` 를 재정의합니다.
pub trait Service: Any + Send + Sync {
    /// 등록된 컴포넌트 이름
    fn name(&self) -> &str;

    /// 구체 타입으로 다운캐스트하기 위한 변환
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// 에러 트랩이 레코드를 전달할 수 있는 싱크라면 반환
    fn as_error_sink(&self) -> Option<&dyn ErrorSink> {
        None
    }
}

/// inventory 에 제출되는 정적 생성자 시그니처
pub type ServiceConstructor = fn(&str, &ComponentConfig) -> AppResult<Arc<dyn Service>>;

/// 디스크립터가 보관하는 팩토리 (컴포넌트 이름, 설정) → 서비스
pub type ServiceFactory =
    Arc<dyn Fn(&str, &ComponentConfig) -> AppResult<Arc<dyn Service>> + Send + Sync>;

/// 서비스 클래스 등록 정보
///
/// ```rust,ignore
/// inventory::submit! {
///     ServiceRegistration { class: "LogDispatcher", constructor: LogDispatcher::construct }
/// }
/// ```
pub struct ServiceRegistration {
    pub class: &'static str,
    pub constructor: ServiceConstructor,
}

inventory::collect!(ServiceRegistration);

/// 클래스 이름 → 팩토리 테이블
#[derive(Clone, Default)]
pub struct ServiceClassTable {
    classes: HashMap<String, ServiceFactory>,
}

impl ServiceClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// inventory 로 수집된 모든 서비스 클래스를 담은 테이블을 만듭니다.
    pub fn from_inventory() -> Self {
        let mut table = Self::new();
        for registration in inventory::iter::<ServiceRegistration>() {
            let constructor = registration.constructor;
            table.insert(registration.class, move |name: &str, config: &ComponentConfig| {
                constructor(name, config)
            });
        }
        table
    }

    pub fn insert<F>(&mut self, class: impl Into<String>, factory: F)
    where
        F: Fn(&str, &ComponentConfig) -> AppResult<Arc<dyn Service>> + Send + Sync + 'static,
    {
        self.classes.insert(class.into(), Arc::new(factory));
    }

    pub fn get(&self, class: &str) -> Option<ServiceFactory> {
        self.classes.get(class).cloned()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }
}

/// 하나의 서비스에 대한 등록 레시피
///
/// 팩토리와 설정, 그리고 한 번 채워지면 바뀌지 않는 공유 인스턴스 슬롯을 가집니다.
pub struct ServiceDescriptor {
    class: String,
    config: ComponentConfig,
    factory: ServiceFactory,
    shared: OnceCell<Arc<dyn Service>>,
}

impl ServiceDescriptor {
    pub fn new<F>(class: impl Into<String>, config: ComponentConfig, factory: F) -> Self
    where
        F: Fn(&str, &ComponentConfig) -> AppResult<Arc<dyn Service>> + Send + Sync + 'static,
    {
        Self::with_factory(class, config, Arc::new(factory))
    }

    pub fn with_factory(class: impl Into<String>, config: ComponentConfig, factory: ServiceFactory) -> Self {
        Self {
            class: class.into(),
            config,
            factory,
            shared: OnceCell::new(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn config(&self) -> &ComponentConfig {
        &self.config
    }

    pub fn is_instantiated(&self) -> bool {
        self.shared.get().is_some()
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("class", &self.class)
            .field("config", &self.config)
            .field("instantiated", &self.is_instantiated())
            .finish()
    }
}

/// 지연 생성 서비스 레지스트리
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    descriptors: HashMap<String, ServiceDescriptor>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 병합이 끝난 컴포넌트 설정으로 레지스트리를 구성합니다.
    ///
    /// 인스턴스는 만들지 않습니다. `class` 가 없거나 클래스 테이블에 없는
    /// 컴포넌트는 시작 단계에서 바로 `ConfigurationError` 가 됩니다.
    pub fn from_components(
        components: &BTreeMap<String, ComponentConfig>,
        classes: &ServiceClassTable,
    ) -> AppResult<Self> {
        let mut registry = Self::new();
        for (name, config) in components {
            let class = config.class.as_deref().ok_or_else(|| {
                AppError::ConfigurationError(format!(
                    "Component \"{}\" must specify a \"class\"",
                    name
                ))
            })?;
            let factory = classes.get(class).ok_or_else(|| {
                AppError::ConfigurationError(format!(
                    "Unknown service class \"{}\" for component \"{}\"",
                    class, name
                ))
            })?;
            registry.register(name.clone(), ServiceDescriptor::with_factory(class, config.clone(), factory));
        }
        Ok(registry)
    }

    /// 디스크립터를 추가하거나 덮어씁니다. 설정 단계 전용입니다.
    pub fn register(&mut self, name: impl Into<String>, descriptor: ServiceDescriptor) {
        let name = name.into();
        debug!("서비스 디스크립터 등록: {} ({})", name, descriptor.class);
        self.descriptors.insert(name, descriptor);
    }

    pub fn has(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// 등록된 이름을 정렬해 반환합니다.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.descriptors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn descriptor(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.descriptors.get(name)
    }

    /// 공유 인스턴스를 반환합니다. 없으면 팩토리를 한 번 실행해 캐시합니다.
    ///
    /// 같은 이름에 대한 동시 첫 호출은 하나만 팩토리를 실행하고
    /// 나머지는 그 결과를 기다렸다가 동일한 인스턴스를 받습니다.
    ///
    /// # Errors
    ///
    /// * `UnknownService` - 등록되지 않은 이름
    /// * `ServiceConstruction` - 팩토리 실패 (캐시되지 않음)
    pub fn get(&self, name: &str) -> AppResult<Arc<dyn Service>> {
        let descriptor = self
            .descriptors
            .get(name)
            .ok_or_else(|| AppError::UnknownService(name.to_string()))?;

        descriptor
            .shared
            .get_or_try_init(|| {
                debug!("서비스 생성: {} ({})", name, descriptor.class);
                (descriptor.factory)(name, &descriptor.config).map_err(|e| match e {
                    AppError::ServiceConstruction { .. } => e,
                    other => AppError::ServiceConstruction {
                        name: name.to_string(),
                        reason: other.to_string(),
                    },
                })
            })
            .map(Arc::clone)
    }

    /// 공유 인스턴스를 구체 타입으로 반환합니다.
    pub fn get_as<T: Service>(&self, name: &str) -> AppResult<Arc<T>> {
        self.get(name)?
            .into_any()
            .downcast::<T>()
            .map_err(|_| {
                AppError::InternalError(format!(
                    "Service \"{}\" is not a {}",
                    name,
                    std::any::type_name::<T>()
                ))
            })
    }

    /// 이미 생성된 인스턴스만 반환합니다. 절대 생성하지 않습니다.
    pub fn peek(&self, name: &str) -> Option<Arc<dyn Service>> {
        self.descriptors
            .get(name)
            .and_then(|descriptor| descriptor.shared.get())
            .map(Arc::clone)
    }
}

/// 내장 컴포넌트 정의
pub fn core_components() -> BTreeMap<String, ComponentConfig> {
    BTreeMap::from([
        (LOG_SERVICE.to_string(), ComponentConfig::of_class(LogDispatcher::CLASS)),
        (URL_MANAGER_SERVICE.to_string(), ComponentConfig::of_class(UrlManager::CLASS)),
    ])
}

/// 내장 컴포넌트를 호출자 설정에 병합합니다
///
/// - 호출자 설정에 없는 컴포넌트 → 내장 정의를 그대로 추가
/// - `class` 없이 파라미터만 준 컴포넌트 → 내장 `class` 만 채움
/// - `class` 를 직접 지정한 컴포넌트 → 손대지 않음
///
/// 두 번 적용해도 결과가 같습니다.
pub fn merge_core_components(components: &mut BTreeMap<String, ComponentConfig>) {
    for (name, core) in core_components() {
        match components.get_mut(&name) {
            None => {
                components.insert(name, core);
            }
            Some(component) if component.class.is_none() => {
                component.class = core.class;
            }
            Some(_) => {}
        }
    }
}
