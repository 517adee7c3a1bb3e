//! 로그 디스패처 서비스 (`log` 컴포넌트)
//!
//! 에러 트랩의 로거 협력자입니다. 레코드를 `log` 파사드로 내보내고,
//! 최근 레코드를 제한된 크기만큼 보관해 상태 점검에 사용할 수 있게 합니다.
//!
//! ```json
//! { "components": { "log": { "target": "shop", "historySize": 50 } } }
//! ```

use std::any::Any;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use serde::Deserialize;
use crate::config::ComponentConfig;
use crate::core::error_trap::ErrorSink;
use crate::core::errors::AppResult;
use crate::core::registry::{Service, ServiceRegistration};

fn default_target() -> String {
    "app".to_string()
}

fn default_history_size() -> usize {
    100
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LogOptions {
    #[serde(default = "default_target")]
    target: String,
    #[serde(default = "default_history_size")]
    history_size: usize,
}

/// `file:line message` 레코드를 받아 로그로 내보내는 서비스
pub struct LogDispatcher {
    name: String,
    target: String,
    history_size: usize,
    history: Mutex<VecDeque<String>>,
}

impl LogDispatcher {
    pub const CLASS: &'static str = "LogDispatcher";

    pub fn new(name: impl Into<String>, target: impl Into<String>, history_size: usize) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            history_size,
            history: Mutex::new(VecDeque::with_capacity(history_size)),
        }
    }

    /// 레지스트리 팩토리
    pub fn construct(name: &str, config: &ComponentConfig) -> AppResult<Arc<dyn Service>> {
        let options: LogOptions = config.options()?;
        Ok(Arc::new(Self::new(name, options.target, options.history_size)))
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// 보관 중인 레코드 (오래된 것부터)
    pub fn recent(&self) -> Vec<String> {
        self.lock_history().iter().cloned().collect()
    }

    fn lock_history(&self) -> MutexGuard<'_, VecDeque<String>> {
        // 패닉 훅에서도 호출되므로 poison 상태를 그대로 이어서 씀
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ErrorSink for LogDispatcher {
    fn error(&self, message: &str) {
        log::error!(target: self.target.as_str(), "{}", message);

        if self.history_size == 0 {
            return;
        }
        let mut history = self.lock_history();
        while history.len() >= self.history_size {
            history.pop_front();
        }
        history.push_back(message.to_string());
    }
}

impl Service for LogDispatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn as_error_sink(&self) -> Option<&dyn ErrorSink> {
        Some(self)
    }
}

inventory::submit! {
    ServiceRegistration { class: LogDispatcher::CLASS, constructor: LogDispatcher::construct }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_construct_with_defaults() {
        let service = LogDispatcher::construct("log", &ComponentConfig::of_class(LogDispatcher::CLASS)).unwrap();
        let log = service.into_any().downcast::<LogDispatcher>().unwrap();

        assert_eq!(log.name(), "log");
        assert_eq!(log.target(), "app");
        assert!(log.recent().is_empty());
    }

    #[test]
    fn test_construct_with_options() {
        let config: ComponentConfig =
            serde_json::from_value(json!({"class": "LogDispatcher", "target": "shop", "historySize": 2})).unwrap();
        let service = LogDispatcher::construct("audit", &config).unwrap();

        assert_eq!(service.name(), "audit");
        assert!(service.as_error_sink().is_some());
    }

    #[test]
    fn test_construct_rejects_bad_options() {
        let config: ComponentConfig =
            serde_json::from_value(json!({"class": "LogDispatcher", "historySize": -1})).unwrap();

        assert!(matches!(LogDispatcher::construct("log", &config), Err(e) if e.is_configuration()));
    }

    #[test]
    fn test_history_is_bounded() {
        let log = LogDispatcher::new("log", "app", 2);

        log.error("a.rs:1 first");
        log.error("a.rs:2 second");
        log.error("a.rs:3 third");

        assert_eq!(log.recent(), vec!["a.rs:2 second".to_string(), "a.rs:3 third".to_string()]);
    }

    #[test]
    fn test_zero_history_keeps_nothing() {
        let log = LogDispatcher::new("log", "app", 0);
        log.error("a.rs:1 dropped");

        assert!(log.recent().is_empty());
    }
}
