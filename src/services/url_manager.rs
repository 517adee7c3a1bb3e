//! 라우트 매니저 서비스 (`urlManager` 컴포넌트)
//!
//! HTTP 요청 경로를 라우트 문자열로 바꾸고, 반대로 라우트에서 URL 을 만듭니다.
//! 규칙은 경로 → 라우트의 정확 일치만 지원합니다.
//!
//! ```json
//! {
//!   "components": {
//!     "urlManager": { "suffix": ".html", "rules": { "about": "index/about" } }
//!   }
//! }
//! ```

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;
use serde::Deserialize;
use crate::config::ComponentConfig;
use crate::core::errors::AppResult;
use crate::core::registry::{Service, ServiceRegistration};
use crate::utils::string_utils::trim_slashes;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UrlManagerOptions {
    #[serde(default)]
    rules: BTreeMap<String, String>,
    #[serde(default)]
    suffix: Option<String>,
}

/// 요청 경로 ↔ 라우트 변환 서비스
#[derive(Debug)]
pub struct UrlManager {
    name: String,
    rules: BTreeMap<String, String>,
    suffix: String,
}

impl UrlManager {
    pub const CLASS: &'static str = "UrlManager";

    pub fn new(name: impl Into<String>, rules: BTreeMap<String, String>, suffix: Option<String>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(path, route)| (trim_slashes(&path).to_string(), route))
            .collect();
        Self {
            name: name.into(),
            rules,
            suffix: suffix.unwrap_or_default(),
        }
    }

    /// 레지스트리 팩토리
    pub fn construct(name: &str, config: &ComponentConfig) -> AppResult<Arc<dyn Service>> {
        let options: UrlManagerOptions = config.options()?;
        Ok(Arc::new(Self::new(name, options.rules, options.suffix)))
    }

    /// 요청 경로를 라우트 문자열로 바꿉니다.
    ///
    /// 접미사를 떼고 앞뒤 `/` 를 제거한 뒤, 일치하는 규칙이 있으면 그 라우트를 씁니다.
    /// 검증은 하지 않습니다. 라우트 해석 단계가 담당합니다.
    pub fn parse_path(&self, path: &str) -> String {
        let mut path = trim_slashes(path);
        if !self.suffix.is_empty() {
            if let Some(stripped) = path.strip_suffix(self.suffix.as_str()) {
                path = trim_slashes(stripped);
            }
        }
        match self.rules.get(path) {
            Some(route) => route.clone(),
            None => path.to_string(),
        }
    }

    /// 라우트에서 URL 을 만듭니다.
    pub fn create_url(&self, route: &str) -> String {
        let route = trim_slashes(route);
        if route.is_empty() {
            return "/".to_string();
        }
        format!("/{}{}", route, self.suffix)
    }
}

impl Service for UrlManager {
    fn name(&self) -> &str {
        &self.name
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

inventory::submit! {
    ServiceRegistration { class: UrlManager::CLASS, constructor: UrlManager::construct }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manager(options: serde_json::Value) -> Arc<UrlManager> {
        let config: ComponentConfig = serde_json::from_value(options).unwrap();
        UrlManager::construct("urlManager", &config)
            .unwrap()
            .into_any()
            .downcast::<UrlManager>()
            .unwrap()
    }

    #[test]
    fn test_parse_plain_paths() {
        let urls = manager(json!({"class": "UrlManager"}));

        assert_eq!(urls.parse_path("/user/profile"), "user/profile");
        assert_eq!(urls.parse_path("/"), "");
        assert_eq!(urls.parse_path(""), "");
        assert_eq!(urls.parse_path("/a//b/"), "a//b");
    }

    #[test]
    fn test_parse_with_suffix_and_rules() {
        let urls = manager(json!({
            "class": "UrlManager",
            "suffix": ".html",
            "rules": {"/about/": "index/about"}
        }));

        assert_eq!(urls.parse_path("/about.html"), "index/about");
        assert_eq!(urls.parse_path("/about"), "index/about");
        assert_eq!(urls.parse_path("/admin/user/edit.html"), "admin/user/edit");
    }

    #[test]
    fn test_create_url() {
        let urls = manager(json!({"class": "UrlManager", "suffix": ".html"}));

        assert_eq!(urls.create_url("user/profile"), "/user/profile.html");
        assert_eq!(urls.create_url(""), "/");
        assert_eq!(manager(json!({})).create_url("/index/"), "/index");
    }
}
