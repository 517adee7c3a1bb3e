//! 경로 별칭 (`@app`, `@runtime` ...)
//!
//! 시작 단계의 경로 해석에만 사용됩니다.
//! `@` 로 시작하지 않는 경로는 그대로 반환됩니다.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use crate::core::errors::{AppError, AppResult};

/// 애플리케이션 기본 디렉터리 별칭
pub const APP_ALIAS: &str = "@app";

/// 런타임 파일 디렉터리 별칭
pub const RUNTIME_ALIAS: &str = "@runtime";

/// 별칭 → 디렉터리 매핑
#[derive(Debug, Clone, Default)]
pub struct Aliases {
    roots: BTreeMap<String, PathBuf>,
}

impl Aliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// 별칭을 등록합니다. 이름 앞의 `@` 는 생략해도 됩니다.
    pub fn set(&mut self, alias: &str, path: impl Into<PathBuf>) {
        let name = if alias.starts_with('@') {
            alias.to_string()
        } else {
            format!("@{}", alias)
        };
        self.roots.insert(name, path.into());
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.roots.get(alias).map(PathBuf::as_path)
    }

    /// 경로 토큰을 파일 시스템 경로로 해석합니다.
    ///
    /// `@app/runtime` 은 `@app` 의 경로에 `runtime` 을 붙인 결과입니다.
    ///
    /// # Errors
    ///
    /// 등록되지 않은 별칭이면 `ConfigurationError`
    pub fn resolve(&self, token: &str) -> AppResult<PathBuf> {
        if !token.starts_with('@') {
            return Ok(PathBuf::from(token));
        }

        let (alias, rest) = match token.find('/') {
            Some(pos) => (&token[..pos], token[pos + 1..].trim_start_matches('/')),
            None => (token, ""),
        };
        let root = self
            .roots
            .get(alias)
            .ok_or_else(|| AppError::ConfigurationError(format!("Invalid path alias: {}", token)))?;

        Ok(if rest.is_empty() { root.clone() } else { root.join(rest) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paths_pass_through() {
        let aliases = Aliases::new();

        assert_eq!(aliases.resolve("/srv/app").unwrap(), PathBuf::from("/srv/app"));
        assert_eq!(aliases.resolve("relative/dir").unwrap(), PathBuf::from("relative/dir"));
    }

    #[test]
    fn test_resolve_alias_with_suffix() {
        let mut aliases = Aliases::new();
        aliases.set(APP_ALIAS, "/srv/app");
        aliases.set("data", "/var/data");

        assert_eq!(aliases.resolve("@app").unwrap(), PathBuf::from("/srv/app"));
        assert_eq!(aliases.resolve("@app/runtime").unwrap(), PathBuf::from("/srv/app/runtime"));
        assert_eq!(aliases.resolve("@data/cache/x").unwrap(), PathBuf::from("/var/data/cache/x"));
        assert_eq!(aliases.get("@data"), Some(Path::new("/var/data")));
    }

    #[test]
    fn test_unknown_alias_is_configuration_error() {
        let aliases = Aliases::new();
        let err = aliases.resolve("@nowhere/logs").unwrap_err();

        assert!(err.is_configuration());
    }
}
