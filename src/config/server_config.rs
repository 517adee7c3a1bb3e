//! HTTP 서버 바인딩 설정
//!
//! `configs.http` 블록을 역직렬화하고 환경 변수로 덮어씁니다.
//! 디스패치 코어가 아니라 바이너리의 서버 부트스트랩이 소비합니다.

use std::env;
use serde::Deserialize;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    4
}

fn default_rate_limit_per_second() -> u64 {
    100
}

fn default_rate_limit_burst() -> u32 {
    200
}

/// `configs.http` 블록
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default = "default_rate_limit_per_second")]
    pub rate_limit_per_second: u64,
    #[serde(default = "default_rate_limit_burst")]
    pub rate_limit_burst: u32,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            rate_limit_per_second: default_rate_limit_per_second(),
            rate_limit_burst: default_rate_limit_burst(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// `HOST` / `PORT` 환경 변수가 있으면 덮어씁니다.
    ///
    /// 파싱할 수 없는 `PORT` 값은 무시됩니다.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = env::var("HOST") {
            if !host.trim().is_empty() {
                self.host = host.trim().to_string();
            }
        }
        if let Some(port) = env::var("PORT").ok().and_then(|p| p.trim().parse().ok()) {
            self.port = port;
        }
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
