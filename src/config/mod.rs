//! # Configuration Module
//!
//! 시작 단계에서 한 번 소비되는 설정을 다루는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 애플리케이션 원시 설정, 컴포넌트 설정, 실행 모드
//! - [`aliases`] - `@app`, `@runtime` 경로 별칭
//! - [`server_config`] - `configs.http` 서버 블록과 환경 변수 덮어쓰기
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use dispatch_core::config::AppConfig;
//!
//! let mut config = AppConfig::from_value(serde_json::json!({"id": "shop", "basePath": "/srv"}))?;
//! config.pre_init()?;
//! ```

pub mod aliases;
pub mod app_config;
pub mod server_config;

pub use aliases::*;
pub use app_config::*;
pub use server_config::*;
