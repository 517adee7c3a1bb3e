//! # Core Module
//!
//! 요청 디스패치 코어의 핵심 구성 요소를 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`application`] - 애플리케이션 코어
//! - **시작 단계**: 설정 검증, 경로/시간대 해석, 레지스트리 구성, 에러 트랩 설치
//! - **디스패치**: 라우트 해석기와 핸들러 로케이터를 조합
//!
//! ### [`registry`] - 지연 생성 서비스 레지스트리
//! - **inventory 기반**: 서비스 클래스의 컴파일 타임 등록
//! - **single-flight**: 이름당 인스턴스 하나, 팩토리는 정확히 한 번 실행
//!
//! ### [`error_trap`] - 에러/치명 상황 포착
//! - **요청 경계**: `guard` 로 핸들러 패닉 회수
//! - **패닉 훅**: 경계 밖의 패닉을 치명 상황으로 기록해 로그 컴포넌트로 전달
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 코어 전역 에러 타입, actix-web `ResponseError` 구현
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use dispatch_core::core::Application;
//! use serde_json::json;
//!
//! let app = Application::new(json!({"id": "shop", "basePath": "/srv/shop"}))?;
//!
//! if let Some(dispatched) = app.dispatch("admin/user/edit") {
//!     // dispatched.handler, dispatched.action_id
//! }
//! ```

pub mod application;
pub mod error_trap;
pub mod errors;
pub mod registry;

pub use application::Application;
pub use errors::{AppError, AppResult};
pub use registry::{Service, ServiceRegistry};
