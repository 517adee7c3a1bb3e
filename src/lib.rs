//! 디스패치 코어
//!
//! 장기 실행 애플리케이션 서버를 위한 요청 디스패치 코어입니다.
//! 라우트 문자열을 안전하게 핸들러와 액션으로 해석하고, 이름 기반의
//! 지연 생성 공유 서비스를 제공하며, 워커 프로세스의 에러를 로그 컴포넌트로 모읍니다.
//!
//! # Features
//!
//! - **라우트 해석**: `admin/user/edit` → (`admin/user`, `edit`), `//` 포함 라우트 거부
//! - **핸들러 로케이터**: 허용 목록 검증, 네임스페이스 합성, 타입 일치 확인
//! - **서비스 레지스트리**: `inventory` 등록 + `OnceCell` single-flight 지연 생성
//! - **에러 트랩**: 요청 경계의 패닉 회수와 `file:line message` 로그 전달
//! - **HTTP 연결**: actix-web catch-all 서비스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← catch-all, urlManager 로 경로 → 라우트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Application   │ ← resolve + locate, 요청 경계
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← run_action(action, &Application)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← log, urlManager, ... (지연 생성 공유 인스턴스)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use dispatch_core::core::Application;
//! use serde_json::json;
//!
//! let app = Application::new(json!({"id": "shop", "basePath": "/srv/shop"}))?;
//! let body = app.run_route("index/health")?;
//! ```

pub mod core;
pub mod config;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
