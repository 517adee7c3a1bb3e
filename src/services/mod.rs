//! 내장 공유 서비스 모듈
//!
//! 레지스트리에 기본으로 등록되는 컴포넌트 클래스들입니다.
//! 각 클래스는 `inventory::submit!` 으로 자신을 등록하므로
//! 설정에서 `class` 이름만으로 참조할 수 있습니다.
//!
//! | 컴포넌트 | 클래스 | 역할 |
//! |----------|--------|------|
//! | `log` | [`log_dispatcher::LogDispatcher`] | 에러 레코드 싱크 |
//! | `urlManager` | [`url_manager::UrlManager`] | 요청 경로 → 라우트 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use dispatch_core::services::log_dispatcher::LogDispatcher;
//!
//! let log = app.registry().get_as::<LogDispatcher>("log")?;
//! println!("{:?}", log.recent());
//! ```

pub mod log_dispatcher;
pub mod url_manager;
