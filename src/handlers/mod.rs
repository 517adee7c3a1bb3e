//! # Request Handlers Module
//!
//! 해석된 라우트를 실제로 처리하는 핸들러("controller") 계약과,
//! 핸들러 ID 로부터 핸들러 인스턴스를 찾아 만드는 로케이터를 정의합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! route string
//!   │  routes::resolver::resolve
//!   ▼
//! (handler_id, action_id)
//!   │  handlers::locator::HandlerLocator::locate
//!   ▼
//! Box<dyn Handler>  ──run_action(action_id, &Application)──▶ serde_json::Value
//! ```
//!
//! ## 핸들러 등록
//!
//! 런타임 리플렉션 대신 빌드 타임 등록 테이블을 사용합니다.
//! 각 핸들러 타입은 정규화된 타입 이름(`app::controllers::admin::UserController`)과
//! 생성자를 `inventory::submit!` 으로 제출합니다.
//!
//! ```rust,ignore
//! inventory::submit! {
//!     HandlerRegistration {
//!         type_name: "app::controllers::SecurityKeyController",
//!         kind: HandlerKind::Web,
//!         constructor: SecurityKeyController::construct,
//!     }
//! }
//! ```
//!
//! `security-key/rotate` 라우트는 `SecurityKeyController` 의 `rotate` 액션으로 갑니다.

use std::fmt;
use serde_json::Value;
use crate::core::application::Application;
use crate::core::errors::AppResult;

pub mod index;
pub mod locator;
pub mod pool;

pub use locator::{HandlerLocator, HandlerTable, HANDLER_SUFFIX};
pub use pool::HandlerPool;

/// 핸들러가 라우트 대상이 될 수 있는 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Web,
    Console,
}

/// 하나의 해석된 라우트를 처리하는 단위
///
/// 인스턴스는 자신을 만든 요청이 독점합니다. 풀을 쓰는 경우에도
/// 동시에 두 요청에 전달되지 않으며, 재사용 전 `reset` 이 호출됩니다.
pub trait Handler: Send {
    /// 생성 시 전달된 핸들러 ID
    fn id(&self) -> &str;

    /// 정규화된 타입 이름. 등록 테이블의 이름과 정확히 같아야 합니다.
    fn type_name(&self) -> &str;

    /// 액션 ID 가 비어 있을 때 실행할 액션
    fn default_action(&self) -> &str {
        "index"
    }

    /// 액션을 실행합니다. 알 수 없는 액션은 `AppError::NotFound` 입니다.
    fn run_action(&mut self, action_id: &str, app: &Application) -> AppResult<Value>;

    /// 풀에 반환되기 전 요청별 상태를 지웁니다.
    fn reset(&mut self) {}
}

/// 핸들러 생성자 (핸들러 ID 가 유일한 인자)
pub type HandlerConstructor = fn(&str) -> Box<dyn Handler>;

/// 핸들러 타입 등록 정보
#[derive(Clone, Copy)]
pub struct HandlerRegistration {
    pub type_name: &'static str,
    pub kind: HandlerKind,
    pub constructor: HandlerConstructor,
}

impl fmt::Debug for HandlerRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistration")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .finish()
    }
}

inventory::collect!(HandlerRegistration);

/// 디스패치 결과: 핸들러 인스턴스와 실행할 액션 ID
pub struct Dispatched {
    pub handler: Box<dyn Handler>,
    pub action_id: String,
}

impl fmt::Debug for Dispatched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatched")
            .field("handler", &self.handler.type_name())
            .field("handler_id", &self.handler.id())
            .field("action_id", &self.action_id)
            .finish()
    }
}
