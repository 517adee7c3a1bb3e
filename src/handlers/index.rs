//! 내장 인덱스 핸들러
//!
//! 기본 라우트(`index`)의 대상입니다.
//!
//! - `index` (기본 액션) - 애플리케이션 ID, 버전, 프로세스 이름, 시간대
//! - `health` - 상태와 등록된 컴포넌트 목록

use chrono::Utc;
use serde_json::{json, Value};
use crate::core::application::Application;
use crate::core::errors::{AppError, AppResult};
use crate::handlers::{Handler, HandlerKind, HandlerRegistration};

pub struct IndexController {
    id: String,
}

impl IndexController {
    pub const TYPE_NAME: &'static str = "app::controllers::IndexController";

    pub fn construct(id: &str) -> Box<dyn Handler> {
        Box::new(Self { id: id.to_string() })
    }

    fn index(&self, app: &Application) -> Value {
        json!({
            "id": app.id(),
            "version": app.version(),
            "processName": app.process_name(),
            "timeZone": app.time_zone(),
            "timestamp": Utc::now().to_rfc3339(),
        })
    }

    fn health(&self, app: &Application) -> Value {
        json!({
            "status": "healthy",
            "components": app.registry().names(),
            "timestamp": Utc::now().to_rfc3339(),
        })
    }
}

impl Handler for IndexController {
    fn id(&self) -> &str {
        &self.id
    }

    fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    fn run_action(&mut self, action_id: &str, app: &Application) -> AppResult<Value> {
        match action_id {
            "index" => Ok(self.index(app)),
            "health" => Ok(self.health(app)),
            other => Err(AppError::NotFound(format!(
                "Unable to resolve the request \"{}/{}\".",
                self.id, other
            ))),
        }
    }
}

inventory::submit! {
    HandlerRegistration {
        type_name: IndexController::TYPE_NAME,
        kind: HandlerKind::Web,
        constructor: IndexController::construct,
    }
}
