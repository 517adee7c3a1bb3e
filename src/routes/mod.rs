//! HTTP 라우트 설정 모듈
//!
//! 디스패치 코어를 actix-web 서버에 연결합니다. 개별 엔드포인트를 등록하지 않고,
//! 모든 경로를 하나의 catch-all 서비스로 받아 라우트 문자열로 바꾼 뒤
//! `Application::run_route` 에 넘깁니다.
//!
//! ```text
//! GET /admin/user/edit.html
//!   │  urlManager.parse_path   (접미사 제거, 규칙 적용)
//!   ▼
//! "admin/user/edit"
//!   │  web::block(run_route)   (핸들러는 블로킹 스레드에서 실행)
//!   ▼
//! 200 {...} | 404 {"error": ...} | 500 {"error": ...}
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(application))
//!     .configure(configure_all_routes);
//! ```

pub mod resolver;

use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;
use crate::core::application::Application;
use crate::core::errors::AppError;

/// 모든 라우트를 설정합니다
///
/// 애플리케이션 데이터로 `web::Data<Application>` 이 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.default_service(web::to(dispatch_request));
}

/// 요청 경로를 라우트로 변환해 디스패치합니다
async fn dispatch_request(
    app: web::Data<Application>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let route = app.url_manager()?.parse_path(req.path());
    debug!("{} {} → route {:?}", req.method(), req.path(), route);

    let app = app.into_inner();
    let result = web::block(move || app.run_route(&route))
        .await
        .map_err(|e| AppError::InternalError(format!("Blocking dispatch failed: {}", e)))??;

    Ok(HttpResponse::Ok().json(result))
}
