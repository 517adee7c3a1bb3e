//! # Application Error Handling System
//!
//! 디스패치 코어 전체에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 주변 HTTP 서버가 그대로 응답으로 변환할 수 있도록 합니다.
//!
//! ## 에러 분류
//!
//! | 분류 | 변형 | 발생 시점 |
//! |------|------|-----------|
//! | 설정 오류 (치명적) | `ConfigurationError` | 시작 단계에서만 |
//! | 프로그래머 오류 | `UnknownService` | 등록되지 않은 서비스 조회 |
//! | 서비스 생성 실패 | `ServiceConstruction` | 팩토리 실행 중 |
//! | 찾을 수 없음 | `NotFound` | 요청 단위 편의 API에서만 |
//! | 핸들러 패닉 | `HandlerPanic` | 요청 경계에서 회수된 패닉 |
//!
//! 잘못된 라우트나 핸들러 식별자는 에러가 아닙니다. 코어 내부에서는 항상
//! `None` 으로 표현되며, `Application::run_route` 같은 요청 단위 API만
//! 이를 `AppError::NotFound` 로 바꿉니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use dispatch_core::core::errors::{AppError, AppResult};
//!
//! fn require_id(id: Option<&str>) -> AppResult<String> {
//!     id.map(str::to_string)
//!         .ok_or_else(|| AppError::ConfigurationError("id is required".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 디스패치 코어에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 시작 단계 설정 오류
    ///
    /// `id`/`basePath` 누락, 존재하지 않는 디렉터리, 알 수 없는 서비스 클래스 등.
    /// 이 에러가 발생하면 애플리케이션은 Ready 상태에 도달하지 않습니다.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 등록되지 않은 서비스 이름으로 조회한 경우
    ///
    /// 런타임 사용자 입력이 아니라 시작 단계 배선(wiring) 버그를 의미합니다.
    #[error("Unknown service: {0}")]
    UnknownService(String),

    /// 서비스 팩토리가 인스턴스 생성에 실패한 경우
    ///
    /// 실패한 생성은 캐시되지 않으므로 다음 조회에서 다시 시도됩니다.
    #[error("Failed to construct service '{name}': {reason}")]
    ServiceConstruction { name: String, reason: String },

    /// 리소스(라우트, 액션)를 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 요청 경계 안에서 핸들러가 패닉한 경우 (500 Internal Server Error)
    #[error("Handler panicked: {0}")]
    HandlerPanic(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 설정 오류 여부를 반환합니다.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::ConfigurationError(_))
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// `NotFound` → 404, 나머지 모든 에러 → 500.
    /// 응답 형식은 `{"error": "<message>"}` 입니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use dispatch_core::core::errors::ErrorContext;
///
/// let raw = std::fs::read_to_string(path).context("Failed to read config")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
