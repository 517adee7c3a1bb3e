//! 디스패치 코어 서버 바이너리
//!
//! 설정 파일로 `Application` 을 만들고, actix-web HTTP 서버의
//! catch-all 서비스로 모든 요청을 디스패치합니다.

use std::path::PathBuf;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use serde_json::Value;
use dispatch_core::config::HttpServerConfig;
use dispatch_core::core::errors::{AppResult, ErrorContext};
use dispatch_core::core::Application;
use dispatch_core::routes::configure_all_routes;
use dispatch_core::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 설정 파일 기본 경로
const DEFAULT_CONFIG_PATH: &str = "config/app.json";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 디스패치 코어 시작중...");

    let application = match bootstrap_application() {
        Ok(application) => application,
        Err(e) => {
            error!("❌ 애플리케이션 시작 실패: {}", e);
            std::process::exit(1);
        }
    };

    let http = application
        .servers()
        .http
        .clone()
        .unwrap_or_default()
        .with_env_overrides();

    match &application.servers().tcp {
        Some(tcp) if application.tcp_enabled() => {
            warn!("configs.tcp 블록은 이 바이너리에서 서비스하지 않습니다: {}", tcp);
        }
        Some(_) => info!("tcpEnable=false: configs.tcp 블록을 건너뜁니다"),
        None => {}
    }

    start_http_server(application, http).await
}

/// 설정을 읽어 애플리케이션을 만들고 부트스트랩 과정을 출력합니다
///
/// # Environment Variables
///
/// * `APP_CONFIG` - 설정 파일 경로 (기본값: `config/app.json`)
///
/// # Errors
///
/// * `InternalError` - 설정 파일을 읽거나 파싱할 수 없음
/// * `ConfigurationError` - 시작 검증 실패
fn bootstrap_application() -> AppResult<Application> {
    let config_path = PathBuf::from(
        std::env::var("APP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
    );

    print_boxed_title("BOOTSTRAPPING DISPATCH CORE");

    print_step_start(1, &format!("Loading {}", config_path.display()));
    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let raw: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    print_step_complete(1, "Configuration loaded", raw.as_object().map_or(0, |map| map.len()));

    print_step_start(2, "Configuring application");
    let application = Application::new(raw)?;

    let registry = application.registry();
    for name in registry.names() {
        let class = registry.descriptor(name).map_or("?", |descriptor| descriptor.class());
        let state = if registry.peek(name).is_some() { "ready" } else { "lazy" };
        print_sub_task(name, &format!("{} ({})", class, state));
    }
    print_step_complete(2, "Components registered", registry.len());

    let handlers = application.locator().table().type_names();
    for type_name in &handlers {
        print_sub_task(type_name, "handler");
    }
    print_step_complete(3, "Handlers collected", handlers.len());

    print_final_summary(registry.len(), handlers.len());

    info!(
        "✅ 애플리케이션 '{}' 준비 완료 (timeZone: {}, runtime: {})",
        application.id(),
        application.time_zone(),
        application.runtime_path().display()
    );

    Ok(application)
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 요청 로깅 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(application: Application, http: HttpServerConfig) -> std::io::Result<()> {
    let bind_address = http.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/index/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(http.rate_limit_per_second)
        .burst_size(http.rate_limit_burst)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "rate limit values must be greater than zero",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        http.rate_limit_per_second, http.rate_limit_burst
    );

    let application = web::Data::new(application);
    let cors_origins = http.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_origins))
            .wrap(middleware::Logger::default())
            .app_data(application.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(http.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 `.env.<profile>` 을 로드하고, 없으면 기본 `.env` 를 로드합니다.
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    match std::env::var("PROFILE") {
        Ok(profile) if !profile.trim().is_empty() => {
            let filename = format!(".env.{}", profile.trim());
            if let Err(e) = dotenv::from_filename(&filename) {
                eprintln!("{} 파일 로드 실패: {}", filename, e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=dispatch_core=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// `configs.http.corsOrigins` 가 비어 있으면 모든 Origin 을 허용합니다.
fn configure_cors(origins: &[String]) -> Cors {
    let cors = if origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
