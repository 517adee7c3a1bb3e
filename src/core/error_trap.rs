//! # Error Trap - 프로세스 전역 에러/치명 상황 포착
//!
//! 장기 실행 서버 프로세스에서 핸들러 수준의 패닉이 프로세스를 죽이지 않도록
//! 요청 경계를 제공하고, 포착된 상황을 `file:line message` 레코드로
//! 로그 컴포넌트(`log`)에 전달합니다.
//!
//! ## 구성
//!
//! ```text
//! panic hook (install 시 한 번 등록)
//!   ├─ 요청 경계(guard) 안의 패닉 → 위치 정보만 스레드 로컬에 보관, guard 가 Err 로 회수
//!   └─ 경계 밖의 패닉           → 치명 상황으로 기록(last_fatal) 후 보고
//!
//! guard 의 Err(FatalCondition) → 경계를 연 쪽이 handle_error 로 보고
//! handle_error(message, file, line) → 비치명 에러 보고, 실행 계속
//! ```
//!
//! 훅 안에서는 이미 생성된 로그 싱크만 사용합니다. 훅에서 새 패닉이 나면
//! 프로세스가 즉시 abort 되므로, 서비스 생성처럼 실패할 수 있는 작업은 하지 않습니다.
//! 경계 안의 패닉은 unwind 가 끝난 뒤 보고되므로 로그 싱크를 새로 만들 수 있습니다.

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::{Arc, Mutex, MutexGuard, Once};
use arc_swap::ArcSwapOption;
use log::error;
use once_cell::sync::Lazy;
use crate::core::registry::{ServiceRegistry, LOG_SERVICE};

/// 에러 레코드를 받는 로거 협력자
pub trait ErrorSink: Send + Sync {
    fn error(&self, message: &str);
}

/// 포착된 치명 상황 (또는 런타임 패닉) 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalCondition {
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl FatalCondition {
    pub fn new(message: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            file: file.into(),
            line,
        }
    }

    pub fn from_panic(info: &PanicHookInfo<'_>) -> Self {
        let (file, line) = info
            .location()
            .map(|location| (location.file().to_string(), location.line()))
            .unwrap_or_else(|| ("<unknown>".to_string(), 0));
        Self {
            message: panic_message(info.payload()),
            file,
            line,
        }
    }
}

impl fmt::Display for FatalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_record(&self.message, &self.file, self.line))
    }
}

/// `file:line message` 형식의 레코드를 만듭니다.
pub fn format_record(message: &str, file: &str, line: u32) -> String {
    format!("{}:{} {}", file, line, message)
}

/// 패닉 페이로드에서 사람이 읽을 수 있는 메시지를 꺼냅니다.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// 에러/치명 상황을 로그 컴포넌트로 전달하는 트랩
pub struct ErrorTrap {
    registry: Arc<ServiceRegistry>,
    sink: String,
    last_fatal: Mutex<Option<FatalCondition>>,
}

impl ErrorTrap {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self {
            registry,
            sink: LOG_SERVICE.to_string(),
            last_fatal: Mutex::new(None),
        }
    }

    /// 비치명 런타임 에러를 보고합니다. 실행은 계속됩니다.
    ///
    /// 로그 컴포넌트가 아직 생성되지 않았다면 여기서 생성합니다.
    pub fn handle_error(&self, message: &str, file: &str, line: u32) {
        self.forward(&format_record(message, file, line), true);
    }

    /// 치명 상황을 기록하고 보고합니다. 새 패닉을 일으키지 않습니다.
    pub fn handle_fatal(&self, condition: FatalCondition) {
        let record = condition.to_string();
        *self.lock_last_fatal() = Some(condition);
        self.forward(&record, false);
    }

    /// 마지막으로 기록된 치명 상황
    pub fn last_fatal(&self) -> Option<FatalCondition> {
        self.lock_last_fatal().clone()
    }

    fn forward(&self, record: &str, construct: bool) {
        let service = if construct {
            self.registry.get(&self.sink).ok()
        } else {
            self.registry.peek(&self.sink)
        };

        match service.as_deref().and_then(|service| service.as_error_sink()) {
            Some(sink) => sink.error(record),
            None => error!(target: "dispatch_core::error_trap", "{}", record),
        }
    }

    fn lock_last_fatal(&self) -> MutexGuard<'_, Option<FatalCondition>> {
        self.last_fatal.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

static ACTIVE_TRAP: Lazy<ArcSwapOption<ErrorTrap>> = Lazy::new(ArcSwapOption::empty);
static HOOK: Once = Once::new();

thread_local! {
    static IN_BOUNDARY: Cell<bool> = const { Cell::new(false) };
    static BOUNDARY_PANIC: RefCell<Option<FatalCondition>> = const { RefCell::new(None) };
}

fn in_boundary() -> bool {
    IN_BOUNDARY.try_with(Cell::get).unwrap_or(false)
}

/// 트랩을 프로세스 전역 패닉 훅에 연결합니다.
///
/// 훅은 프로세스당 한 번만 등록되고 (이전 훅은 체인으로 유지),
/// 이후 호출은 활성 트랩만 교체합니다.
pub fn install(trap: Arc<ErrorTrap>) {
    ACTIVE_TRAP.store(Some(trap));
    HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if in_boundary() {
                let condition = FatalCondition::from_panic(info);
                let _ = BOUNDARY_PANIC.try_with(|slot| {
                    if let Ok(mut slot) = slot.try_borrow_mut() {
                        *slot = Some(condition);
                    }
                });
                return;
            }
            if let Some(trap) = ACTIVE_TRAP.load_full() {
                trap.handle_fatal(FatalCondition::from_panic(info));
            }
            previous(info);
        }));
    });
}

/// 현재 활성화된 트랩
pub fn active() -> Option<Arc<ErrorTrap>> {
    ACTIVE_TRAP.load_full()
}

/// 요청 경계
///
/// 클로저 안의 패닉을 회수해 `Err(FatalCondition)` 으로 돌려줍니다.
/// 보고는 호출자 몫이며, 보통 `ErrorTrap::handle_error` 로 전달합니다.
/// 훅이 설치되지 않았다면 위치는 `<unknown>:0` 입니다.
pub fn guard<R>(f: impl FnOnce() -> R) -> Result<R, FatalCondition> {
    let previous = IN_BOUNDARY.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    IN_BOUNDARY.with(|flag| flag.set(previous));

    result.map_err(|payload| {
        let captured = BOUNDARY_PANIC.with(|slot| slot.borrow_mut().take());
        captured.unwrap_or_else(|| FatalCondition::new(panic_message(payload.as_ref()), "<unknown>", 0))
    })
}


/// 호출 위치(`file!()`, `line!()`)와 함께 비치명 에러를 보고합니다.
///
/// ```rust,ignore
/// trap_error!(app.error_trap(), "cache miss storm on {}", key);
/// ```
#[macro_export]
macro_rules! trap_error {
    ($trap:expr, $($arg:tt)+) => {
        $trap.handle_error(&format!($($arg)+), file!(), line!())
    };
}
