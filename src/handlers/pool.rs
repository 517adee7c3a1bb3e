//! 핸들러 인스턴스 풀
//!
//! `poolHandlers` 가 켜져 있으면 요청이 끝난 핸들러를 `reset` 후 보관했다가
//! 같은 타입, 같은 핸들러 ID 의 다음 요청에 다시 내어줍니다. 보관 한도는
//! 타입 단위이므로 `user` 와 `User` 처럼 같은 타입으로 합성되는 ID 들이
//! 한도 하나를 나눠 씁니다. 꺼내진 인스턴스는 풀에서 빠지므로 두 요청이
//! 같은 인스턴스를 동시에 쓰는 일은 없습니다.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use crate::handlers::Handler;

/// 핸들러 타입별 최대 보관 개수 기본값
pub const DEFAULT_MAX_IDLE: usize = 8;

pub struct HandlerPool {
    idle: Mutex<HashMap<String, Vec<Box<dyn Handler>>>>,
    max_idle: usize,
}

impl HandlerPool {
    pub fn new() -> Self {
        Self::with_max_idle(DEFAULT_MAX_IDLE)
    }

    pub fn with_max_idle(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(HashMap::new()),
            max_idle,
        }
    }

    /// `type_name` 으로 보관 중인 인스턴스 중 `handler_id` 로 만들어진 것을 꺼냅니다.
    pub fn checkout(&self, type_name: &str, handler_id: &str) -> Option<Box<dyn Handler>> {
        let mut idle = self.lock();
        let slot = idle.get_mut(type_name)?;
        let position = slot.iter().rposition(|handler| handler.id() == handler_id)?;
        Some(slot.swap_remove(position))
    }

    /// 인스턴스를 초기화한 뒤 타입별로 보관합니다. 보관 한도를 넘으면 버립니다.
    pub fn checkin(&self, mut handler: Box<dyn Handler>) {
        handler.reset();
        let mut idle = self.lock();
        let slot = idle.entry(handler.type_name().to_string()).or_default();
        if slot.len() < self.max_idle {
            slot.push(handler);
        }
    }

    pub fn idle_count(&self, type_name: &str) -> usize {
        self.lock().get(type_name).map_or(0, Vec::len)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Box<dyn Handler>>>> {
        self.idle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for HandlerPool {
    fn default() -> Self {
        Self::new()
    }
}
