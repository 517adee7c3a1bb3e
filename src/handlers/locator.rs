//! # Handler Locator
//!
//! 검증된 핸들러 ID 를 구체 핸들러 타입으로 매핑하고 인스턴스를 만듭니다.
//! 외부 입력이 설정된 네임스페이스 밖의 타입을 만들 수 없도록 하는 보안 경계이며,
//! 잘못된 입력은 에러가 아니라 항상 `None`("찾을 수 없음")으로 끝납니다.
//!
//! ## 처리 단계
//!
//! ```text
//! "admin/security-key"
//!   1. 마지막 '/' 로 분리         → prefix "admin/", class "security-key"
//!   2. 허용 목록 검증             → class ^[A-Za-z][A-Za-z0-9\-_]*$
//!                                  prefix ^[A-Za-z0-9_/]+$
//!   3. 이름 변환                  → "SecurityKeyController"
//!   4. 네임스페이스 합성          → "app::controllers::admin::SecurityKeyController"
//!   5. '-' 잔존 / 미등록 타입 거부
//!   6. 능력 계약 (Web, 콘솔 모드에서만 Console)
//!   7. 생성 후 type_name 정확 일치 확인
//! ```

use std::collections::HashMap;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::ExecutionMode;
use crate::handlers::{Handler, HandlerKind, HandlerRegistration};
use crate::utils::string_utils::id_to_camel_case;

/// 핸들러 타입 이름 접미사
pub const HANDLER_SUFFIX: &str = "Controller";

/// 네임스페이스 구분자
const NAMESPACE_SEPARATOR: &str = "::";

static CLASS_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9\-_]*$").expect("class name pattern"));

static PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9_/]+$").expect("prefix pattern"));

/// 정규화된 타입 이름 → 등록 정보 테이블 (타입 로더)
#[derive(Debug, Clone, Default)]
pub struct HandlerTable {
    entries: HashMap<&'static str, HandlerRegistration>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// inventory 로 수집된 모든 핸들러를 담은 테이블
    pub fn from_inventory() -> Self {
        let mut table = Self::new();
        for registration in inventory::iter::<HandlerRegistration>() {
            table.register(*registration);
        }
        table
    }

    pub fn register(&mut self, registration: HandlerRegistration) {
        self.entries.insert(registration.type_name, registration);
    }

    pub fn lookup(&self, type_name: &str) -> Option<&HandlerRegistration> {
        self.entries.get(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// 핸들러 ID → 핸들러 인스턴스
#[derive(Debug, Clone)]
pub struct HandlerLocator {
    namespace: String,
    table: HandlerTable,
    mode: ExecutionMode,
}

impl HandlerLocator {
    pub fn new(namespace: impl Into<String>, table: HandlerTable, mode: ExecutionMode) -> Self {
        Self {
            namespace: namespace.into(),
            table,
            mode,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn table(&self) -> &HandlerTable {
        &self.table
    }

    /// 핸들러 ID 를 검증하고 정규화된 타입 이름을 합성합니다 (1~4단계, 5단계의 '-' 검사).
    ///
    /// 테이블 조회는 하지 않으므로 존재하지 않는 타입 이름도 반환될 수 있습니다.
    pub fn compose_type_name(&self, handler_id: &str) -> Option<String> {
        let (prefix, raw_class) = match handler_id.rfind('/') {
            Some(pos) => (&handler_id[..=pos], &handler_id[pos + 1..]),
            None => ("", handler_id),
        };

        if !CLASS_NAME_PATTERN.is_match(raw_class) {
            debug!("허용되지 않는 핸들러 이름: {:?}", handler_id);
            return None;
        }
        if !prefix.is_empty() && !PREFIX_PATTERN.is_match(prefix) {
            debug!("허용되지 않는 핸들러 경로: {:?}", handler_id);
            return None;
        }

        let class_name = format!("{}{}", id_to_camel_case(raw_class), HANDLER_SUFFIX);
        let composed = format!(
            "{}{}{}{}",
            self.namespace,
            NAMESPACE_SEPARATOR,
            prefix.replace('/', NAMESPACE_SEPARATOR),
            class_name
        );
        let type_name = composed.trim_start_matches(NAMESPACE_SEPARATOR).to_string();

        if type_name.contains('-') {
            return None;
        }
        Some(type_name)
    }

    /// 핸들러 ID 에 해당하는 인스턴스를 만듭니다.
    ///
    /// 어떤 입력에도 패닉하거나 에러를 내지 않으며, 조건을 하나라도 만족하지 못하면 `None` 입니다.
    pub fn locate(&self, handler_id: &str) -> Option<Box<dyn Handler>> {
        let type_name = self.compose_type_name(handler_id)?;

        let Some(registration) = self.table.lookup(&type_name) else {
            debug!("등록되지 않은 핸들러 타입: {}", type_name);
            return None;
        };

        if !self.accepts(registration.kind) {
            debug!("{:?} 모드에서 사용할 수 없는 핸들러: {}", self.mode, type_name);
            return None;
        }

        let handler = (registration.constructor)(handler_id);
        if handler.type_name() != type_name {
            debug!(
                "핸들러 타입 불일치: 기대 {}, 실제 {}",
                type_name,
                handler.type_name()
            );
            return None;
        }
        Some(handler)
    }

    fn accepts(&self, kind: HandlerKind) -> bool {
        match kind {
            HandlerKind::Web => true,
            HandlerKind::Console => self.mode == ExecutionMode::Console,
        }
    }
}
