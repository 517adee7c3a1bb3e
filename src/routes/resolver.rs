//! 라우트 해석기
//!
//! 신뢰할 수 없는 라우트 문자열을 (핸들러 ID, 액션 ID) 쌍으로 나누는 순수 함수입니다.
//!
//! ```text
//! ""                 → defaultRoute 로 대체 후 동일하게 처리
//! "index"            → ("index", "")
//! "user/profile"     → ("user", "profile")
//! "admin/user/edit"  → ("admin/user", "edit")
//! "a/b/c/d"          → ("a/b/c", "d")
//! "a//b"             → 거부
//! ```
//!
//! 첫 `/` 에서 한 번 나눈 뒤, 나머지에 `/` 가 더 있으면 마지막 `/` 앞부분을
//! 핸들러 ID 뒤에 `/` 로 이어 붙입니다. 세그먼트가 셋 이상이어도 순서는
//! 입력 순서 그대로 유지되고 마지막 세그먼트만 액션이 됩니다.

use log::debug;
use crate::utils::string_utils::trim_slashes;

/// 해석된 라우트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub handler_id: String,
    pub action_id: String,
}

impl ResolvedRoute {
    pub fn new(handler_id: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            handler_id: handler_id.into(),
            action_id: action_id.into(),
        }
    }
}

/// 라우트 문자열을 해석합니다.
///
/// 빈 문자열이면 `default_route` 를 대신 사용합니다 (앞뒤 `/` 제거 전에 판단).
/// `//` 를 포함하면 모호한 라우트로 보고 `None` 을 반환합니다.
pub fn resolve(route: &str, default_route: &str) -> Option<ResolvedRoute> {
    let route = if route.is_empty() { default_route } else { route };
    let route = trim_slashes(route);

    if route.contains("//") {
        debug!("모호한 라우트 거부: {:?}", route);
        return None;
    }

    let (mut handler_id, rest) = match route.split_once('/') {
        Some((head, tail)) => (head.to_string(), tail),
        None => (route.to_string(), ""),
    };

    let action_id = match rest.rfind('/') {
        Some(pos) => {
            handler_id.push('/');
            handler_id.push_str(&rest[..pos]);
            &rest[pos + 1..]
        }
        None => rest,
    };

    Some(ResolvedRoute::new(handler_id, action_id))
}
