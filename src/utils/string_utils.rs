//! # 문자열 유틸리티
//!
//! 설정 검증과 라우트/핸들러 식별자 변환에 쓰이는 공통 문자열 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 값이 없거나 공백뿐이면 `ConfigurationError`를 반환하고,
/// 유효한 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열 (없을 수 있음)
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string(Some("  app  "), "id").unwrap(), "app");
/// assert!(validate_required_string(Some("   "), "id").is_err());
/// assert!(validate_required_string(None, "id").is_err());
/// ```
pub fn validate_required_string(value: Option<&str>, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AppError::ConfigurationError(
            format!("The \"{}\" configuration for the Application is required.", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]` 과 함께 사용합니다.
///
/// - `{"timeZone": "  Asia/Seoul  "}` → `Some("Asia/Seoul")`
/// - `{"timeZone": ""}` → `None`
/// - `{"timeZone": null}` → `None`
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 케밥 케이스 식별자를 카멜 케이스 타입 이름으로 변환합니다
///
/// `-` 를 단어 경계로 보고 각 단어의 첫 글자만 대문자로 바꾼 뒤 이어 붙입니다.
/// 나머지 글자는 그대로 유지되므로 `fooBar` → `FooBar`, `foo_bar` → `Foo_bar` 입니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(id_to_camel_case("security-key"), "SecurityKey");
/// assert_eq!(id_to_camel_case("index"), "Index");
/// ```
pub fn id_to_camel_case(id: &str) -> String {
    let mut camel = String::with_capacity(id.len());
    for word in id.split('-') {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            camel.extend(first.to_uppercase());
            camel.push_str(chars.as_str());
        }
    }
    camel
}

/// 앞뒤의 `/` 를 모두 제거합니다 (공백은 건드리지 않음)
pub fn trim_slashes(value: &str) -> &str {
    value.trim_matches('/')
}
