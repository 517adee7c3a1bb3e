//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 설정 문자열 검증, 식별자 변환
//! - [`display_terminal`] - 부트스트랩 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::id_to_camel_case;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert_eq!(id_to_camel_case("security-key"), "SecurityKey");
//! print_boxed_title("Application Ready");
//! ```

pub mod string_utils;
pub mod display_terminal;
