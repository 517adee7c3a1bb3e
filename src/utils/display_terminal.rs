//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 부트스트랩 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 최종 요약을 시각적으로 표현합니다.

const CONTENT_WIDTH: usize = 50;

/// 박스 형태로 둘러싼 제목 문자열을 만듭니다
///
/// 텍스트는 박스 안에서 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║               BOOTSTRAPPING SERVER               ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(CONTENT_WIDTH);
    format!(
        "╔{border}╗\n║{:^width$}║\n╚{border}╝",
        title,
        width = CONTENT_WIDTH
    )
}

/// 박스 형태로 둘러싸인 제목을 출력합니다
pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Resolving application paths
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 1: Components registered (2 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ log: LogDispatcher (lazy)
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 부트스트랩 완료 요약 문자열을 만듭니다
pub fn format_final_summary(components: usize, handlers: usize) -> String {
    format!(
        "{}\n   🔧 Components: {}\n   🎯 Handlers: {}\n   🚀 Total: {}",
        format_boxed_title("🎉 APPLICATION READY"),
        components,
        handlers,
        components + handlers
    )
}

/// 부트스트랩 완료 요약을 출력합니다
pub fn print_final_summary(components: usize, handlers: usize) {
    println!();
    println!("{}", format_final_summary(components, handlers));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_is_centered() {
        let boxed = format_boxed_title("READY");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[0].ends_with('╗'));
        assert_eq!(lines[1].chars().count(), CONTENT_WIDTH + 2);
        assert!(lines[1].contains("READY"));
    }

    #[test]
    fn test_final_summary_counts() {
        let summary = format_final_summary(2, 3);

        assert!(summary.contains("Components: 2"));
        assert!(summary.contains("Handlers: 3"));
        assert!(summary.contains("Total: 5"));
    }
}
