//! The input boundary: what the text field lets through.

/// Most characters the input field accepts.
pub const MAX_TASK_CHARS: usize = 100;

/// Placeholder shown in an empty input field.
pub const INPUT_PLACEHOLDER: &str = "Add a new task...";

/// Keeps at most `max_chars` characters of `raw`, like a length-limited
/// text field that stops accepting keystrokes once full.
///
/// Characters are Unicode scalar values, so multi-byte text is never split.
///
/// ```
/// use taskboard::input::clamp_input;
///
/// assert_eq!(clamp_input("héllo", 2), "hé");
/// assert_eq!(clamp_input("short", 100), "short");
/// ```
#[must_use]
pub fn clamp_input(raw: &str, max_chars: usize) -> String {
    match raw.char_indices().nth(max_chars) {
        Some((cut, _)) => raw[..cut].to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use taskboard_testing::properties;

    #[test]
    fn exact_limit_is_kept() {
        let raw = "x".repeat(MAX_TASK_CHARS);
        assert_eq!(clamp_input(&raw, MAX_TASK_CHARS), raw);
    }

    #[test]
    fn over_limit_is_truncated_before_trimming() {
        let raw = format!("{}   tail", " ".repeat(MAX_TASK_CHARS));
        let clamped = clamp_input(&raw, MAX_TASK_CHARS);

        assert_eq!(clamped.chars().count(), MAX_TASK_CHARS);
        assert!(clamped.trim().is_empty());
    }

    proptest! {
        #[test]
        fn clamped_input_is_a_prefix_within_limit(raw in properties::raw_input(150)) {
            let clamped = clamp_input(&raw, MAX_TASK_CHARS);
            prop_assert!(clamped.chars().count() <= MAX_TASK_CHARS);
            prop_assert!(raw.starts_with(&clamped));
        }
    }
}
