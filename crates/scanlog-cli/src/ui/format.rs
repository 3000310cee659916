//! String utilities for terminal rendering.

/// Truncate to `max` characters with a trailing ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    let count = s.chars().count();
    if count <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let kept: String = s.chars().take(max - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate("pen", 10), "pen");
    }

    #[test]
    fn long_strings_get_ellipsis() {
        assert_eq!(truncate("a long note about pens", 10), "a long ...");
    }

    #[test]
    fn tiny_limits_just_cut() {
        assert_eq!(truncate("pens", 2), "pe");
    }
}
