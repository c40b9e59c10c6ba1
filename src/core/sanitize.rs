// src/core/sanitize.rs

/// HTML's whitespace set. Unlike `char::is_whitespace`, NBSP and the other
/// Unicode spaces are content, not whitespace.
pub fn is_html_ws(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// True when `s` is empty or holds nothing but HTML whitespace.
pub fn is_html_blank(s: &str) -> bool {
    s.chars().all(is_html_ws)
}

/// Collapse whitespace runs to one space and trim, for display text like `<title>`.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_means_ascii_whitespace_only() {
        assert!(is_html_blank(""));
        assert!(is_html_blank(" \t\r\n\x0C"));
        assert!(!is_html_blank("\u{00A0}"));
        assert!(!is_html_blank("\u{3000}"));
        assert!(!is_html_blank(" <p>"));
    }

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(normalize_ws("\n  2021-2022 Premier League \t Stats "), "2021-2022 Premier League Stats");
        assert_eq!(normalize_ws("   "), "");
    }
}
