//! Output formatting utilities for CLI commands.
//!
//! Provides a unified `OutputFormat` enum for consistent output formatting
//! across all CLI commands.

use clap::ValueEnum;

/// Output format options for CLI commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Truncates a string to at most `max_width` characters.
///
/// Longer strings are cut and end in "...". Counts characters, not bytes,
/// so captions in any script are cut on a character boundary.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{head}...")
    }
}

/// Shortens an image URI for table display.
///
/// Data URIs are reduced to their media type; file URIs to the file name.
pub fn short_image_uri(uri: &str) -> String {
    if let Some(rest) = uri.strip_prefix("data:") {
        let media = rest.split([';', ',']).next().unwrap_or("");
        return format!("[embedded {media}]");
    }
    uri.rsplit('/').next().unwrap_or(uri).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        let format = OutputFormat::default();
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(
            OutputFormat::from_str("text", false).unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::from_str("json", false).unwrap(),
            OutputFormat::Json
        );
        assert!(OutputFormat::from_str("markdown", false).is_err());
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
        assert_eq!(truncate_to_width("hello", 3), "...");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_to_width_multibyte() {
        assert_eq!(truncate_to_width("chat noir 🐈‍⬛", 30), "chat noir 🐈‍⬛");
        assert_eq!(truncate_to_width("äöüäöüäöü", 6), "äöü...");
    }

    #[test]
    fn test_short_image_uri() {
        assert_eq!(short_image_uri("file:///home/me/cat.jpg"), "cat.jpg");
        assert_eq!(
            short_image_uri("data:image/jpeg;base64,AAAA"),
            "[embedded image/jpeg]"
        );
        assert_eq!(short_image_uri("cat.jpg"), "cat.jpg");
    }
}
