const PREVIEW_CHARS: usize = 60;

/// First line of `text`, cut to a fixed number of characters.
pub(super) fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let mut preview: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if first_line.chars().count() > PREVIEW_CHARS || text.lines().nth(1).is_some() {
        preview.push('…');
    }
    preview
}

pub(super) fn timestamp(ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_and_multiline_text() {
        assert_eq!(preview("short"), "short");
        assert_eq!(preview("line one\nline two"), "line one…");
        let long = "x".repeat(80);
        assert_eq!(preview(&long).chars().count(), PREVIEW_CHARS + 1);
    }

    #[test]
    fn timestamp_is_utc() {
        assert_eq!(timestamp(0), "1970-01-01 00:00:00");
    }
}
