//! Playlist validation utilities

/// Validate an M3U playlist document as written to disk
pub fn validate_m3u_playlist(content: &str) -> ValidationResult {
    let mut errors = Vec::new();

    if !content.ends_with('\n') {
        errors.push("Missing trailing newline".to_string());
    }
    if content.contains('\r') {
        errors.push("Contains CR line endings".to_string());
    }

    let lines: Vec<&str> = content.lines().collect();
    match lines.first() {
        Some(&"#EXTM3U") => {}
        _ => errors.push("First line is not #EXTM3U".to_string()),
    }

    let body = lines.get(1..).unwrap_or_default();
    if body.len() % 2 != 0 {
        errors.push(format!("Odd number of body lines: {}", body.len()));
    }

    for pair in body.chunks(2) {
        let info = pair[0];
        if !info.starts_with("#EXTINF:-1 ") {
            errors.push(format!("Expected #EXTINF line, got: {}", info));
            continue;
        }
        if !info.contains(" tvg-logo=\"") || !info.contains(" group-title=\"") {
            errors.push(format!("Missing attributes: {}", info));
        }
        if !info.contains("\",") {
            errors.push(format!("Missing title separator: {}", info));
        }
        match pair.get(1) {
            Some(url) if !url.is_empty() && !url.starts_with('#') => {}
            other => errors.push(format!("Expected stream URL, got: {:?}", other)),
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Number of records in a valid playlist document
pub fn record_count(content: &str) -> usize {
    content.lines().filter(|l| l.starts_with("#EXTINF")).count()
}

/// Validation result
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![error.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_playlist() {
        let content = r#"#EXTM3U
#EXTINF:-1 tvg-logo="http://x/l.png" group-title="Test Show",Ep1
http://x/1.m3u8
"#;
        let result = validate_m3u_playlist(content);
        assert!(result.is_valid, "{:?}", result.errors);
        assert_eq!(record_count(content), 1);
    }

    #[test]
    fn test_validate_header_only() {
        assert!(validate_m3u_playlist("#EXTM3U\n").is_valid);
    }

    #[test]
    fn test_validate_broken_playlist() {
        let result = validate_m3u_playlist("#EXTINF:-1,x\r\nhttp://x");
        assert!(!result.is_valid);
        assert!(result.errors.len() >= 3);
    }
}
