//! Optional free-text location fields (city, state)

/// Maximum location field length in characters
pub const LOCATION_MAX_LENGTH: usize = 100;

/// Trim a submitted location; blank means absent, over-long is cut
pub fn normalize_location(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(LOCATION_MAX_LENGTH).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_absent() {
        assert_eq!(normalize_location(None), None);
        assert_eq!(normalize_location(Some("   ".into())), None);
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(
            normalize_location(Some(" Pune ".into())),
            Some("Pune".to_string())
        );
    }

    #[test]
    fn test_truncated() {
        let long = "x".repeat(LOCATION_MAX_LENGTH + 20);
        assert_eq!(
            normalize_location(Some(long)).map(|s| s.chars().count()),
            Some(LOCATION_MAX_LENGTH)
        );
    }
}
