pub use kernel::id::UserId;

/// Parse a user id taken from a URL segment
///
/// Anything that is not a UUID cannot name an account, so it yields `None`
/// rather than an error.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        let user_id = UserId::new();
        assert_eq!(parse_user_id(&user_id.to_string()), Some(user_id));
    }

    #[test]
    fn test_parse_user_id_rejects_foreign_ids() {
        assert_eq!(parse_user_id("65f1c0ffee0123456789abcd"), None);
        assert_eq!(parse_user_id(""), None);
    }
}
