//! Category normalization
//!
//! Site sections are mapped onto the provider's fixed category list. Anything
//! unrecognized lands on `General`.

use std::fmt;

/// Categories the provider accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NewsCategory {
    Business,
    Entertainment,
    #[default]
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 7] = [
        NewsCategory::Business,
        NewsCategory::Entertainment,
        NewsCategory::General,
        NewsCategory::Health,
        NewsCategory::Science,
        NewsCategory::Sports,
        NewsCategory::Technology,
    ];

    /// Wire name sent upstream
    pub const fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Business => "business",
            NewsCategory::Entertainment => "entertainment",
            NewsCategory::General => "general",
            NewsCategory::Health => "health",
            NewsCategory::Science => "science",
            NewsCategory::Sports => "sports",
            NewsCategory::Technology => "technology",
        }
    }

    /// Exact provider category name
    pub fn from_provider_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Site section name that maps onto a provider category
    fn from_section(section: &str) -> Option<Self> {
        let category = match section {
            "movies" | "lifestyle" | "videos" => NewsCategory::Entertainment,
            "cricket" => NewsCategory::Sports,
            "india" | "viral" | "world" | "home" => NewsCategory::General,
            "business" => NewsCategory::Business,
            "education" => NewsCategory::Science,
            "webstories" => NewsCategory::Technology,
            _ => return None,
        };
        Some(category)
    }

    /// Resolve a raw `category` query value
    ///
    /// Lowercased and stripped of hyphens (`Web-Stories` → `webstories`),
    /// then looked up as a section alias, then as a provider name.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return NewsCategory::General;
        };

        let key = raw.to_lowercase().replace('-', "");

        Self::from_section(&key)
            .or_else(|| Self::from_provider_name(&key))
            .unwrap_or(NewsCategory::General)
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_aliases() {
        assert_eq!(NewsCategory::normalize(Some("cricket")), NewsCategory::Sports);
        assert_eq!(NewsCategory::normalize(Some("movies")), NewsCategory::Entertainment);
        assert_eq!(NewsCategory::normalize(Some("lifestyle")), NewsCategory::Entertainment);
        assert_eq!(NewsCategory::normalize(Some("videos")), NewsCategory::Entertainment);
        assert_eq!(NewsCategory::normalize(Some("india")), NewsCategory::General);
        assert_eq!(NewsCategory::normalize(Some("education")), NewsCategory::Science);
        assert_eq!(NewsCategory::normalize(Some("Home")), NewsCategory::General);
    }

    #[test]
    fn test_case_and_hyphens() {
        assert_eq!(NewsCategory::normalize(Some("Web-Stories")), NewsCategory::Technology);
        assert_eq!(NewsCategory::normalize(Some("CRICKET")), NewsCategory::Sports);
        assert_eq!(NewsCategory::normalize(Some("Sci-ence")), NewsCategory::Science);
    }

    #[test]
    fn test_provider_names_pass_through() {
        for category in NewsCategory::ALL {
            assert_eq!(NewsCategory::normalize(Some(category.as_str())), category);
        }
    }

    #[test]
    fn test_unknown_defaults_to_general() {
        assert_eq!(NewsCategory::normalize(Some("unknownxyz")), NewsCategory::General);
        assert_eq!(NewsCategory::normalize(Some("")), NewsCategory::General);
        assert_eq!(NewsCategory::normalize(None), NewsCategory::General);
    }
}
