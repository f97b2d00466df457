//! Admin-configured exclusion list.

use std::collections::HashSet;

/// Option values hidden from shoppers.
///
/// Parsed from a comma-separated admin setting. Entries are matched exactly:
/// no trimming, case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    values: HashSet<String>,
}

impl ExclusionList {
    /// Parses the raw setting. An absent, empty or `"0"` setting excludes nothing.
    pub fn parse(setting: Option<&str>) -> Self {
        match setting {
            Some(raw) if !raw.is_empty() && raw != "0" => Self {
                values: raw.split(',').map(str::to_string).collect(),
            },
            _ => Self::default(),
        }
    }

    /// Returns true if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the value is excluded.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    /// Number of distinct excluded values.
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_setting() {
        assert!(ExclusionList::parse(None).is_empty());
    }

    #[test]
    fn test_empty_setting() {
        assert!(ExclusionList::parse(Some("")).is_empty());
    }

    #[test]
    fn test_zero_setting_is_empty() {
        assert!(ExclusionList::parse(Some("0")).is_empty());
        assert!(ExclusionList::parse(Some("0,D")).contains("0"));
    }

    #[test]
    fn test_split_on_commas() {
        let list = ExclusionList::parse(Some("C1,D"));
        assert_eq!(list.len(), 2);
        assert!(list.contains("C1"));
        assert!(list.contains("D"));
        assert!(!list.contains("C2"));
    }

    #[test]
    fn test_entries_are_not_trimmed() {
        let list = ExclusionList::parse(Some("C1, D"));
        assert!(list.contains(" D"));
        assert!(!list.contains("D"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let list = ExclusionList::parse(Some("oxxo"));
        assert!(!list.contains("OXXO"));
    }
}
