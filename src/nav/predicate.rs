//! Caller-supplied activation tests.

use crate::nav::item::NavItem;

/// Replaces the default `item.path == active_path` test.
///
/// When a predicate is present it is the only test: it decides for every
/// item, including items without a path. This lets callers implement prefix
/// matching, pattern matching, or several active items at once.
///
/// # Example
///
/// ```rust
/// use controlstate::nav::{ActivePredicate, NavItem};
///
/// let by_title = ActivePredicate::new(|item: &NavItem, active: Option<&str>| {
///     Some(item.title.as_str()) == active
/// });
///
/// let sizing = NavItem::new("Sizing").with_path("#level1.2");
/// assert!(by_title.check(&sizing, Some("Sizing")));
/// assert!(!by_title.check(&sizing, Some("#level1.2")));
/// ```
pub struct ActivePredicate {
    predicate: Box<dyn Fn(&NavItem, Option<&str>) -> bool + Send + Sync>,
}

impl ActivePredicate {
    /// The predicate must be pure: it is re-evaluated on every resolution.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&NavItem, Option<&str>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }

    /// Active when the item's path is a prefix of the active path, so a
    /// branch lights up together with any of its descendants.
    pub fn prefix() -> Self {
        Self::new(|item, active| match (item.path.as_deref(), active) {
            (Some(path), Some(active)) => !path.is_empty() && active.starts_with(path),
            _ => false,
        })
    }

    pub fn check(&self, item: &NavItem, active_path: Option<&str>) -> bool {
        (self.predicate)(item, active_path)
    }
}

/// The test used when no predicate is supplied.
pub(crate) fn matches_exactly(item: &NavItem, active_path: Option<&str>) -> bool {
    match (item.path.as_deref(), active_path) {
        (Some(path), Some(active)) => path == active,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_requires_both_paths() {
        let item = NavItem::new("Docs").with_path("/docs");
        let untitled = NavItem::new("Group");

        assert!(matches_exactly(&item, Some("/docs")));
        assert!(!matches_exactly(&item, Some("/docs/intro")));
        assert!(!matches_exactly(&item, None));
        assert!(!matches_exactly(&untitled, Some("/docs")));
        assert!(!matches_exactly(&untitled, None));
    }

    #[test]
    fn prefix_predicate_matches_descendant_paths() {
        let prefix = ActivePredicate::prefix();
        let docs = NavItem::new("Docs").with_path("/docs");

        assert!(prefix.check(&docs, Some("/docs")));
        assert!(prefix.check(&docs, Some("/docs/intro")));
        assert!(!prefix.check(&docs, Some("/blog")));
        assert!(!prefix.check(&docs, None));
        assert!(!prefix.check(&NavItem::new("Empty").with_path(""), Some("/docs")));
    }

    #[test]
    fn predicate_sees_items_without_path() {
        let always = ActivePredicate::new(|_: &NavItem, _: Option<&str>| true);
        assert!(always.check(&NavItem::new("Group"), None));
    }

    #[test]
    fn predicate_is_deterministic() {
        let predicate = ActivePredicate::new(|item: &NavItem, active: Option<&str>| {
            item.title.len() == active.map_or(0, str::len)
        });
        let item = NavItem::new("abc");

        let first = predicate.check(&item, Some("xyz"));
        let second = predicate.check(&item, Some("xyz"));
        assert_eq!(first, second);
        assert!(first);
    }
}
