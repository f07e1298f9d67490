//! Navigation items and their identities.

use crate::config::{self, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a navigation tree.
///
/// The tree is owned by the caller and only ever read by this crate.
/// `path` is the activation key; items without one are never matched by
/// the default equality test and are not selectable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    #[serde(default, alias = "itemId", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subnav: Vec<NavItem>,
}

impl NavItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: None,
            subnav: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_subnav(mut self, subnav: Vec<NavItem>) -> Self {
        self.subnav = subnav;
        self
    }

    pub fn has_subnav(&self) -> bool {
        !self.subnav.is_empty()
    }

    pub fn is_selectable(&self) -> bool {
        self.path.is_some()
    }
}

/// Parse a list of root items from JSON.
///
/// Both `path` and `itemId` are accepted as the activation key.
pub fn items_from_json(input: &str) -> Result<Vec<NavItem>, ConfigError> {
    config::from_json("navigation items", input)
}

/// Position of an item: child indices from the root list down to the item.
///
/// Ancestors of an item are exactly the strict prefixes of its id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(Vec<usize>);

impl ItemId {
    /// Id of the `index`-th root item.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn from_indices(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Nesting level, starting at 1 for root items.
    pub fn level(&self) -> usize {
        self.0.len()
    }

    pub fn parent(&self) -> Option<Self> {
        match self.0.len() {
            0 | 1 => None,
            n => Some(Self(self.0[..n - 1].to_vec())),
        }
    }

    /// Strict ancestors, outermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = ItemId> + '_ {
        (1..self.0.len()).map(move |len| Self(self.0[..len].to_vec()))
    }

    pub fn is_ancestor_of(&self, other: &ItemId) -> bool {
        self.0.len() < other.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
            first = false;
        }
        Ok(())
    }
}

/// Look up an item by id.
pub fn find<'a>(items: &'a [NavItem], id: &ItemId) -> Option<&'a NavItem> {
    let (first, rest) = id.indices().split_first()?;
    let mut item = items.get(*first)?;
    for index in rest {
        item = item.subnav.get(*index)?;
    }
    Some(item)
}

/// Depth-first, pre-order walk over a tree.
///
/// Siblings are visited in array order and parents before children. An
/// explicit stack keeps the walk iterative regardless of depth.
pub struct Walk<'a> {
    stack: Vec<(ItemId, &'a NavItem)>,
}

impl<'a> Walk<'a> {
    pub fn new(items: &'a [NavItem]) -> Self {
        let stack = items
            .iter()
            .enumerate()
            .rev()
            .map(|(index, item)| (ItemId::root(index), item))
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (ItemId, &'a NavItem);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, item) = self.stack.pop()?;
        for (index, child) in item.subnav.iter().enumerate().rev() {
            self.stack.push((id.child(index), child));
        }
        Some((id, item))
    }
}

pub fn walk(items: &[NavItem]) -> Walk<'_> {
    Walk::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<NavItem> {
        vec![
            NavItem::new("A").with_subnav(vec![
                NavItem::new("A1").with_path("/a/1"),
                NavItem::new("A2").with_subnav(vec![NavItem::new("A2x").with_path("/a/2/x")]),
            ]),
            NavItem::new("B").with_path("/b"),
        ]
    }

    #[test]
    fn walk_is_preorder_in_array_order() {
        let items = tree();
        let titles: Vec<_> = walk(&items).map(|(_, item)| item.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "A1", "A2", "A2x", "B"]);

        let ids: Vec<_> = walk(&items).map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, vec!["0", "0.0", "0.1", "0.1.0", "1"]);
    }

    #[test]
    fn find_follows_indices() {
        let items = tree();
        let id = ItemId::from_indices(&[0, 1, 0]);

        assert_eq!(find(&items, &id).map(|i| i.title.as_str()), Some("A2x"));
        assert!(find(&items, &ItemId::from_indices(&[0, 5])).is_none());
        assert!(find(&items, &ItemId::from_indices(&[])).is_none());
    }

    #[test]
    fn ancestors_are_strict_prefixes() {
        let id = ItemId::from_indices(&[2, 0, 3]);
        let ancestors: Vec<_> = id.ancestors().collect();

        assert_eq!(
            ancestors,
            vec![ItemId::root(2), ItemId::from_indices(&[2, 0])]
        );
        assert_eq!(id.parent(), Some(ItemId::from_indices(&[2, 0])));
        assert_eq!(ItemId::root(2).parent(), None);
        assert!(ItemId::root(2).is_ancestor_of(&id));
        assert!(!id.is_ancestor_of(&id));
        assert_eq!(id.level(), 3);
    }

    #[test]
    fn json_accepts_item_id_alias() {
        let items = items_from_json(
            r##"[
                { "title": "Colors", "subnav": [ { "title": "Primary", "itemId": "/" } ] },
                { "title": "Sizing", "path": "#level1.2" }
            ]"##,
        )
        .unwrap();

        assert_eq!(items[0].path, None);
        assert_eq!(items[0].subnav[0].path.as_deref(), Some("/"));
        assert_eq!(items[1].path.as_deref(), Some("#level1.2"));
        assert!(items[1].is_selectable());
        assert!(!items[1].has_subnav());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(items_from_json(r#"{ "title": "not a list" }"#).is_err());
    }
}
