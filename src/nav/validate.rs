//! Structural checks for navigation trees.
//!
//! Resolution never fails on a malformed tree, it just marks every match.
//! These checks let callers catch duplicate or empty paths up front, with
//! every problem reported at once.

use crate::nav::item::{walk, ItemId, NavItem};
use std::collections::HashMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A problem found in a navigation tree
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TreeIssue {
    #[error("Path {path:?} at {duplicate} already used at {first}")]
    DuplicatePath {
        path: String,
        first: ItemId,
        duplicate: ItemId,
    },

    #[error("Item {title:?} at {id} has an empty path")]
    EmptyPath { id: ItemId, title: String },
}

/// Check that paths are unique and non-empty, accumulating all issues.
///
/// # Example
///
/// ```rust
/// use controlstate::nav::{validate_tree, NavItem};
///
/// let items = vec![
///     NavItem::new("A").with_path("/same"),
///     NavItem::new("B").with_path("/same"),
///     NavItem::new("C").with_path(""),
/// ];
///
/// assert!(validate_tree(&items).is_failure());
/// ```
pub fn validate_tree(items: &[NavItem]) -> Validation<(), NonEmptyVec<TreeIssue>> {
    let mut seen: HashMap<&str, ItemId> = HashMap::new();
    let mut checks: Vec<Validation<(), NonEmptyVec<TreeIssue>>> = Vec::new();

    for (id, item) in walk(items) {
        let Some(path) = item.path.as_deref() else {
            continue;
        };

        if path.is_empty() {
            checks.push(Validation::fail(TreeIssue::EmptyPath {
                id,
                title: item.title.clone(),
            }));
            continue;
        }

        let check = match seen.get(path) {
            Some(first) => Validation::fail(TreeIssue::DuplicatePath {
                path: path.to_string(),
                first: first.clone(),
                duplicate: id,
            }),
            None => {
                seen.insert(path, id);
                Validation::success(())
            }
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}
