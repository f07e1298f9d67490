//! Hierarchical navigation: items, active-item resolution, and selection.

pub mod item;
pub mod navigation;
pub mod predicate;
pub mod resolve;
pub mod state;
pub mod validate;

pub use item::{find, items_from_json, walk, ItemId, NavItem, Walk};
pub use navigation::{NavRow, Navigation};
pub use predicate::ActivePredicate;
pub use resolve::{resolve_active, ActiveResolution};
pub use state::{NavState, NavTransition, SelectEvent};
pub use validate::{validate_tree, TreeIssue};
