//! Controlstate: state and style logic for checkbox-family controls and
//! hierarchical navigation.
//!
//! Everything here is rendering-agnostic. Hosts feed in snapshots and
//! events, and get back style tokens, active items, and state changes.
//!
//! # Core Concepts
//!
//! - **Style resolution**: ordered precedence tables map an interaction
//!   snapshot (disabled, checked, error, hover, ...) to theme tokens
//! - **State reducer engine**: every state change goes through a default
//!   transition table and an optional caller override, in controlled or
//!   uncontrolled mode
//! - **Navigation resolution**: depth-first matching of an active path
//!   against a nested item tree, with ancestor expansion
//!
//! # Example
//!
//! ```rust
//! use controlstate::builder::ReducerBuilder;
//! use controlstate::nav::{ItemId, NavItem, NavState, Navigation};
//!
//! let items = vec![
//!     NavItem::new("Colors").with_subnav(vec![
//!         NavItem::new("Shades").with_path("#shades").with_subnav(vec![
//!             NavItem::new("Dark").with_path("#shades.dark"),
//!         ]),
//!     ]),
//!     NavItem::new("Sizing").with_path("#sizing"),
//! ];
//!
//! // Refuse to leave "#sizing" once it is selected.
//! let engine = ReducerBuilder::new()
//!     .initial(NavState::default())
//!     .reducer(|_kind, next: NavState, current: &NavState| {
//!         if current.active_path.as_deref() == Some("#sizing") {
//!             current.clone()
//!         } else {
//!             next
//!         }
//!     })
//!     .build()
//!     .unwrap();
//! let mut nav = Navigation::new(items, engine);
//!
//! nav.select_path("#shades.dark");
//! let resolution = nav.resolution();
//! assert!(resolution.is_expanded(&ItemId::root(0)));
//! assert!(resolution.is_expanded(&ItemId::from_indices(&[0, 0])));
//!
//! nav.select_path("#sizing");
//! nav.select_path("#shades");
//! assert_eq!(nav.active_path(), Some("#sizing"));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod controls;
pub mod core;
pub mod nav;
pub mod reducer;
pub mod style;

// Re-export commonly used types
pub use builder::{BuildError, ReducerBuilder};
pub use core::{State, StateHistory, StateTransition};
pub use nav::{resolve_active, ActiveResolution, NavItem, Navigation};
pub use reducer::{Control, DispatchOutcome, StateReducerEngine, TransitionKind, TransitionRequest};
pub use style::{resolve, resolve_radio, InteractionState, StyleOutcome, ThemeTokens};
