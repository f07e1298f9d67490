//! Macros for declaring transition kinds.

/// Declare a transition-kind enum and its [`TransitionKind`] implementation.
///
/// Each variant is given the stable name used in logs and history. The
/// default transition table (proposed state verbatim) is used for all
/// variants.
///
/// [`TransitionKind`]: crate::reducer::TransitionKind
///
/// # Example
///
/// ```
/// use controlstate::transition_kinds;
/// use controlstate::reducer::TransitionKind;
///
/// transition_kinds! {
///     /// Things that can happen to a disclosure widget.
///     pub enum DisclosureTransition {
///         Toggle => "toggle",
///         Close => "close",
///     }
/// }
///
/// assert_eq!(DisclosureTransition::Close.name(), "close");
/// ```
#[macro_export]
macro_rules! transition_kinds {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::reducer::TransitionKind for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }
    };
}
