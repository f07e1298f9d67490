//! Property-based tests for style resolution, the reducer engine, and
//! navigation resolution.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::Utc;
use controlstate::controls::{CheckedState, CheckedTransition};
use controlstate::core::{StateHistory, StateTransition};
use controlstate::nav::{resolve_active, walk, ItemId, NavItem};
use controlstate::reducer::{StateReducerEngine, TransitionRequest};
use controlstate::style::{
    explain, resolve, resolve_radio, Cursor, Glyph, InteractionState, Paint, Placement,
    ThemeTokens, Variant,
};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

prop_compose! {
    fn arbitrary_interaction()(
        bits in 0..128u8,
        placement in prop::sample::select(Placement::ALL.to_vec()),
        variant in prop::sample::select(Variant::ALL.to_vec()),
    ) -> InteractionState {
        InteractionState::from_flag_bits(bits, placement, variant)
    }
}

prop_compose! {
    fn arbitrary_checked()(checked in any::<bool>(), indeterminate in any::<bool>()) -> CheckedState {
        CheckedState { checked, indeterminate }
    }
}

/// Paths embed depth and position, so every tree below has unique paths.
fn leaf(depth: usize, index: usize) -> NavItem {
    NavItem::new(format!("item {depth}.{index}")).with_path(format!("/{depth}/{index}"))
}

prop_compose! {
    fn arbitrary_tree()(shape in prop::collection::vec(prop::collection::vec(0..3usize, 0..4), 1..5))
        -> Vec<NavItem>
    {
        shape
            .iter()
            .enumerate()
            .map(|(root, children)| {
                let subnav = children
                    .iter()
                    .enumerate()
                    .map(|(child, grandchildren)| {
                        let id = root * 10 + child;
                        leaf(2, id).with_subnav((0..*grandchildren).map(|g| leaf(3, id * 10 + g)).collect())
                    })
                    .collect();
                leaf(1, root).with_subnav(subnav)
            })
            .collect()
    }
}

fn change(checked: CheckedState) -> TransitionRequest<CheckedTransition, CheckedState> {
    TransitionRequest::new(CheckedTransition::Change, checked)
}

proptest! {
    #[test]
    fn resolution_is_deterministic(state in arbitrary_interaction()) {
        let theme = ThemeTokens::default();
        prop_assert_eq!(resolve(&state, &theme), resolve(&state, &theme));
        prop_assert_eq!(resolve_radio(&state, &theme), resolve_radio(&state, &theme));
    }

    #[test]
    fn disabled_dominates_every_other_flag(state in arbitrary_interaction()) {
        let theme = ThemeTokens::default();
        let state = InteractionState { disabled: true, ..state };
        let outcome = resolve(&state, &theme);

        prop_assert_eq!(&outcome.border_color, &Paint::token(&theme.colors.tick_fill_disabled));
        let fill = match state.variant {
            Variant::Toggle => &theme.colors.slider_track_fill_disabled,
            Variant::Checkbox => &theme.colors.tick_fill_disabled,
        };
        prop_assert_eq!(&outcome.background_color, &Paint::token(fill));
        prop_assert_eq!(&outcome.label.color, &Paint::token(&theme.colors.foreground_alt));
        prop_assert_eq!(outcome.layout.cursor, Cursor::NotAllowed);
        prop_assert_eq!(explain(&state).border, "disabled");
        prop_assert_eq!(explain(&state).background, "disabled");
    }

    #[test]
    fn unmarked_error_uses_soft_negative_ramp(state in arbitrary_interaction()) {
        let theme = ThemeTokens::default();
        let state = InteractionState {
            disabled: false,
            checked: false,
            indeterminate: false,
            error: true,
            ..state
        };
        let outcome = resolve(&state, &theme);
        let c = &theme.colors;

        prop_assert_eq!(&outcome.border_color, &Paint::token(&c.negative400));
        let expected = if state.active || state.focused {
            &c.negative200
        } else if state.hovered {
            &c.negative100
        } else {
            &c.negative50
        };
        prop_assert_eq!(&outcome.background_color, &Paint::token(expected));
        prop_assert_eq!(outcome.glyph, Glyph::None);
    }

    #[test]
    fn enabled_marked_control_hides_border(state in arbitrary_interaction()) {
        prop_assume!(!state.disabled && state.is_marked());
        let outcome = resolve(&state, &ThemeTokens::default());

        prop_assert_eq!(outcome.border_color, Paint::Transparent);
        prop_assert_ne!(outcome.glyph, Glyph::None);
    }

    #[test]
    fn toggle_style_present_only_for_toggle_variant(state in arbitrary_interaction()) {
        let outcome = resolve(&state, &ThemeTokens::default());
        prop_assert_eq!(outcome.toggle.is_some(), state.variant == Variant::Toggle);
    }

    #[test]
    fn radio_outer_color_precedence(state in arbitrary_interaction()) {
        let theme = ThemeTokens::default();
        let radio = resolve_radio(&state, &theme);
        let c = &theme.colors;

        let expected = if state.error {
            &c.negative400
        } else if state.checked {
            &c.primary400
        } else {
            &c.mono700
        };
        prop_assert_eq!(radio.outer_color, Paint::token(expected));

        let diameter = if state.checked { &theme.sizing.scale100 } else { &theme.sizing.scale600 };
        prop_assert_eq!(&radio.inner_diameter, diameter);

        if state.checked || state.error {
            prop_assert!(radio.inner_hover_color.is_none());
        }
    }

    #[test]
    fn vertical_placement_stacks_layout(state in arbitrary_interaction()) {
        let outcome = resolve(&state, &ThemeTokens::default());
        let vertical = matches!(state.placement, Placement::Top | Placement::Bottom);
        prop_assert_eq!(state.placement.is_vertical(), vertical);
        prop_assert_eq!(
            outcome.layout.direction == controlstate::style::Direction::Column,
            vertical
        );
    }

    #[test]
    fn pass_through_ends_at_last_proposal(
        initial in arbitrary_checked(),
        proposals in prop::collection::vec(arbitrary_checked(), 1..12),
    ) {
        let mut engine: StateReducerEngine<CheckedTransition, CheckedState> =
            StateReducerEngine::new(initial.clone());

        let mut expected_changes = 0;
        let mut current = initial;
        for proposal in &proposals {
            let outcome = engine.dispatch(change(proposal.clone()), &());
            prop_assert_eq!(outcome.changed, *proposal != current);
            if outcome.changed {
                expected_changes += 1;
            }
            current = proposal.clone();
        }

        prop_assert_eq!(engine.current_state(), proposals.last().unwrap());
        prop_assert_eq!(engine.history().len(), expected_changes);
    }

    #[test]
    fn veto_never_changes_state(
        initial in arbitrary_checked(),
        proposals in prop::collection::vec(arbitrary_checked(), 1..12),
    ) {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let mut engine: StateReducerEngine<CheckedTransition, CheckedState> =
            StateReducerEngine::new(initial.clone());
        engine.set_reducer(|_kind, _next, current: &CheckedState| current.clone());
        engine.set_on_change(move |_: &()| counter.set(counter.get() + 1));

        let mut differing = 0;
        for proposal in &proposals {
            let outcome = engine.dispatch(change(proposal.clone()), &());
            prop_assert!(!outcome.changed);
            if *proposal != initial {
                differing += 1;
            }
        }

        prop_assert_eq!(engine.current_state(), &initial);
        prop_assert!(engine.history().is_empty());
        prop_assert_eq!(calls.get(), differing);
    }

    #[test]
    fn history_never_exceeds_its_limit(
        limit in 0..8usize,
        steps in prop::collection::vec(arbitrary_checked(), 0..40),
    ) {
        let mut history = StateHistory::with_limit(limit);

        for (i, to) in steps.iter().enumerate() {
            history.record(StateTransition {
                kind: "change".to_string(),
                from: CheckedState::unchecked(),
                to: to.clone(),
                timestamp: Utc::now(),
            });
            prop_assert_eq!(history.len(), (i + 1).min(limit));
        }

        if limit > 0 {
            prop_assert_eq!(history.last().map(|t| &t.to), steps.last());
        }
    }

    #[test]
    fn every_item_resolves_to_itself_with_its_ancestors(tree in arbitrary_tree()) {
        let entries: Vec<(ItemId, Option<String>)> =
            walk(&tree).map(|(id, item)| (id, item.path.clone())).collect();

        for (id, path) in entries {
            let resolution = resolve_active(&tree, path.as_deref(), None);

            prop_assert_eq!(resolution.active(), std::slice::from_ref(&id));
            let expected: Vec<ItemId> = id.ancestors().collect();
            let expanded: Vec<ItemId> = resolution.expanded().iter().cloned().collect();
            prop_assert_eq!(expanded, expected);
        }
    }

    #[test]
    fn unknown_path_never_matches(tree in arbitrary_tree()) {
        let resolution = resolve_active(&tree, Some("/not/in/tree"), None);
        prop_assert!(resolution.is_empty());
        prop_assert!(resolution.expanded().is_empty());
    }
}

#[test]
fn every_combination_resolves() {
    let theme = ThemeTokens::default();
    let mut count = 0;
    for state in InteractionState::all_combinations() {
        let outcome = resolve(&state, &theme);
        let radio = resolve_radio(&state, &theme);
        assert!(!outcome.label.padding.size.is_empty());
        assert!(!radio.inner_diameter.is_empty());
        count += 1;
    }
    assert_eq!(count, 128 * 4 * 2);
}
