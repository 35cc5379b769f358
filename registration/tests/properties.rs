//! Property tests for the registration reducer and pricing

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use proptest::prelude::*;
use registration::{
    AddOnId, Catalog, EventId, GuestField, Money, PROCESSING_FEE, RegistrationAction,
    RegistrationEnvironment, RegistrationReducer, RegistrationState, Step, compute_total,
};
use sanctuary_core::reducer::Reducer;
use sanctuary_testing::test_clock;
use std::sync::Arc;
use std::time::Duration;

fn env() -> RegistrationEnvironment {
    RegistrationEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(Catalog::church()),
        Duration::from_secs(3),
    )
}

fn apply(state: &mut RegistrationState, actions: impl IntoIterator<Item = RegistrationAction>) {
    let env = env();
    let reducer = RegistrationReducer::new();
    for action in actions {
        let _ = reducer.reduce(state, action, &env);
    }
}

fn add_on_id() -> impl Strategy<Value = AddOnId> {
    prop::sample::select(vec![
        "meal-service",
        "childcare",
        "transport",
        "materials",
        "donation",
        "unknown",
    ])
    .prop_map(AddOnId::new)
}

/// Every input the navigation properties draw from
///
/// Enough to fill steps 1, 2 and 4, so sequences can reach review and
/// confirmation.
fn navigation_actions() -> Vec<RegistrationAction> {
    let mut actions = vec![
        RegistrationAction::GoNext,
        RegistrationAction::GoBack,
        RegistrationAction::Submit,
        RegistrationAction::SubmissionCompleted,
        RegistrationAction::SetEventDate {
            date: "2026-11-01".to_string(),
        },
        RegistrationAction::SetEventTime {
            time: "11:00".to_string(),
        },
    ];
    actions.extend((1_u32..=4).map(|id| RegistrationAction::SelectEvent {
        event_id: EventId::new(id),
    }));
    actions.extend(
        [
            (GuestField::FirstName, "Zodwa"),
            (GuestField::LastName, "Mthembu"),
            (GuestField::Email, "zodwa@example.org"),
            (GuestField::Phone, "0820001111"),
        ]
        .into_iter()
        .map(|(field, value)| RegistrationAction::UpdateGuest {
            field,
            value: value.to_string(),
        }),
    );
    actions
}

fn navigation() -> impl Strategy<Value = RegistrationAction> {
    prop_oneof![
        3 => Just(RegistrationAction::GoNext),
        1 => Just(RegistrationAction::GoBack),
        4 => prop::sample::select(navigation_actions()),
    ]
}

/// Every step's requirements met, parked on review
fn review_ready() -> RegistrationState {
    let mut state = RegistrationState::new();
    let mut fill = vec![RegistrationAction::SelectEvent {
        event_id: EventId::new(1),
    }];
    fill.extend(navigation_actions().into_iter().filter(|action| {
        matches!(
            action,
            RegistrationAction::SetEventDate { .. }
                | RegistrationAction::SetEventTime { .. }
                | RegistrationAction::UpdateGuest { .. }
        )
    }));
    fill.extend(std::iter::repeat_n(RegistrationAction::GoNext, 4));
    apply(&mut state, fill);
    state
}

/// Checks the navigation rules for one transition
fn check_transition(
    before: &RegistrationState,
    action: &RegistrationAction,
    after: &RegistrationState,
) -> Result<(), TestCaseError> {
    prop_assert!((1..=6).contains(&after.step.number()));
    match action {
        RegistrationAction::GoNext => {
            if after.step != before.step {
                prop_assert!(before.can_proceed());
                prop_assert_eq!(after.step.number(), before.step.number() + 1);
            }
            if before.step == Step::Confirmation {
                prop_assert_eq!(after, before);
            }
        },
        RegistrationAction::GoBack => {
            if before.step == Step::SelectEvent || before.is_processing() {
                prop_assert_eq!(after, before);
            }
        },
        _ => {},
    }
    Ok(())
}

/// A draft with arbitrary event, counts, add-ons and donation
fn draft() -> impl Strategy<Value = RegistrationState> {
    (
        prop::option::of(1_u32..=3),
        1_u32..=50,
        0_u32..=20,
        prop::collection::btree_set(add_on_id(), 0..6),
        0_u64..=100_000,
    )
        .prop_map(|(event, attendees, children, add_ons, donation)| {
            let mut state = RegistrationState::new();
            state.event_id = event.map(EventId::new);
            state.details.attendees = attendees;
            state.details.children = children;
            state.add_ons = add_ons;
            state.donation = Money::from_cents(donation);
            state
        })
}

proptest! {
    #[test]
    fn attendee_count_is_clamped_to_capacity(event in 1_u32..=3, count in -1_000_i64..1_000) {
        let catalog = Catalog::church();
        let capacity = i64::from(catalog.event(EventId::new(event)).unwrap().capacity);

        let mut state = RegistrationState::new();
        apply(&mut state, [
            RegistrationAction::SelectEvent { event_id: EventId::new(event) },
            RegistrationAction::SetAttendeeCount { count },
        ]);

        let expected = count.clamp(1, capacity);
        prop_assert_eq!(i64::from(state.details.attendees), expected);
    }

    #[test]
    fn child_count_is_never_negative(count in any::<i64>()) {
        let mut state = RegistrationState::new();
        apply(&mut state, [RegistrationAction::SetChildCount { count }]);
        if count <= 0 {
            prop_assert_eq!(state.details.children, 0);
        } else {
            prop_assert!(state.details.children > 0);
        }
    }

    #[test]
    fn toggling_twice_restores_add_ons(start in draft(), id in add_on_id()) {
        let mut state = start.clone();
        apply(&mut state, [
            RegistrationAction::ToggleAddOn { add_on_id: id.clone() },
            RegistrationAction::ToggleAddOn { add_on_id: id },
        ]);
        prop_assert_eq!(state.add_ons, start.add_ons);
    }

    #[test]
    fn step_stays_within_bounds(actions in prop::collection::vec(navigation(), 0..80)) {
        let mut state = RegistrationState::new();
        for action in actions {
            let before = state.clone();
            apply(&mut state, [action.clone()]);
            check_transition(&before, &action, &state)?;
        }
    }

    #[test]
    fn late_steps_stay_within_bounds(actions in prop::collection::vec(navigation(), 0..40)) {
        let mut state = review_ready();
        prop_assert_eq!(state.step, Step::Review);
        for action in actions {
            let before = state.clone();
            apply(&mut state, [action.clone()]);
            check_transition(&before, &action, &state)?;
            if state.step == Step::Confirmation && before.step == Step::Confirmation {
                prop_assert_eq!(state.reference(), before.reference());
            }
        }
    }

    #[test]
    fn processing_fee_applies_iff_subtotal_positive(state in draft()) {
        let breakdown = compute_total(&state, &Catalog::church());
        if breakdown.subtotal.is_zero() {
            prop_assert_eq!(breakdown.processing_fee, Money::ZERO);
        } else {
            prop_assert_eq!(breakdown.processing_fee, PROCESSING_FEE);
        }
        prop_assert_eq!(breakdown.total, breakdown.subtotal + breakdown.processing_fee);
    }

    #[test]
    fn total_is_pure(state in draft()) {
        let catalog = Catalog::church();
        let first = compute_total(&state, &catalog);
        let second = compute_total(&state, &catalog);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn children_only_move_per_child_lines(state in draft(), children in 0_u32..=20) {
        let catalog = Catalog::church();
        let before = compute_total(&state, &catalog);
        let mut changed = state.clone();
        changed.details.children = children;
        let after = compute_total(&changed, &catalog);

        prop_assert_eq!(before.base, after.base);
        for (old, new) in before.add_on_lines.iter().zip(&after.add_on_lines) {
            if old.name != "Children's Ministry" {
                prop_assert_eq!(old, new);
            }
        }
    }
}

#[test]
fn navigation_inputs_reach_confirmation() {
    let state = review_ready();
    assert!(state.can_proceed());

    let mut confirmed = state.clone();
    apply(
        &mut confirmed,
        [RegistrationAction::Submit, RegistrationAction::SubmissionCompleted],
    );
    assert_eq!(confirmed.step, Step::Confirmation);
    assert!(confirmed.reference().is_some());
}
