//! Registration wizard reducer.
//!
//! Every change to a [`RegistrationState`] goes through
//! [`RegistrationReducer::reduce`]. Out-of-range input is clamped, and
//! navigation that the active step does not allow is ignored; neither is an
//! error.

use crate::catalog::{AddOnId, Catalog, EventId};
use crate::draft::{
    GuestField, RegistrationState, SubmissionStatus, parse_event_date, parse_time_slot,
};
use crate::money::Money;
use crate::pricing::{PriceBreakdown, compute_total};
use crate::reference::ReferenceCode;
use crate::step::Step;
use sanctuary_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Actions
// ============================================================================

/// Inputs to the registration wizard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationAction {
    /// Choose an event; resets the attendee count to 1
    SelectEvent {
        /// Catalog event id
        event_id: EventId,
    },
    /// Enter the event date (`YYYY-MM-DD`)
    SetEventDate {
        /// Raw date input
        date: String,
    },
    /// Pick a time slot (`HH:MM`)
    SetEventTime {
        /// Raw time input
        time: String,
    },
    /// Set the attendee count, clamped to `[1, capacity]`
    SetAttendeeCount {
        /// Requested count
        count: i64,
    },
    /// Set the child count, clamped to `>= 0`
    SetChildCount {
        /// Requested count
        count: i64,
    },
    /// Add or remove an add-on
    ToggleAddOn {
        /// Add-on id
        add_on_id: AddOnId,
    },
    /// Edit one guest contact field
    UpdateGuest {
        /// Field being edited
        field: GuestField,
        /// New value
        value: String,
    },
    /// Enter a donation; negative or non-numeric input becomes zero
    SetDonationAmount {
        /// Raw amount input
        amount: String,
    },
    /// Advance if the active step's requirements are met
    GoNext,
    /// Go back one step
    GoBack,
    /// Submit the registration from the review step
    Submit,
    /// The simulated processing delay has elapsed
    SubmissionCompleted,
}

// ============================================================================
// Environment
// ============================================================================

/// Environment dependencies for the registration wizard
#[derive(Clone)]
pub struct RegistrationEnvironment {
    /// Clock for confirmation timestamps
    pub clock: Arc<dyn Clock>,
    /// Events and add-ons on offer
    pub catalog: Arc<Catalog>,
    /// Simulated processing delay on submit
    pub submit_delay: Duration,
}

impl RegistrationEnvironment {
    /// Creates a new `RegistrationEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, catalog: Arc<Catalog>, submit_delay: Duration) -> Self {
        Self {
            clock,
            catalog,
            submit_delay,
        }
    }

    /// Current total for `state`
    #[must_use]
    pub fn total(&self, state: &RegistrationState) -> PriceBreakdown {
        compute_total(state, &self.catalog)
    }

    fn capacity_of(&self, event_id: Option<EventId>) -> u32 {
        event_id
            .and_then(|id| self.catalog.event(id))
            .map_or(1, |event| event.capacity.max(1))
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Reducer for the registration wizard
#[derive(Clone, Copy, Debug, Default)]
pub struct RegistrationReducer;

impl RegistrationReducer {
    /// Creates a new `RegistrationReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn go_next(state: &mut RegistrationState) {
        if state.is_processing() {
            tracing::warn!("Ignoring GoNext while submission is processing");
            return;
        }
        let blockers = state.blockers();
        if !blockers.is_empty() {
            tracing::debug!(step = %state.step, ?blockers, "GoNext blocked");
            return;
        }
        if let Some(next) = state.step.next() {
            tracing::debug!(from = %state.step, to = %next, "Advancing");
            state.step = next;
        }
    }

    fn go_back(state: &mut RegistrationState) {
        if state.is_processing() {
            tracing::warn!("Ignoring GoBack while submission is processing");
            return;
        }
        if let Some(previous) = state.step.previous() {
            tracing::debug!(from = %state.step, to = %previous, "Going back");
            state.step = previous;
        }
    }

    fn submit(
        state: &mut RegistrationState,
        env: &RegistrationEnvironment,
    ) -> SmallVec<[Effect<RegistrationAction>; 4]> {
        if state.step != Step::Review {
            tracing::warn!(step = %state.step, "Submit is only accepted on the review step");
            return smallvec![Effect::None];
        }
        if state.submission != SubmissionStatus::Idle {
            tracing::warn!(status = ?state.submission, "Ignoring repeated submit");
            return smallvec![Effect::None];
        }
        if !state.can_proceed() {
            return smallvec![Effect::None];
        }

        tracing::info!(total = %env.total(state).total, "Submitting registration");
        state.submission = SubmissionStatus::Processing;
        smallvec![Effect::delay(
            env.submit_delay,
            RegistrationAction::SubmissionCompleted
        )]
    }

    fn complete(state: &mut RegistrationState, env: &RegistrationEnvironment) {
        if !state.is_processing() {
            tracing::warn!("Ignoring SubmissionCompleted without a pending submission");
            return;
        }
        let confirmed_at = env.clock.now();
        let reference = ReferenceCode::from_timestamp(confirmed_at);
        tracing::info!(%reference, "Registration confirmed");

        state.submission = SubmissionStatus::Confirmed {
            reference,
            confirmed_at,
        };
        state.step = Step::Confirmation;
    }
}

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Action = RegistrationAction;
    type Environment = RegistrationEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            RegistrationAction::SelectEvent { event_id } => {
                if env.catalog.event(event_id).is_some() {
                    state.event_id = Some(event_id);
                    state.details.attendees = 1;
                } else {
                    tracing::warn!(%event_id, "Ignoring unknown event");
                }
            },

            RegistrationAction::SetEventDate { date } => {
                state.details.date = parse_event_date(&date);
            },

            RegistrationAction::SetEventTime { time } => {
                state.details.time = parse_time_slot(&time);
            },

            RegistrationAction::SetAttendeeCount { count } => {
                let capacity = env.capacity_of(state.event_id);
                let clamped = count.clamp(1, i64::from(capacity));
                // within [1, capacity], so it fits
                state.details.attendees = u32::try_from(clamped).unwrap_or(capacity);
            },

            RegistrationAction::SetChildCount { count } => {
                state.details.children = u32::try_from(count.max(0)).unwrap_or(u32::MAX);
            },

            RegistrationAction::ToggleAddOn { add_on_id } => {
                if !state.add_ons.remove(&add_on_id) {
                    state.add_ons.insert(add_on_id);
                }
            },

            RegistrationAction::UpdateGuest { field, value } => {
                *state.guest.field_mut(field) = value;
            },

            RegistrationAction::SetDonationAmount { amount } => {
                state.donation = Money::parse_lenient(&amount);
            },

            RegistrationAction::GoNext => Self::go_next(state),

            RegistrationAction::GoBack => Self::go_back(state),

            RegistrationAction::Submit => return Self::submit(state, env),

            RegistrationAction::SubmissionCompleted => Self::complete(state, env),
        }

        smallvec![Effect::None]
    }
}
