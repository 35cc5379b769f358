//! The in-memory registration draft.
//!
//! The draft is grouped by the step that owns each field, so a step's
//! validity check only ever looks at its own section. Nothing here mutates on
//! its own; changes come from [`crate::reducer::RegistrationReducer`].

use crate::catalog::{AddOnId, Catalog, EventId};
use crate::money::Money;
use crate::reference::ReferenceCode;
use crate::step::Step;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Start times offered in the event details step
pub const TIME_SLOTS: [&str; 7] = ["09:00", "10:00", "11:00", "14:00", "15:00", "18:00", "19:00"];

/// Preset donation buttons on the review step, in rand
pub const DONATION_PRESETS: [u64; 4] = [25, 50, 100, 200];

/// Parses a `YYYY-MM-DD` date; anything else is no date
#[must_use]
pub fn parse_event_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Parses an offered `HH:MM` slot; unlisted times are no selection
#[must_use]
pub fn parse_time_slot(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    if !TIME_SLOTS.contains(&input) {
        return None;
    }
    NaiveTime::parse_from_str(input, "%H:%M").ok()
}

/// Step 2 fields
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Chosen calendar date
    pub date: Option<NaiveDate>,
    /// Chosen start time
    pub time: Option<NaiveTime>,
    /// Adults attending, within `[1, capacity]`
    pub attendees: u32,
    /// Children attending
    pub children: u32,
}

impl Default for EventDetails {
    fn default() -> Self {
        Self {
            date: None,
            time: None,
            attendees: 1,
            children: 0,
        }
    }
}

/// A guest contact field, for field-by-field form updates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestField {
    /// First name
    FirstName,
    /// Last name
    LastName,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Special needs or requests
    Notes,
    /// Prayer requests or intentions
    PrayerRequests,
}

/// Step 4 fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestContact {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Special needs or requests
    pub notes: String,
    /// Prayer requests or intentions
    pub prayer_requests: String,
}

impl GuestContact {
    /// Mutable access to one field
    pub fn field_mut(&mut self, field: GuestField) -> &mut String {
        match field {
            GuestField::FirstName => &mut self.first_name,
            GuestField::LastName => &mut self.last_name,
            GuestField::Email => &mut self.email,
            GuestField::Phone => &mut self.phone,
            GuestField::Notes => &mut self.notes,
            GuestField::PrayerRequests => &mut self.prayer_requests,
        }
    }

    /// Full name, as entered
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Progress of the simulated submission
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Not submitted
    #[default]
    Idle,
    /// Waiting out the simulated processing delay
    Processing,
    /// Registration accepted
    Confirmed {
        /// Display reference
        reference: ReferenceCode,
        /// When the registration was confirmed
        confirmed_at: DateTime<Utc>,
    },
}

/// Something a step needs before the wizard can move past it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Requirement {
    /// Step 1: an event is chosen
    EventSelected,
    /// Step 2: a calendar date is chosen
    EventDate,
    /// Step 2: a time slot is chosen
    EventTime,
    /// Step 2: at least one attendee
    Attendees,
    /// Step 4: first name given
    FirstName,
    /// Step 4: last name given
    LastName,
    /// Step 4: email given
    Email,
    /// Step 4: phone given
    Phone,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::EventSelected => "select an event",
            Self::EventDate => "choose a date",
            Self::EventTime => "choose a time",
            Self::Attendees => "add at least one attendee",
            Self::FirstName => "enter a first name",
            Self::LastName => "enter a last name",
            Self::Email => "enter an email address",
            Self::Phone => "enter a phone number",
        };
        f.write_str(text)
    }
}

/// The registration draft and wizard cursor
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationState {
    /// Active step
    pub step: Step,
    /// Step 1: chosen event
    pub event_id: Option<EventId>,
    /// Step 2: date, time and counts
    pub details: EventDetails,
    /// Step 3: chosen add-ons
    pub add_ons: BTreeSet<AddOnId>,
    /// Step 4: contact details
    pub guest: GuestContact,
    /// Step 5: voluntary donation
    pub donation: Money,
    /// Submission progress
    pub submission: SubmissionStatus,
}

impl RegistrationState {
    /// A fresh draft on step 1
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A draft seeded from the booking page's query string (`event=<id>`)
    ///
    /// A query naming a catalog event starts on step 2 with that event
    /// selected. Anything else, including an undecodable query, starts fresh.
    #[must_use]
    pub fn from_query(query: &str, catalog: &Catalog) -> Self {
        let query = query.trim_start_matches('?');
        let params: HashMap<String, String> = match serde_urlencoded::from_str(query) {
            Ok(params) => params,
            Err(error) => {
                tracing::debug!(%error, "Ignoring undecodable booking query");
                return Self::new();
            },
        };

        let preselected = params
            .get("event")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .map(EventId::new)
            .filter(|id| catalog.event(*id).is_some());

        match preselected {
            Some(event_id) => Self {
                step: Step::EventDetails,
                event_id: Some(event_id),
                ..Self::default()
            },
            None => Self::new(),
        }
    }

    /// Whether a submission is in flight
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        matches!(self.submission, SubmissionStatus::Processing)
    }

    /// Reference code, once confirmed
    #[must_use]
    pub const fn reference(&self) -> Option<&ReferenceCode> {
        match &self.submission {
            SubmissionStatus::Confirmed { reference, .. } => Some(reference),
            _ => None,
        }
    }

    /// Unmet requirements of `step`, in form order
    #[must_use]
    pub fn requirements_for(&self, step: Step) -> Vec<Requirement> {
        let mut missing = Vec::new();
        match step {
            Step::SelectEvent => {
                if self.event_id.is_none() {
                    missing.push(Requirement::EventSelected);
                }
            },
            Step::EventDetails => {
                if self.details.date.is_none() {
                    missing.push(Requirement::EventDate);
                }
                if self.details.time.is_none() {
                    missing.push(Requirement::EventTime);
                }
                if self.details.attendees < 1 {
                    missing.push(Requirement::Attendees);
                }
            },
            Step::GuestInfo => {
                let guest = &self.guest;
                for (value, requirement) in [
                    (&guest.first_name, Requirement::FirstName),
                    (&guest.last_name, Requirement::LastName),
                    (&guest.email, Requirement::Email),
                    (&guest.phone, Requirement::Phone),
                ] {
                    if value.is_empty() {
                        missing.push(requirement);
                    }
                }
            },
            Step::AddOns | Step::Review | Step::Confirmation => {},
        }
        missing
    }

    /// Unmet requirements of the active step
    #[must_use]
    pub fn blockers(&self) -> Vec<Requirement> {
        self.requirements_for(self.step)
    }

    /// Whether the active step's predicate holds
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.blockers().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_date() {
        assert_eq!(
            parse_event_date("2026-11-01"),
            NaiveDate::from_ymd_opt(2026, 11, 1)
        );
        assert_eq!(parse_event_date(""), None);
        assert_eq!(parse_event_date("2026-02-30"), None);
        assert_eq!(parse_event_date("next sunday"), None);
    }

    #[test]
    fn test_parse_time_slot_only_offered_slots() {
        assert_eq!(parse_time_slot("09:00"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_time_slot("19:00"), NaiveTime::from_hms_opt(19, 0, 0));
        assert_eq!(parse_time_slot("12:00"), None);
        assert_eq!(parse_time_slot(""), None);
    }

    #[test]
    fn test_from_query_preselects_known_event() {
        let catalog = Catalog::church();
        let state = RegistrationState::from_query("?event=3", &catalog);
        assert_eq!(state.step, Step::EventDetails);
        assert_eq!(state.event_id, Some(EventId::new(3)));
        assert_eq!(state.details.attendees, 1);
    }

    #[test]
    fn test_from_query_ignores_unknown_or_missing_event() {
        let catalog = Catalog::church();
        for query in ["", "event=42", "event=abc", "other=1", "event"] {
            let state = RegistrationState::from_query(query, &catalog);
            assert_eq!(state, RegistrationState::new(), "query {query:?}");
        }
    }

    #[test]
    fn test_requirements_per_step() {
        let mut state = RegistrationState::new();
        assert_eq!(state.blockers(), vec![Requirement::EventSelected]);

        state.step = Step::EventDetails;
        assert_eq!(
            state.blockers(),
            vec![Requirement::EventDate, Requirement::EventTime]
        );

        state.step = Step::AddOns;
        assert!(state.can_proceed());

        state.step = Step::GuestInfo;
        state.guest.first_name = "Thandi".to_string();
        state.guest.email = String::new();
        assert_eq!(
            state.blockers(),
            vec![Requirement::LastName, Requirement::Email, Requirement::Phone]
        );

        state.step = Step::Review;
        assert!(state.can_proceed());
    }

    #[test]
    fn test_full_name_trims() {
        let guest = GuestContact {
            first_name: " Thandi ".to_string(),
            last_name: "Mokoena".to_string(),
            ..GuestContact::default()
        };
        assert_eq!(guest.full_name(), "Thandi Mokoena");
    }
}
