//! Wizard steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six registration steps, in order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Choose a service or programme
    #[default]
    SelectEvent,
    /// Date, time and attendance
    EventDetails,
    /// Meals, childcare, transport
    AddOns,
    /// Contact details and requests
    GuestInfo,
    /// Review totals and submit
    Review,
    /// Registration complete
    Confirmation,
}

impl Step {
    /// All steps in wizard order
    pub const ALL: [Self; 6] = [
        Self::SelectEvent,
        Self::EventDetails,
        Self::AddOns,
        Self::GuestInfo,
        Self::Review,
        Self::Confirmation,
    ];

    /// 1-based position in the wizard
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::SelectEvent => 1,
            Self::EventDetails => 2,
            Self::AddOns => 3,
            Self::GuestInfo => 4,
            Self::Review => 5,
            Self::Confirmation => 6,
        }
    }

    /// The step at a 1-based position
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::SelectEvent),
            2 => Some(Self::EventDetails),
            3 => Some(Self::AddOns),
            4 => Some(Self::GuestInfo),
            5 => Some(Self::Review),
            6 => Some(Self::Confirmation),
            _ => None,
        }
    }

    /// The following step, `None` on the last
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, `None` on the first
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Heading shown in the progress bar
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::SelectEvent => "Select Event",
            Self::EventDetails => "Event Details",
            Self::AddOns => "Additional Services",
            Self::GuestInfo => "Guest Information",
            Self::Review => "Registration",
            Self::Confirmation => "Confirmation",
        }
    }

    /// Subtitle shown in the progress bar
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SelectEvent => "Choose your service or program",
            Self::EventDetails => "Date, time, and attendance",
            Self::AddOns => "Meals, childcare, transport",
            Self::GuestInfo => "Your details and needs",
            Self::Review => "Complete your registration",
            Self::Confirmation => "Registration complete",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}
