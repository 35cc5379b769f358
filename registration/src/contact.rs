//! Contact form reducer.
//!
//! The form never leaves the process. Sending is a timer; once it fires the
//! form shows as sent until it is reset.

use sanctuary_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Ministry the message is addressed to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ministry {
    /// General inquiry
    #[default]
    General,
    /// Prayer request
    Prayer,
    /// Pastoral care
    Pastoral,
    /// Community outreach
    Outreach,
    /// Youth ministry
    Youth,
    /// Church membership
    Membership,
}

impl Ministry {
    /// Every option, in form order
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Prayer,
        Self::Pastoral,
        Self::Outreach,
        Self::Youth,
        Self::Membership,
    ];

    /// Option label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Prayer => "Prayer Request",
            Self::Pastoral => "Pastoral Care",
            Self::Outreach => "Community Outreach",
            Self::Youth => "Youth Ministry",
            Self::Membership => "Church Membership",
        }
    }
}

impl fmt::Display for Ministry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A free-text contact field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Subject line
    Subject,
    /// Message body
    Message,
}

impl ContactField {
    /// Form label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Contact form fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub message: String,
    /// Addressed ministry
    pub ministry: Ministry,
}

impl ContactForm {
    fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Required fields that are still empty
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        [
            (&self.name, ContactField::Name),
            (&self.email, ContactField::Email),
            (&self.subject, ContactField::Subject),
            (&self.message, ContactField::Message),
        ]
        .into_iter()
        .filter(|(value, _)| value.trim().is_empty())
        .map(|(_, field)| field)
        .collect()
    }
}

/// Where the form is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    /// Accepting input
    #[default]
    Editing,
    /// Waiting out the send delay
    Sending,
    /// Thank-you view
    Sent,
}

/// Contact form state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactState {
    /// Current input
    pub form: ContactForm,
    /// Lifecycle
    pub status: ContactStatus,
}

/// Contact form actions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactAction {
    /// Edit a text field
    UpdateField {
        /// Field being edited
        field: ContactField,
        /// New value
        value: String,
    },
    /// Pick the ministry
    SelectMinistry {
        /// Chosen ministry
        ministry: Ministry,
    },
    /// Send the message
    Submit,
    /// The send delay elapsed
    Delivered,
    /// Clear the form for another message
    Reset,
}

/// Contact form environment
#[derive(Clone, Copy, Debug)]
pub struct ContactEnvironment {
    /// Simulated send delay
    pub delay: Duration,
}

impl ContactEnvironment {
    /// Creates a new `ContactEnvironment`
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

/// Reducer for the contact form
#[derive(Clone, Copy, Debug, Default)]
pub struct ContactReducer;

impl ContactReducer {
    /// Creates a new `ContactReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ContactReducer {
    type State = ContactState;
    type Action = ContactAction;
    type Environment = ContactEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ContactAction::UpdateField { field, value } => {
                if state.status == ContactStatus::Editing {
                    *state.form.field_mut(field) = value;
                }
            },

            ContactAction::SelectMinistry { ministry } => {
                if state.status == ContactStatus::Editing {
                    state.form.ministry = ministry;
                }
            },

            ContactAction::Submit => {
                if state.status != ContactStatus::Editing {
                    tracing::warn!(status = ?state.status, "Ignoring contact submit");
                    return smallvec![Effect::None];
                }
                let missing = state.form.missing_fields();
                if !missing.is_empty() {
                    tracing::debug!(?missing, "Contact form incomplete");
                    return smallvec![Effect::None];
                }

                tracing::info!(ministry = %state.form.ministry, "Sending contact message");
                state.status = ContactStatus::Sending;
                return smallvec![Effect::delay(env.delay, ContactAction::Delivered)];
            },

            ContactAction::Delivered => {
                if state.status == ContactStatus::Sending {
                    state.status = ContactStatus::Sent;
                }
            },

            ContactAction::Reset => {
                if state.status == ContactStatus::Sending {
                    tracing::warn!("Ignoring reset while sending");
                } else {
                    *state = ContactState::default();
                }
            },
        }

        smallvec![Effect::None]
    }
}
