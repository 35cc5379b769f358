//! Partnership pledges sent over WhatsApp.

use crate::deep_link::{WhatsAppNumber, whatsapp_link};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_MESSAGE: &str = "I want to support the ministry and help change lives.";

/// Giving cadence
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnershipPlan {
    /// Weekly giving
    Weekly,
    /// Monthly giving
    #[default]
    Monthly,
    /// Yearly giving
    Annual,
}

impl PartnershipPlan {
    /// All plans in display order
    pub const ALL: [Self; 3] = [Self::Weekly, Self::Monthly, Self::Annual];

    /// Plan title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly Partner",
            Self::Monthly => "Monthly Partner",
            Self::Annual => "Annual Partner",
        }
    }

    /// Suggested amount range
    #[must_use]
    pub const fn amount_range(self) -> &'static str {
        match self {
            Self::Weekly => "R100 - R500",
            Self::Monthly => "R200 - R1000",
            Self::Annual => "R2000 - R10000",
        }
    }

    /// What the plan supports
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Weekly => "Support our ongoing street outreach and weekly ministry activities",
            Self::Monthly => {
                "Help sustain our healing ministry and leadership development programs"
            },
            Self::Annual => {
                "Make a lasting impact on our church's vision to change lives and produce future leaders"
            },
        }
    }

    /// Partner benefits
    #[must_use]
    pub const fn features(self) -> &'static [&'static str] {
        match self {
            Self::Weekly => &["Weekly prayer support", "Ministry updates", "Community fellowship"],
            Self::Monthly => &[
                "Monthly ministry reports",
                "Special prayer requests",
                "Exclusive fellowship events",
                "Leadership training access",
            ],
            Self::Annual => &[
                "Annual impact report",
                "Personal meeting with Apostle Elijah",
                "Priority prayer ministry",
                "Leadership development mentorship",
                "Special recognition",
            ],
        }
    }

    /// Highlighted as the most popular choice
    #[must_use]
    pub const fn is_popular(self) -> bool {
        matches!(self, Self::Monthly)
    }
}

/// Partnership form errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartnershipError {
    /// A required field is blank
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// The partnership form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnershipForm {
    /// Chosen plan
    pub plan: PartnershipPlan,
    /// Free-text amount overriding the plan range
    pub custom_amount: String,
    /// Donor name
    pub name: String,
    /// Donor email
    pub email: String,
    /// Donor phone
    pub phone: String,
    /// Optional note
    pub message: String,
}

impl PartnershipForm {
    /// Amount line: the custom amount if given, else the plan range
    #[must_use]
    pub fn amount(&self) -> &str {
        let custom = self.custom_amount.trim();
        if custom.is_empty() {
            self.plan.amount_range()
        } else {
            custom
        }
    }

    /// Checks the required fields (name, email, phone)
    ///
    /// # Errors
    ///
    /// Returns [`PartnershipError::MissingField`] for the first blank one.
    pub fn validate(&self) -> Result<(), PartnershipError> {
        for (value, field) in [
            (&self.name, "name"),
            (&self.email, "email"),
            (&self.phone, "phone"),
        ] {
            if value.trim().is_empty() {
                return Err(PartnershipError::MissingField(field));
            }
        }
        Ok(())
    }

    /// The WhatsApp message body
    #[must_use]
    pub fn message(&self) -> String {
        let title = self.plan.title();
        let note = match self.message.trim() {
            "" => DEFAULT_MESSAGE,
            note => note,
        };

        format!(
            "Hi Elijah Church of Christ, I want to become a {title}!\n\n\
             \u{1f4dd} **Partnership Details:**\n\
             Plan: {title}\n\
             Amount: {amount}\n\n\
             \u{1f464} **My Information:**\n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\n\
             \u{1f4ac} **Message:**\n\
             {note}\n\n\
             \u{1f64f} Looking forward to partnering with you in God's work!",
            amount = self.amount(),
            name = self.name.trim(),
            email = self.email.trim(),
            phone = self.phone.trim(),
        )
    }

    /// Validates the form and builds the WhatsApp link carrying [`Self::message`]
    ///
    /// # Errors
    ///
    /// Returns [`PartnershipError::MissingField`] if validation fails.
    pub fn deep_link(&self, number: &WhatsAppNumber) -> Result<String, PartnershipError> {
        self.validate()?;
        tracing::debug!(plan = ?self.plan, "Building partnership link");
        Ok(whatsapp_link(number, Some(&self.message())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PartnershipForm {
        PartnershipForm {
            plan: PartnershipPlan::Weekly,
            name: "Sipho Dlamini".to_string(),
            email: "sipho@example.org".to_string(),
            phone: "+27 82 000 0000".to_string(),
            ..PartnershipForm::default()
        }
    }

    #[test]
    fn test_default_plan_is_monthly() {
        let form = PartnershipForm::default();
        assert_eq!(form.plan, PartnershipPlan::Monthly);
        assert!(form.plan.is_popular());
        assert_eq!(form.amount(), "R200 - R1000");
    }

    #[test]
    fn test_custom_amount_wins() {
        let mut form = filled();
        form.custom_amount = " R350 ".to_string();
        assert_eq!(form.amount(), "R350");
    }

    #[test]
    fn test_message_content() {
        let message = filled().message();
        assert!(message.starts_with("Hi Elijah Church of Christ, I want to become a Weekly Partner!"));
        assert!(message.contains("Plan: Weekly Partner\nAmount: R100 - R500\n"));
        assert!(message.contains("Name: Sipho Dlamini\n"));
        assert!(message.contains(DEFAULT_MESSAGE));
    }

    #[test]
    fn test_message_layout() {
        let mut form = filled();
        form.plan = PartnershipPlan::Annual;
        form.custom_amount = "R5000".to_string();
        form.message = "For the youth camp.".to_string();

        assert_eq!(
            form.message(),
            "Hi Elijah Church of Christ, I want to become a Annual Partner!\n\n\
             \u{1f4dd} **Partnership Details:**\nPlan: Annual Partner\nAmount: R5000\n\n\
             \u{1f464} **My Information:**\nName: Sipho Dlamini\nEmail: sipho@example.org\n\
             Phone: +27 82 000 0000\n\n\
             \u{1f4ac} **Message:**\nFor the youth camp.\n\n\
             \u{1f64f} Looking forward to partnering with you in God's work!"
        );
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut form = filled();
        form.email = "  ".to_string();
        form.phone = String::new();
        assert_eq!(form.validate(), Err(PartnershipError::MissingField("email")));
    }

    #[test]
    fn test_deep_link() {
        let number = WhatsAppNumber::parse("+27762073299").unwrap_or_else(|e| unreachable!("{e}"));
        let link = filled().deep_link(&number);
        assert!(matches!(
            link.as_deref(),
            Ok(url) if url.starts_with("https://wa.me/27762073299?text=Hi%20Elijah")
        ));

        let empty = PartnershipForm::default().deep_link(&number);
        assert_eq!(empty, Err(PartnershipError::MissingField("name")));
    }

    #[test]
    fn test_every_plan_has_features() {
        for plan in PartnershipPlan::ALL {
            assert!(!plan.features().is_empty());
            assert!(!plan.description().is_empty());
        }
    }
}
