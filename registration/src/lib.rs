//! # Registration
//!
//! Event registration for the church website: a six-step wizard that builds a
//! draft (event, date and time, attendees, add-ons, guest details, donation),
//! prices it, and confirms it with a reference code after a simulated
//! processing delay.
//!
//! The wizard is a [`Reducer`](sanctuary_core::reducer::Reducer):
//!
//! ```ignore
//! let store = Store::new(RegistrationState::new(), RegistrationReducer::new(), env);
//! store.send(RegistrationAction::SelectEvent { event_id: EventId::new(3) }).await;
//! let total = store.state(|s| compute_total(s, &catalog).total).await;
//! ```
//!
//! Alongside it live the smaller pieces of the site that carry logic:
//! WhatsApp and email [`deep_link`]s, the [`partnership`] pledge message, and
//! the [`contact`] form.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod deep_link;
pub mod draft;
pub mod money;
pub mod partnership;
pub mod pricing;
pub mod reducer;
pub mod reference;
pub mod step;

pub use catalog::{AddOn, AddOnId, Catalog, CatalogError, CatalogEvent, EventId, PricingBasis};
pub use config::Config;
pub use contact::{
    ContactAction, ContactEnvironment, ContactField, ContactReducer, ContactState, ContactStatus,
    Ministry,
};
pub use deep_link::{DeepLinkError, WhatsAppNumber, mailto_link, whatsapp_link};
pub use draft::{GuestContact, GuestField, RegistrationState, Requirement, SubmissionStatus};
pub use money::Money;
pub use partnership::{PartnershipError, PartnershipForm, PartnershipPlan};
pub use pricing::{PROCESSING_FEE, PriceBreakdown, compute_total, summary_lines};
pub use reducer::{RegistrationAction, RegistrationEnvironment, RegistrationReducer};
pub use reference::ReferenceCode;
pub use step::Step;
