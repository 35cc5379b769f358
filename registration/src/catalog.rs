//! Events and add-ons offered for registration.
//!
//! The catalog is immutable once built. [`Catalog::church`] carries the
//! built-in programme; [`Catalog::from_json`] replaces it with edited content.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Identifier of a catalog event, as used in the `?event=<id>` query parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(u32);

impl EventId {
    /// Creates a new `EventId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an add-on (e.g. `meal-service`)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AddOnId(String);

impl AddOnId {
    /// Creates a new `AddOnId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddOnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an add-on's unit price scales with the registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingBasis {
    /// Unit price times the number of attendees
    PerAttendee,
    /// Unit price times the number of children
    PerChild,
    /// Unit price once
    Flat,
    /// Never priced; contributions go through the donation amount
    Voluntary,
}

impl PricingBasis {
    /// Label shown next to the price
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerAttendee => "per person",
            Self::PerChild => "per child",
            Self::Flat => "once",
            Self::Voluntary => "suggested donation",
        }
    }
}

/// A service or programme that can be registered for
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEvent {
    /// Event id
    pub id: EventId,
    /// Display name
    pub name: String,
    /// Price per attendee (zero for free services)
    pub unit_price: Money,
    /// Previous price shown struck through, if any
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Maximum attendees per registration
    pub capacity: u32,
    /// Human-readable duration
    pub duration_label: String,
    /// Highlights listed on the event card
    #[serde(default)]
    pub features: Vec<String>,
}

impl CatalogEvent {
    /// Whether the event costs nothing
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.unit_price.is_zero()
    }
}

/// An optional extra attached to a registration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    /// Add-on id
    pub id: AddOnId,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Unit price
    pub unit_price: Money,
    /// How the unit price scales
    pub pricing_basis: PricingBasis,
}

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON is malformed
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two events share an id
    #[error("duplicate event id {0}")]
    DuplicateEvent(EventId),

    /// Two add-ons share an id
    #[error("duplicate add-on id {0}")]
    DuplicateAddOn(AddOnId),

    /// An event admits nobody
    #[error("event {0} has zero capacity")]
    ZeroCapacity(EventId),
}

/// The immutable list of events and add-ons
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    events: Vec<CatalogEvent>,
    add_ons: Vec<AddOn>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and zero-capacity events
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if any id repeats or an event has no capacity.
    pub fn new(events: Vec<CatalogEvent>, add_ons: Vec<AddOn>) -> Result<Self, CatalogError> {
        let mut seen_events = HashSet::new();
        for event in &events {
            if !seen_events.insert(event.id) {
                return Err(CatalogError::DuplicateEvent(event.id));
            }
            if event.capacity == 0 {
                return Err(CatalogError::ZeroCapacity(event.id));
            }
        }

        let mut seen_add_ons = HashSet::new();
        for add_on in &add_ons {
            if !seen_add_ons.insert(&add_on.id) {
                return Err(CatalogError::DuplicateAddOn(add_on.id.clone()));
            }
        }

        Ok(Self { events, add_ons })
    }

    /// Parses a catalog from JSON
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON, or any validation
    /// error from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.events, raw.add_ons)
    }

    /// Reads and parses a catalog file
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise as
    /// [`Catalog::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The built-in programme of services
    #[must_use]
    pub fn church() -> Self {
        let events = vec![
            CatalogEvent {
                id: EventId::new(1),
                name: "Sunday Worship Service".to_string(),
                unit_price: Money::ZERO,
                original_price: None,
                capacity: 200,
                duration_label: "2 hours".to_string(),
                features: vec![
                    "Live Worship Music".to_string(),
                    "Sermon by Apostle Elijah".to_string(),
                    "Community Fellowship".to_string(),
                ],
            },
            CatalogEvent {
                id: EventId::new(2),
                name: "Prayer & Healing Service".to_string(),
                unit_price: Money::ZERO,
                original_price: None,
                capacity: 100,
                duration_label: "1.5 hours".to_string(),
                features: vec![
                    "Intercessory Prayer".to_string(),
                    "Healing Ministry".to_string(),
                    "Anointing Service".to_string(),
                ],
            },
            CatalogEvent {
                id: EventId::new(3),
                name: "Bible Study Workshop".to_string(),
                unit_price: Money::from_rand(50),
                original_price: Some(Money::from_rand(75)),
                capacity: 50,
                duration_label: "3 hours".to_string(),
                features: vec![
                    "In-depth Bible Teaching".to_string(),
                    "Group Discussion".to_string(),
                    "Q&A Session".to_string(),
                ],
            },
        ];

        let add_on = |id: &str, name: &str, description: &str, rand: u64, basis| AddOn {
            id: AddOnId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            unit_price: Money::from_rand(rand),
            pricing_basis: basis,
        };

        let add_ons = vec![
            add_on(
                "meal-service",
                "Community Meal",
                "Join us for fellowship dinner after the service",
                25,
                PricingBasis::PerAttendee,
            ),
            add_on(
                "childcare",
                "Children's Ministry",
                "Professional childcare during adult services",
                15,
                PricingBasis::PerChild,
            ),
            add_on(
                "transport",
                "Transportation Service",
                "Pickup and drop-off service for elderly and disabled",
                20,
                PricingBasis::PerAttendee,
            ),
            add_on(
                "materials",
                "Study Materials",
                "Bible study guides and worship resources",
                10,
                PricingBasis::PerAttendee,
            ),
            add_on(
                "donation",
                "Special Donation",
                "Support our ministry work and community outreach",
                0,
                PricingBasis::Voluntary,
            ),
        ];

        Self { events, add_ons }
    }

    /// All events, in display order
    #[must_use]
    pub fn events(&self) -> &[CatalogEvent] {
        &self.events
    }

    /// All add-ons, in display order
    #[must_use]
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Looks up an event
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&CatalogEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Looks up an add-on
    #[must_use]
    pub fn add_on(&self, id: &AddOnId) -> Option<&AddOn> {
        self.add_ons.iter().find(|add_on| &add_on.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::church()
    }
}
