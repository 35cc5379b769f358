//! Registration totals.
//!
//! ```text
//! base     = event price × attendees            (0 with no event)
//! add-ons  = Σ per attendee × attendees | per child × children | flat | voluntary → 0
//! subtotal = base + add-ons + donation
//! fee      = R5 if subtotal > 0 else 0
//! total    = subtotal + fee
//! ```
//!
//! Totals are always recomputed from the draft; nothing is cached on it.

use crate::catalog::{AddOn, Catalog, PricingBasis};
use crate::draft::RegistrationState;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Fixed surcharge applied to any non-zero subtotal
pub const PROCESSING_FEE: Money = Money::from_rand(5);

/// One priced add-on in the breakdown
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnLine {
    /// Add-on name
    pub name: String,
    /// Quantity the unit price was multiplied by (1 for flat, 0 for voluntary)
    pub quantity: u32,
    /// Line amount
    pub amount: Money,
}

/// Every term of the total
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Event price × attendees
    pub base: Money,
    /// Sum of add-on lines
    pub add_ons: Money,
    /// Per-add-on amounts, in catalog order
    pub add_on_lines: Vec<AddOnLine>,
    /// Voluntary donation
    pub donation: Money,
    /// `base + add_ons + donation`
    pub subtotal: Money,
    /// [`PROCESSING_FEE`] when the subtotal is positive
    pub processing_fee: Money,
    /// `subtotal + processing_fee`
    pub total: Money,
}

/// Quantity an add-on's unit price is multiplied by
#[must_use]
pub const fn add_on_quantity(basis: PricingBasis, attendees: u32, children: u32) -> u32 {
    match basis {
        PricingBasis::PerAttendee => attendees,
        PricingBasis::PerChild => children,
        PricingBasis::Flat => 1,
        PricingBasis::Voluntary => 0,
    }
}

fn price_add_on(add_on: &AddOn, attendees: u32, children: u32) -> AddOnLine {
    let quantity = add_on_quantity(add_on.pricing_basis, attendees, children);
    AddOnLine {
        name: add_on.name.clone(),
        quantity,
        amount: add_on.unit_price.times(quantity),
    }
}

/// Computes the total owed for a draft
///
/// Selected ids missing from the catalog contribute nothing.
#[must_use]
pub fn compute_total(state: &RegistrationState, catalog: &Catalog) -> PriceBreakdown {
    let attendees = state.details.attendees;
    let children = state.details.children;

    let base = state
        .event_id
        .and_then(|id| catalog.event(id))
        .map_or(Money::ZERO, |event| event.unit_price.times(attendees));

    let add_on_lines: Vec<AddOnLine> = catalog
        .add_ons()
        .iter()
        .filter(|add_on| state.add_ons.contains(&add_on.id))
        .map(|add_on| price_add_on(add_on, attendees, children))
        .collect();
    let add_ons: Money = add_on_lines.iter().map(|line| line.amount).sum();

    let subtotal = base + add_ons + state.donation;
    let processing_fee = if subtotal.is_zero() {
        Money::ZERO
    } else {
        PROCESSING_FEE
    };

    PriceBreakdown {
        base,
        add_ons,
        add_on_lines,
        donation: state.donation,
        subtotal,
        processing_fee,
        total: subtotal + processing_fee,
    }
}

/// Plain-text summary for the review and confirmation views
#[must_use]
pub fn summary_lines(state: &RegistrationState, catalog: &Catalog) -> Vec<String> {
    let breakdown = compute_total(state, catalog);
    let mut lines = Vec::new();

    if let Some(event) = state.event_id.and_then(|id| catalog.event(id)) {
        lines.push(format!("Event: {} ({})", event.name, event.duration_label));
    }
    if let (Some(date), Some(time)) = (state.details.date, state.details.time) {
        lines.push(format!(
            "Date & Time: {} at {}",
            date.format("%Y-%m-%d"),
            time.format("%H:%M")
        ));
    }
    lines.push(format!("Attendees: {}", state.details.attendees));
    if state.details.children > 0 {
        lines.push(format!("Children: {}", state.details.children));
    }
    lines.push(format!("Event cost: {}", breakdown.base));
    for line in &breakdown.add_on_lines {
        lines.push(format!("{} x{}: {}", line.name, line.quantity, line.amount));
    }
    if !breakdown.donation.is_zero() {
        lines.push(format!("Donation: {}", breakdown.donation));
    }
    if !breakdown.processing_fee.is_zero() {
        lines.push(format!("Processing fee: {}", breakdown.processing_fee));
    }
    lines.push(format!("Total: {}", breakdown.total));
    lines
}
