//! Registration Demo
//!
//! Scripted walk through the registration wizard:
//! - Booking page opened with `?event=3` (Bible Study Workshop)
//! - Date, time and attendee details
//! - Add-ons, guest details and a donation
//! - Submission with the simulated processing delay
//! - Order summary, reference code and WhatsApp follow-up link
//!
//! # Usage
//!
//! ```bash
//! SUBMIT_DELAY_MS=500 cargo run --bin demo
//! ```

use anyhow::Context;
use registration::{
    AddOnId, Config, GuestField, PartnershipForm, PartnershipPlan, RegistrationAction,
    RegistrationEnvironment, RegistrationReducer, RegistrationState, Step, summary_lines,
    whatsapp_link,
};
use sanctuary_core::environment::SystemClock;
use sanctuary_runtime::Store;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,registration=debug,sanctuary_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("\n=== Elijah Church of Christ: Event Registration ===\n");

    let config = Config::from_env();
    let catalog = Arc::new(config.catalog().context("loading catalog")?);
    let widget_number = config.whatsapp().context("parsing WHATSAPP_NUMBER")?;
    let partnership_number = config
        .partnership_whatsapp()
        .context("parsing PARTNERSHIP_WHATSAPP_NUMBER")?;

    println!("Services on offer:");
    for event in catalog.events() {
        println!(
            "  {}. {} ({}, up to {}): {}",
            event.id, event.name, event.duration_label, event.capacity, event.unit_price
        );
    }

    let env = RegistrationEnvironment::new(
        Arc::new(SystemClock),
        Arc::clone(&catalog),
        config.submit_delay(),
    );
    let initial = RegistrationState::from_query("?event=3", &catalog);
    let store = Store::new(initial, RegistrationReducer::new(), env);

    let script = [
        RegistrationAction::SetEventDate {
            date: "2026-11-01".to_string(),
        },
        RegistrationAction::SetEventTime {
            time: "09:00".to_string(),
        },
        RegistrationAction::SetAttendeeCount { count: 2 },
        RegistrationAction::SetChildCount { count: 1 },
        RegistrationAction::GoNext,
        RegistrationAction::ToggleAddOn {
            add_on_id: AddOnId::new("meal-service"),
        },
        RegistrationAction::ToggleAddOn {
            add_on_id: AddOnId::new("childcare"),
        },
        RegistrationAction::GoNext,
        RegistrationAction::UpdateGuest {
            field: GuestField::FirstName,
            value: "Thandi".to_string(),
        },
        RegistrationAction::UpdateGuest {
            field: GuestField::LastName,
            value: "Mokoena".to_string(),
        },
        RegistrationAction::UpdateGuest {
            field: GuestField::Email,
            value: "thandi@example.org".to_string(),
        },
        RegistrationAction::UpdateGuest {
            field: GuestField::Phone,
            value: "+27 82 555 0100".to_string(),
        },
        RegistrationAction::GoNext,
        RegistrationAction::SetDonationAmount {
            amount: "100".to_string(),
        },
    ];

    for action in script {
        let _ = store.send(action).await;
    }

    let step = store.state(|s| s.step).await;
    println!("\nNow on {step}");
    if step != Step::Review {
        let blockers = store.state(RegistrationState::blockers).await;
        anyhow::bail!("wizard stopped early on {step}: {blockers:?}");
    }

    println!("\nSubmitting (processing takes {:?})...", config.submit_delay());
    let mut handle = store.send(RegistrationAction::Submit).await;
    tokio::time::timeout(config.submit_delay() + Duration::from_secs(5), handle.wait())
        .await
        .context("registration never confirmed")?;

    let (summary, reference) = store
        .state(|s| (summary_lines(s, &catalog), s.reference().cloned()))
        .await;
    let reference = reference.context("registration has no reference code")?;

    println!("\nRegistration confirmed: {reference}");
    for line in &summary {
        println!("  {line}");
    }

    let follow_up = format!("Hi! I just registered for a service. My reference is {reference}.");
    println!("\nQuestions? {}", whatsapp_link(&widget_number, Some(&follow_up)));

    let pledge = PartnershipForm {
        plan: PartnershipPlan::Monthly,
        name: "Thandi Mokoena".to_string(),
        email: "thandi@example.org".to_string(),
        phone: "+27 82 555 0100".to_string(),
        ..PartnershipForm::default()
    };
    println!("Become a partner: {}", pledge.deep_link(&partnership_number)?);

    println!("\n=== Demo Complete ===");
    Ok(())
}
