//! Utility to export stored leads as JSON for offline review.
//!
//! Usage: `cargo run --bin export_leads [status]`, where the optional
//! argument keeps only leads in that pipeline status.

use dotenvy::dotenv;
use nextgen_leads_api::models::LeadStatus;
use nextgen_leads_api::store::LeadStore;
use sqlx::postgres::PgPoolOptions;
use std::env;

/// Main entry point for the export utility.
///
/// Connects to the database, fetches every lead (newest first), optionally
/// filters by status, and prints the result as pretty JSON on stdout.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Optional status filter from the command line
    let status_filter = match env::args().nth(1) {
        Some(arg) => match LeadStatus::parse(&arg) {
            Some(status) => Some(status),
            None => {
                eprintln!(
                    "Unknown status {:?}. Expected one of: new, contacted, qualified, converted, lost",
                    arg
                );
                std::process::exit(2);
            }
        },
        None => None,
    };

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    let store = LeadStore::new(pool);
    let mut leads = store.list_all().await?;

    if let Some(status) = status_filter {
        leads.retain(|lead| lead.status == status);
    }

    tracing::info!("Exporting {} leads", leads.len());
    println!("{}", serde_json::to_string_pretty(&leads)?);

    Ok(())
}
