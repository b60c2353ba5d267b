//! CLI administration tool for clinic-ratings.
//!
//! Provides commands for inspecting the database, viewing clinic averages
//! and loading demo data without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Row counts and server version
//! cargo run --bin admin -- db info
//!
//! # Clinics with their per-category averages
//! cargo run --bin admin -- stats
//!
//! # Load demo clinics, users and random ratings
//! cargo run --bin admin -- seed --yes
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `AVERAGE_STRATEGY` (optional): `database` or `memory`, used by `stats`

use clinic_ratings::application::services::{ClinicService, RatingService, UserService};
use clinic_ratings::domain::aggregator::AverageStrategy;
use clinic_ratings::domain::entities::{FundingType, NewClinic, NewRating, RatingCategory};
use clinic_ratings::domain::repositories::PageRequest;
use clinic_ratings::infrastructure::persistence::{
    PgClinicRepository, PgRatingRepository, PgUserRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use rand::Rng;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing clinic-ratings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show clinics with their averages
    Stats,

    /// Load demo clinics, users and ratings
    Seed {
        /// Ratings per user and clinic pair
        #[arg(short, long, default_value_t = 1)]
        rounds: u32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Seed { rounds, yes } => handle_seed(&pool, rounds, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Services over the PostgreSQL repositories, sharing one pool.
struct Services {
    clinics: ClinicService<PgClinicRepository, PgRatingRepository>,
    users: UserService<PgUserRepository>,
    ratings: RatingService<PgRatingRepository, PgClinicRepository, PgUserRepository>,
}

impl Services {
    fn new(pool: &PgPool, strategy: AverageStrategy) -> Self {
        let pool = Arc::new(pool.clone());
        let clinic_repo = Arc::new(PgClinicRepository::new(pool.clone()));
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let rating_repo = Arc::new(PgRatingRepository::new(pool));

        Self {
            clinics: ClinicService::new(clinic_repo.clone(), rating_repo.clone(), strategy),
            users: UserService::new(user_repo.clone()),
            ratings: RatingService::new(rating_repo, clinic_repo, user_repo),
        }
    }
}

/// Renders an average with two decimals, or a dash when unrated.
fn format_average(value: Option<f64>) -> ColoredString {
    let Some(v) = value else {
        return "-".bright_black();
    };

    let text = format!("{v:.2}");
    if v >= 4.0 {
        text.as_str().bright_green()
    } else if v >= 2.5 {
        text.as_str().yellow()
    } else {
        text.as_str().red()
    }
}

/// Displays every clinic with its per-category averages.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Clinic averages".bright_blue().bold());
    println!();

    let strategy = match std::env::var("AVERAGE_STRATEGY") {
        Ok(v) => v.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        Err(_) => AverageStrategy::default(),
    };

    let summaries = Services::new(pool, strategy)
        .clinics
        .list_clinics(PageRequest::all())
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if summaries.is_empty() {
        println!("{}", "  No clinics found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<4} {:<32} {:>8} {:>8} {:>8}",
        "ID".bold(),
        "Clinic".bold(),
        "Inst.".bold(),
        "Médicos".bold(),
        "Serv.".bold()
    );

    for summary in &summaries {
        println!(
            "  {:<4} {:<32} {:>8} {:>8} {:>8}",
            summary.clinic.id.to_string().bright_black(),
            summary.clinic.name.cyan(),
            format_average(summary.averages.facilities),
            format_average(summary.averages.medical_staff),
            format_average(summary.averages.service),
        );
    }

    println!();
    println!(
        "  Total: {} (averages computed in {})",
        summaries.len().to_string().bright_white().bold(),
        strategy.as_str()
    );
    println!();

    Ok(())
}

/// One demo clinic per funding type.
fn demo_clinics() -> Vec<NewClinic> {
    let places = [
        ("Hospital Central", "Av. Libertador 1200", "Mendoza", "261 420 0000"),
        ("Clínica del Sol", "San Martín 455", "Córdoba", "351 555 0101"),
        ("Sanatorio Norte", "Belgrano 88", "Salta", "387 431 2200"),
    ];

    places
        .into_iter()
        .zip(FundingType::ALL)
        .map(|((name, address, locality, phone), funding)| NewClinic {
            name: name.to_string(),
            funding,
            address: address.to_string(),
            locality: locality.to_string(),
            phone: phone.to_string(),
            website: None,
            image: None,
        })
        .collect()
}

/// Loads demo data with a confirmation prompt.
///
/// Each demo user rates each demo clinic once per round in every category,
/// with values drawn uniformly from 1 to 5.
async fn handle_seed(pool: &PgPool, rounds: u32, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed demo data".bright_blue().bold());
    println!();

    let clinics = demo_clinics();
    let handles = ["ana", "bruno", "carla"];

    println!("  Clinics: {}", clinics.len().to_string().cyan());
    println!("  Users:   {}", handles.len().to_string().cyan());
    println!(
        "  Ratings: {}",
        (clinics.len() * handles.len() * RatingCategory::ALL.len() * rounds as usize)
            .to_string()
            .cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert demo data?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let services = Services::new(pool, AverageStrategy::default());

    let mut clinic_ids = Vec::with_capacity(clinics.len());
    for new_clinic in clinics {
        let clinic = services
            .clinics
            .create_clinic(new_clinic)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create clinic: {}", e))?;
        clinic_ids.push(clinic.id);
    }

    let mut user_ids = Vec::with_capacity(handles.len());
    for handle in handles {
        let user = services
            .users
            .create_user(handle.to_string(), "demo")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create user '{}': {}", handle, e))?;
        user_ids.push(user.id);
    }

    let mut rng = rand::rng();
    let mut created = 0usize;
    for _ in 0..rounds {
        for &clinic_id in &clinic_ids {
            for &user_id in &user_ids {
                for category in RatingCategory::ALL {
                    services
                        .ratings
                        .create_rating(NewRating {
                            category,
                            value: rng.random_range(1..=5),
                            clinic_id,
                            user_id,
                        })
                        .await
                        .map_err(|e| anyhow::anyhow!("Failed to create rating: {}", e))?;
                    created += 1;
                }
            }
        }
    }

    println!();
    println!(
        "{} {} ratings",
        "✅ Demo data loaded:".green().bold(),
        created.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());

            let services = Services::new(pool, AverageStrategy::default());
            let counts = [
                ("clinics", services.clinics.count_clinics().await),
                ("users", services.users.count_users().await),
                ("ratings", services.ratings.count_ratings().await),
            ];

            for (table, count) in counts {
                let count = count.map_err(|e| anyhow::anyhow!("Failed to count {table}: {e}"))?;

                println!(
                    "  {:<10} {}",
                    format!("{table}:"),
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_clinics_cover_every_funding_type() {
        let clinics = demo_clinics();
        let funding: Vec<FundingType> = clinics.iter().map(|c| c.funding).collect();

        assert_eq!(funding, FundingType::ALL);
    }
}
