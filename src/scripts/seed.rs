use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use storefront::config::AppConfig;
use storefront::seed::{AdminCredentials, ConsoleProgress, Faker, SeedOptions};
use storefront::store::{MemoryStore, PostgresStore, Store};
use storefront::{init_logging, run_seed};

/// Populate the storefront database with demo users, brands, categories and products
#[derive(Debug, Parser)]
#[command(name = "seed", long_about = None)]
struct Args {
    /// Email for the seeded admin account (used together with PASSWORD)
    email: Option<String>,

    /// Password for the seeded admin account
    password: Option<String>,

    /// Seed the random generator for reproducible catalogs
    #[arg(long, env = "SEED_RNG_SEED")]
    rng_seed: Option<u64>,

    /// Run against an in-memory store instead of PostgreSQL
    #[arg(long)]
    memory: bool,
}

impl Args {
    fn admin_credentials(&self) -> Option<AdminCredentials> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => Some(AdminCredentials {
                email: email.clone(),
                password: password.clone(),
            }),
            (None, None) => None,
            _ => {
                log::warn!("Both EMAIL and PASSWORD are required to override the admin account; using defaults");
                None
            }
        }
    }
}

async fn seed_with<S: Store>(store: &S, options: &SeedOptions, faker: &mut Faker) -> ExitCode {
    match run_seed(store, options, faker, &ConsoleProgress).await {
        Ok(report) => {
            log::info!("{} records created", report.records_created());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = AppConfig::load()?;
    let options = SeedOptions {
        counts: config.seed.clone(),
        admin_credentials: args.admin_credentials(),
    };
    let mut faker = match args.rng_seed {
        Some(seed) => Faker::from_seed(seed),
        None => Faker::new(),
    };

    if args.memory {
        let store = MemoryStore::new();
        return Ok(seed_with(&store, &options, &mut faker).await);
    }

    let store = PostgresStore::new(&config.database_url(), config.max_connections()).await?;
    store.migrate().await?;
    Ok(seed_with(&store, &options, &mut faker).await)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error initializing database: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_positionals_override_admin() {
        let args = Args::try_parse_from(["seed", "a@b.c", "pw"]).unwrap();

        assert_eq!(
            args.admin_credentials(),
            Some(AdminCredentials {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            })
        );
    }

    #[test]
    fn test_email_alone_is_ignored() {
        let args = Args::try_parse_from(["seed", "a@b.c"]).unwrap();

        assert_eq!(args.email.as_deref(), Some("a@b.c"));
        assert_eq!(args.admin_credentials(), None);
    }

    #[test]
    fn test_no_positionals_keep_defaults() {
        let args = Args::try_parse_from(["seed"]).unwrap();

        assert_eq!(args.admin_credentials(), None);
        assert!(!args.memory);
    }

    #[test]
    fn test_flags_parse() {
        let args = Args::try_parse_from(["seed", "--memory", "--rng-seed", "42"]).unwrap();

        assert!(args.memory);
        assert_eq!(args.rng_seed, Some(42));
        assert_eq!(args.admin_credentials(), None);
    }
}
