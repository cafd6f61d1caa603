//! directory-cli — demo front end for the mock user directory.
//!
//! Every command runs against synthetic data or a fresh in-memory store;
//! nothing is persisted across runs. Results go to stdout as JSON, logs to
//! stderr.
//!
//! ```bash
//! directory-cli list --limit 3 --offset 5
//! directory-cli get abc
//! directory-cli create Alice alice@example.com
//! directory-cli validate '{"name": "a", "email": "b"}'
//! RUST_LOG=debug directory-cli import '{"id": "u1", "name": "A", "email": "a@x"}' --lookup u1
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.

mod config;

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use user_directory::adapters::memory_repo::InMemoryUserStore;
use user_directory::service::UserService;
use user_directory::users::{self, DEFAULT_OFFSET};
use user_directory::validate::validate_value;
use user_directory::UserRecord;

#[derive(Parser, Debug)]
#[command(name = "directory-cli", version, about = "Mock user directory demo")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List synthetic users.
    List {
        /// Number of users to generate (default: DIRECTORY_DEFAULT_LIMIT).
        #[arg(long)]
        limit: Option<usize>,
        /// First generated id.
        #[arg(long, default_value_t = DEFAULT_OFFSET)]
        offset: usize,
    },
    /// Look up a user by id ("not_found" always misses).
    Get { id: String },
    /// Create a user; the id is always "usr_new".
    Create { name: String, email: String },
    /// Check that a JSON object carries "name" and "email".
    Validate { json: String },
    /// Load JSON user objects into an in-memory store.
    Import {
        /// One JSON object per argument.
        #[arg(required = true)]
        records: Vec<String>,
        /// Id to look up after importing.
        #[arg(long)]
        lookup: Option<String>,
    },
    /// Print the library name and version.
    About,
}

fn main() {
    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };
    init_tracing(&cfg);

    let cli = Cli::parse();
    if let Err(msg) = run(cli.command, &cfg) {
        error!(%msg, "command failed");
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}

fn run(command: Command, cfg: &config::Config) -> Result<(), String> {
    match command {
        Command::List { limit, offset } => {
            let limit = cfg.resolve_limit(limit)?;
            print_json(&users::get_users(limit, offset))
        }
        Command::Get { id } => match users::get_user_by_id(&id) {
            Some(user) => print_json(&user),
            None => Err("not found".into()),
        },
        Command::Create { name, email } => print_json(&users::post_create_user(&name, &email)),
        Command::Validate { json } => {
            let value: serde_json::Value =
                serde_json::from_str(&json).map_err(|e| format!("invalid json: {}", e))?;
            if validate_value(&value) {
                println!("valid");
                Ok(())
            } else {
                println!("invalid");
                Err("input is missing name or email".into())
            }
        }
        Command::Import { records, lookup } => {
            let mut svc = UserService::new(InMemoryUserStore::new());
            for raw in &records {
                let value: serde_json::Value =
                    serde_json::from_str(raw).map_err(|e| format!("invalid json: {}", e))?;
                svc.import(&value).map_err(|e| format!("import failed: {}", e))?;
            }
            let found = lookup.as_deref().map(|id| (id, svc.get_user(id)));
            let store = svc.into_inner();
            let summary = ImportSummary::of(&store);
            info!(
                count = summary.users.len(),
                without_email = summary.without_email,
                "import complete"
            );
            println!("imported {} user(s)", summary.users.len());
            print_json(&summary.users)?;
            match found {
                Some((_, Some(user))) => print_json(&user),
                Some((id, None)) => Err(format!("{} not found after import", id)),
                None => Ok(()),
            }
        }
        Command::About => {
            println!("{}", user_directory::about());
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value).map_err(|e| format!("encode failed: {}", e))?;
    println!("{}", out);
    Ok(())
}

/// Store contents after `import`, in id order.
struct ImportSummary<'a> {
    users: Vec<&'a UserRecord>,
    without_email: usize,
}

impl<'a> ImportSummary<'a> {
    fn of(store: &'a InMemoryUserStore) -> Self {
        let users: Vec<&UserRecord> = store.records().collect();
        let without_email = users.iter().filter(|u| !u.has_email()).count();
        Self {
            users,
            without_email,
        }
    }
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries command output, so logs always go to stderr.
    let base = fmt::layer().with_target(true).with_writer(std::io::stderr);
    let output = match cfg.log_format {
        config::LogFormat::Json => base.json().with_timer(fmt::time::SystemTime).boxed(),
        config::LogFormat::Pretty => base.pretty().boxed(),
    };

    tracing_subscriber::registry()
        .with(output)
        .with(env_filter)
        .init();
}
