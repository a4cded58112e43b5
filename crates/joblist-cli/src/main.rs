//! joblist: job-board operator CLI
//!
//! Commands:
//!   credential derive   - derive a storable salt/hash pair from a password
//!   credential verify   - check a password against stored salt/hash values
//!   config show         - display the active configuration
//!
//! `credential derive` is used to seed admin accounts; `credential verify`
//! helps debug stored credentials without touching the user store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::path::{Path, PathBuf};
use tracing::warn;

use joblist_core::config::JoblistConfig;
use joblist_credential::{derive_credential, verify_credential, Pbkdf2Params, PBKDF2_ITERATIONS};

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "joblist",
    version,
    about = "joblist operator tool",
    long_about = "joblist: derive and verify password credentials, inspect configuration"
)]
struct Cli {
    /// Path to joblist.toml configuration file
    #[arg(long, short = 'c', env = "JOBLIST_CONFIG", default_value = "/etc/joblist/config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides config
    #[arg(long, env = "JOBLIST_LOG")]
    log: Option<String>,

    /// Log format ("json" or "text"); overrides config
    #[arg(long, env = "JOBLIST_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Password credential operations
    Credential {
        #[command(subcommand)]
        action: CredentialAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum CredentialAction {
    /// Prompt for a password and print the derived salt/hash pair as JSON
    Derive {
        /// PBKDF2 iteration count (overrides config)
        #[arg(long)]
        iterations: Option<u32>,
    },

    /// Prompt for a password and check it against stored hex values
    Verify {
        /// Stored salt (32 lowercase hex chars)
        #[arg(long)]
        salt: String,
        /// Stored derived key (64 lowercase hex chars)
        #[arg(long)]
        hash: String,
        /// PBKDF2 iteration count (overrides config)
        #[arg(long)]
        iterations: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the active configuration (merged defaults + config file)
    Show,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config).await?;

    let level = cli.log.as_deref().unwrap_or(&config.log.level);
    let format = cli.log_format.as_deref().unwrap_or(&config.log.format);
    init_logging(level, format);

    match cli.command {
        Commands::Credential { action: CredentialAction::Derive { iterations } } => {
            cmd_credential_derive(params(&config, iterations))
        }
        Commands::Credential { action: CredentialAction::Verify { salt, hash, iterations } } => {
            cmd_credential_verify(&salt, &hash, params(&config, iterations))
        }
        Commands::Config { action: ConfigAction::Show } => cmd_config_show(&config, &cli.config),
    }
}

fn params(config: &JoblistConfig, override_iterations: Option<u32>) -> Pbkdf2Params {
    let iterations = override_iterations.unwrap_or(config.auth.pbkdf2_iterations);
    if iterations < PBKDF2_ITERATIONS {
        warn!(
            iterations,
            default = PBKDF2_ITERATIONS,
            "iteration count below the production default; credentials derived \
             with it are weaker and will not verify under default parameters"
        );
    }
    Pbkdf2Params { iterations }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn cmd_credential_derive(params: Pbkdf2Params) -> Result<()> {
    let password = prompt_password()?;
    let credential =
        derive_credential(&password, &params).context("deriving credential")?;

    println!("{}", serde_json::to_string_pretty(&credential)?);
    Ok(())
}

fn cmd_credential_verify(salt: &str, hash: &str, params: Pbkdf2Params) -> Result<()> {
    let password = prompt_password()?;
    let verified =
        verify_credential(&password, salt, hash, &params).context("verifying credential")?;

    if verified {
        println!("verified");
        Ok(())
    } else {
        println!("not verified");
        std::process::exit(1);
    }
}

fn cmd_config_show(config: &JoblistConfig, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("# Configuration from: {}", config_path.display());
    } else {
        println!("# Configuration: defaults (no file at {})", config_path.display());
    }
    println!();
    let rendered = toml::to_string_pretty(config).context("serializing config to TOML")?;
    print!("{rendered}");
    Ok(())
}

fn prompt_password() -> Result<SecretString> {
    let password = rpassword::prompt_password("Password: ").context("reading password")?;
    if password.is_empty() {
        anyhow::bail!("password must not be empty");
    }
    Ok(SecretString::from(password))
}

// ── Config loading ────────────────────────────────────────────────────────────

async fn load_config(path: &Path) -> Result<JoblistConfig> {
    if path.exists() {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading config: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config: {}", path.display()))
    } else {
        Ok(JoblistConfig::default())
    }
}

fn init_logging(level: &str, format: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}
