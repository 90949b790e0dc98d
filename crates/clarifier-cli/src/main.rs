use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clarifier_cli::commands::{self, ProductivityAction};
use clarifier_cli::config;
use clarifier_core::models::code_group::CodeGroup;
use clarifier_productivity::sheet::{ProductivitySheet, STORAGE_KEY};
use clarifier_storage::state::load_state;
use clarifier_storage::store::LocalStore;
use eyre::Result;

#[derive(Parser)]
#[command(name = "clarifier")]
#[command(about = "Speech therapy clarification orders and productivity tracking")]
struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a clarification order from diagnosis selections
    Order {
        /// Selections such as "R13.12 Dysphagia, oropharyngeal phase"
        selections: Vec<String>,
        /// Long-term-goal diet target (repeatable)
        #[arg(long = "ltg", value_name = "TARGET")]
        diet_targets: Vec<String>,
        /// Read selections and diet targets from a JSON request file
        #[arg(long, value_name = "FILE")]
        request: Option<PathBuf>,
        /// Print the order and its length as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the diagnosis code groups
    Codes {
        /// Only this group, e.g. "dysphonia" or "other-speech"
        group: Option<String>,
    },
    /// Show or edit the productivity sheet
    Productivity {
        #[command(subcommand)]
        action: Option<ProductivityCommand>,
    },
    /// Compute the clock-out time
    ClockOut {
        /// Clock-in time, HH:MM
        clock_in: String,
        /// Work hours (defaults to the productivity sheet)
        #[arg(long)]
        hours: Option<f64>,
        /// Work minutes (defaults to the productivity sheet)
        #[arg(long)]
        minutes: Option<f64>,
        /// Lunch break in minutes (defaults to the config)
        #[arg(long)]
        lunch: Option<f64>,
    },
    /// Show the current time and date
    Now,
    /// Show or change the configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommand>,
    },
}

#[derive(Subcommand)]
enum ProductivityCommand {
    /// Print the sheet and totals
    Show,
    /// Record minutes for a row (1-12)
    Log {
        row: usize,
        minutes: String,
        #[arg(long)]
        patient: Option<String>,
    },
    /// Set scheduled work time
    Hours { hours: u32, minutes: u32 },
    /// Clear the given rows, or every row
    Clear { rows: Vec<usize> },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the config
    Show,
    /// Update config values
    Set {
        /// Default lunch break in minutes
        #[arg(long)]
        lunch: Option<u32>,
        /// Directory holding store.json
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config_path = config::config_path()?;
    let mut config = config::load_or_default(&config_path)?;

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Order {
            selections,
            diet_targets,
            request,
            json,
        } => {
            let request = commands::build_request(request.as_deref(), selections, diet_targets)?;
            let report = commands::order_report(&request);
            commands::write_order(&mut stdout, &mut std::io::stderr(), &report, json)?;
        }
        Commands::Codes { group } => {
            let group = group.map(|g| g.parse::<CodeGroup>()).transpose()?;
            commands::write_codes(&mut stdout, group)?;
        }
        Commands::Productivity { action } => {
            let action = match action.unwrap_or(ProductivityCommand::Show) {
                ProductivityCommand::Show => ProductivityAction::Show,
                ProductivityCommand::Log {
                    row,
                    minutes,
                    patient,
                } => ProductivityAction::Log {
                    row,
                    minutes,
                    patient,
                },
                ProductivityCommand::Hours { hours, minutes } => {
                    ProductivityAction::Hours { hours, minutes }
                }
                ProductivityCommand::Clear { rows } => ProductivityAction::Clear { rows },
            };
            let mut store = LocalStore::open_in(&config.resolve_data_dir()?)?;
            commands::run_productivity(&mut stdout, &mut store, action)?;
        }
        Commands::ClockOut {
            clock_in,
            hours,
            minutes,
            lunch,
        } => {
            let store = LocalStore::open_in(&config.resolve_data_dir()?)?;
            let sheet: ProductivitySheet = load_state(&store, STORAGE_KEY);
            commands::write_clock_out(
                &mut stdout,
                &clock_in,
                hours,
                minutes,
                lunch,
                &sheet,
                &config,
            )?;
        }
        Commands::Now => commands::write_now(&mut stdout, &jiff::Zoned::now())?,
        Commands::Config { action } => match action.unwrap_or(ConfigCommand::Show) {
            ConfigCommand::Show => commands::write_config(&mut stdout, &config_path, &config)?,
            ConfigCommand::Set { lunch, data_dir } => {
                if let Some(lunch) = lunch {
                    config.lunch_break_minutes = lunch;
                }
                if let Some(dir) = data_dir {
                    config.data_dir = Some(dir);
                }
                config::save_config_to(&config_path, &config)?;
                commands::write_config(&mut stdout, &config_path, &config)?;
            }
        },
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
