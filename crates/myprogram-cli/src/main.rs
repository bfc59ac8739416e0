//! MyProgram CLI - a command-line application starter template

use clap::{CommandFactory, Parser, Subcommand};
use myprogram_core::config::AppConfig;
use myprogram_core::utils::{current_date, format_greeting};
use myprogram_core::{APP_NAME, VERSION};
use serde_json::json;
use tracing::{debug, info};

const DESCRIPTION: &str = "A simple Rust application starter template.";

const FEATURES: [&str; 4] = [
    "Command-line interface with clap",
    "Modular workspace structure",
    "Basic testing setup",
    "Configuration management",
];

#[derive(Parser)]
#[command(name = "myprogram")]
#[command(
    version = VERSION,
    about = "MyProgram - A simple command-line application starter template",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Greet someone with a friendly message
    Greet {
        /// Name to greet
        #[arg(short, long, default_value = "World")]
        name: String,
    },

    /// Display information about the application
    Info,

    /// Start a daily programming session
    Daily,

    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the loaded configuration
    Show,
    /// Show the config directory path, creating it if missing
    Path,
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let directive = format!("myprogram={}", config.tracing_directive());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load();
    init_tracing(&config)?;
    debug!(%config, "starting");

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Greet { name }) => cmd_greet(&name, cli.format),
        Some(Commands::Info) => cmd_info(cli.format),
        Some(Commands::Daily) => cmd_daily(cli.format),
        Some(Commands::Config { action }) => cmd_config(&config, action, cli.format),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

fn cmd_greet(name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let message = format_greeting(name);
    info!(name, "greeting");

    match format {
        OutputFormat::Text => println!("{}", message),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "message": message }))?)
        }
    }
    Ok(())
}

fn cmd_info(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let title = format!("{} v{}", APP_NAME, VERSION);
            println!();
            println!("{}", title);
            println!("====================");
            println!("{}", DESCRIPTION);
            println!();
            println!("This is a basic CLI application that demonstrates:");
            for feature in FEATURES {
                println!("- {}", feature);
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "app_name": APP_NAME,
                "version": VERSION,
                "description": DESCRIPTION,
                "features": FEATURES,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn cmd_daily(format: OutputFormat) -> anyhow::Result<()> {
    let today = current_date();

    match format {
        OutputFormat::Text => {
            println!("Welcome to your daily programming session!");
            println!("Today's date: {}", today);
            println!("Let's code something amazing!");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json!({ "date": today }))?);
        }
    }
    Ok(())
}

fn cmd_config(
    config: &AppConfig,
    action: ConfigAction,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => match format {
            OutputFormat::Text => {
                println!("{}", config);
                println!("  Log level: {}", config.log_level());
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        },
        ConfigAction::Path => {
            let dir = config.config_dir().map_err(|e| match e.suggestion() {
                Some(hint) => anyhow::anyhow!("[{}] {}\n  Hint: {}", e.code(), e, hint),
                None => anyhow::anyhow!("[{}] {}", e.code(), e),
            })?;
            match format {
                OutputFormat::Text => println!("{}", dir.display()),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({ "path": dir }))?)
                }
            }
        }
    }
    Ok(())
}
