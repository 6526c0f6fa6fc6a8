use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use contactbook::cli::Settings;
use contactbook::Result;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Contact book with validated names and phone numbers", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: <config dir>/contactbook/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Contacts file, overriding the configured storage path
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Back up a malformed contacts file and start with an empty list
    #[arg(long, global = true)]
    reset_corrupt: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new contact
    Add {
        /// Full name, e.g. "Jane Doe"
        name: String,

        /// Phone number, e.g. 04141234567
        phone: String,
    },

    /// List all contacts
    List {
        /// Output the raw snapshot as JSON
        #[arg(short, long, conflicts_with = "html")]
        json: bool,

        /// Output list markup
        #[arg(long)]
        html: bool,
    },

    /// Edit a contact in place
    Edit {
        /// Contact ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New phone
        #[arg(short, long)]
        phone: Option<String>,
    },

    /// Remove a contact
    Remove {
        /// Contact ID
        id: String,
    },

    /// Check a name and/or phone without saving
    Check {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        phone: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("contactbook={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings {
        config: cli.config,
        store: cli.store,
        reset_corrupt: cli.reset_corrupt,
    };

    match cli.command {
        Commands::Add { name, phone } => {
            contactbook::cli::add::run(&settings, &name, &phone)?;
        }

        Commands::List { json, html } => {
            contactbook::cli::list::run(&settings, json, html)?;
        }

        Commands::Edit { id, name, phone } => {
            contactbook::cli::edit::run(&settings, &id, name.as_deref(), phone.as_deref())?;
        }

        Commands::Remove { id } => {
            contactbook::cli::remove::run(&settings, &id)?;
        }

        Commands::Check { name, phone } => {
            contactbook::cli::check::run(name.as_deref(), phone.as_deref())?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "contactbook", &mut io::stdout());
        }
    }

    Ok(())
}
