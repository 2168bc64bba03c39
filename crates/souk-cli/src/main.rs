mod cmd;
mod output;
mod tui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "souk",
    about = "Browse a marketplace of plugins, agents, commands, and hooks",
    version,
    propagate_version = true
)]
struct Cli {
    /// Registry to browse: a URL or a path to a JSON file
    #[arg(long, global = true, env = "SOUK_REGISTRY")]
    registry: Option<String>,

    /// Config file (default: ~/.souk/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the registry interactively
    Browse,

    /// List registry items, optionally narrowed to one kind
    List {
        /// Kind to list: plugins, agents, commands, or hooks (omit for all)
        kind: Option<String>,

        /// Keep only items whose name, description, or tags contain this text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Sort order: none, name, or category
        #[arg(long)]
        sort: Option<String>,
    },

    /// Show one registry item in full
    Show {
        /// Item kind: plugin, agent, command, or hook
        kind: String,

        /// Item id
        id: String,
    },

    /// Print install commands for a selection of items
    Generate {
        /// Plugin id to install (repeatable)
        #[arg(long = "plugin", value_name = "ID")]
        plugins: Vec<String>,

        /// Agent id to install (repeatable; agents batch onto one line)
        #[arg(long = "agent", value_name = "ID")]
        agents: Vec<String>,

        /// Command id to install (repeatable)
        #[arg(long = "command", value_name = "ID")]
        commands: Vec<String>,

        /// Hook id to install (repeatable)
        #[arg(long = "hook", value_name = "ID")]
        hooks: Vec<String>,
    },

    /// Fetch the registry without fallback and report what it contains
    Fetch {
        /// Write the fetched registry JSON to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // The browser owns the terminal, so only hard errors may reach stderr.
    let default_level = match &cli.command {
        Commands::Browse => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let registry_spec = cli.registry.as_deref();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Commands::Browse => cmd::browse::run(registry_spec, config_path),
        Commands::List { kind, search, sort } => cmd::list::run(
            registry_spec,
            config_path,
            kind.as_deref(),
            search.as_deref(),
            sort.as_deref(),
            cli.json,
        ),
        Commands::Show { kind, id } => {
            cmd::show::run(registry_spec, config_path, &kind, &id, cli.json)
        }
        Commands::Generate {
            plugins,
            agents,
            commands,
            hooks,
        } => cmd::generate::run(&plugins, &agents, &commands, &hooks),
        Commands::Fetch { out } => cmd::fetch::run(registry_spec, config_path, out.as_deref(), cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
