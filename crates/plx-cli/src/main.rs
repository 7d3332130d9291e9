use clap::{Parser, Subcommand};
use plx::{
    commands::{
        self,
        config::{handle_config, ConfigAction},
    },
    context::PlxContext,
    errors::CommandError,
    GlobalOpts,
};

#[derive(Parser)]
#[command(name = "plx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Plugin receipt manager",
    long_about = "plx records which plugin manifest was used for each installation, \
                  so installed plugins can be listed, verified and removed without the index."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List installed plugins
    List,
    /// Show whether a plugin is installed
    Status { plugin: String },
    /// Print the stored receipt of an installed plugin
    Show {
        plugin: String,
        /// Print as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Record the index manifest of a plugin as installed for this host
    Record { plugin: String },
    /// Remove an installed plugin and its receipt
    Remove { plugin: String },
    /// Compare a plugin's receipt with the current index
    Verify { plugin: String },
    /// Configure plx
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn run(command: Commands, global: &GlobalOpts) -> Result<(), CommandError> {
    let ctx = PlxContext::load()?;

    match command {
        Commands::List => commands::list_plugins(&ctx, global),
        Commands::Status { plugin } => commands::plugin_status(&ctx, &plugin),
        Commands::Show { plugin, json } => commands::show_receipt(&ctx, &plugin, json),
        Commands::Record { plugin } => commands::record_plugin(&ctx, &plugin),
        Commands::Remove { plugin } => commands::remove_plugin(&ctx, &plugin),
        Commands::Verify { plugin } => commands::verify_plugin(&ctx, &plugin),
        Commands::Config { action } => handle_config(action, ctx, global),
    }
}

fn main() {
    let cli = Cli::parse();

    let log_file = plx_config::root_dir()
        .ok()
        .map(|root| plx_config::Paths::new(root).log_file());
    if let Err(e) = plx_logger::init_with_verbosity(cli.global.verbosity_level(), log_file.as_deref())
    {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(cli.command, &cli.global) {
        plx_logger::error(&e.to_string());
        std::process::exit(1);
    }
}
