use clap::Subcommand;
use colored::Colorize;
use plx_config::config::KEYS;

use crate::context::PlxContext;
use crate::errors::CommandError;
use crate::GlobalOpts;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the configuration and the resolved directories
    Show,
    /// Print the value of a config key
    Get { key: String },
    /// Set a config key
    Set { key: String, value: String },
    /// Print the path of the config file
    Path,
}

pub fn handle_config(
    action: ConfigAction,
    mut ctx: PlxContext,
    opts: &GlobalOpts,
) -> Result<(), CommandError> {
    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold().green());
            if ctx.config.is_empty() {
                if opts.verbosity_level() > 0 {
                    println!("  {}", "(empty)".yellow());
                }
            } else {
                for (key, value) in ctx.config.values_iter() {
                    println!("  {}: {}", key.cyan(), value);
                }
            }
            println!("{}", "Directories:".bold().green());
            println!("  {}: {}", "root".cyan(), ctx.paths.root.display());
            println!("  {}: {}", "index".cyan(), ctx.paths.index.display());
            println!("  {}: {}", "receipts".cyan(), ctx.paths.receipts.display());
            println!("  {}: {}", "store".cyan(), ctx.paths.store.display());
        }
        ConfigAction::Get { key } => match ctx.config.get(&key)? {
            Some(value) => println!("{}", value),
            None => {
                if opts.verbosity_level() > 0 {
                    println!("{}", "(unset)".yellow());
                }
            }
        },
        ConfigAction::Set { key, value } => {
            ctx.config.set(&key, value.clone())?;
            ctx.config.save(&ctx.config_path)?;
            plx_logger::success(&format!("Set {} = {}", key, value));
        }
        ConfigAction::Path => {
            plx_logger::debug(&format!(
                "Supported config keys: {}",
                KEYS.join(", ")
            ));
            println!("{}", ctx.config_path.display());
        }
    }
    Ok(())
}
