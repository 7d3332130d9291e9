use colored::Colorize;
use plx_receipt::list_installed;

use crate::context::PlxContext;
use crate::errors::CommandError;
use crate::GlobalOpts;

pub fn list_plugins(ctx: &PlxContext, opts: &GlobalOpts) -> Result<(), CommandError> {
    let receipts = list_installed(&ctx.paths.receipts)?;

    if receipts.is_empty() {
        println!("There are no plugins installed.\n");
        println!(
            "To record a plugin from the index, run:\n  {} record <plugin>",
            "plx".bold().cyan()
        );
        return Ok(());
    }

    println!("{}", "Plugins:".bold().green());
    for receipt in &receipts {
        let mut line = format!(" {}", receipt.name().bold().blue());
        if let Some(version) = receipt.version() {
            line.push_str(&format!(" {}", version.dimmed()));
        }
        if let Some(ref description) = receipt.spec.short_description {
            line.push_str(&format!("  {}", description));
        }
        println!("{}", line);

        if opts.verbosity_level() > 0 {
            for platform in receipt.platforms() {
                println!("    - {} ({})", platform.uri, platform.bin);
            }
        }
    }
    println!();
    println!("{}: {}", "Total plugins".bold(), receipts.len());

    Ok(())
}
