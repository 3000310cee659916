//! Delete all entries, with confirmation.

use std::io::IsTerminal;

use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::ClearArgs;
use crate::ui::{badge, Badge};

pub fn handle_clear(ctx: &AppContext, args: &ClearArgs) -> anyhow::Result<()> {
    let mut log = ctx.open_log()?;
    let ui = ctx.ui_context(false, None);

    if !args.yes {
        if !std::io::stdin().is_terminal() {
            return Err(anyhow::anyhow!(
                "Refusing to clear without confirmation; pass --yes"
            ));
        }
        let prompt = format!(
            "Delete all {} entries? This cannot be undone",
            log.count()
        );
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        if !confirmed {
            if !ctx.quiet() {
                println!("{}", badge(&ui, Badge::Info, "Aborted"));
            }
            return Ok(());
        }
    }

    log.clear()?;

    if !ctx.quiet() {
        println!("{}", badge(&ui, Badge::Ok, "Cleared the scan log"));
    }
    Ok(())
}
