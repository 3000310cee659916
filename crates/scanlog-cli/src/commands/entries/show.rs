//! Show a single entry by id.

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::print_entry;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let log = ctx.open_log()?;
    let entry = log
        .get(&args.id)
        .ok_or_else(|| anyhow::anyhow!("No entry with id {}", args.id))?;

    let ui = ctx.ui_context(args.json, None);
    print_entry(&ui, entry, ctx.quiet())
}
