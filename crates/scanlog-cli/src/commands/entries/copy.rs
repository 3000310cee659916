//! Copy a single-entry summary through the clipboard channel.

use scanlog_core::capability::{clipboard_summary, HostCapabilities};

use crate::app::AppContext;
use crate::cli::CopyArgs;
use crate::feedback::TerminalCapabilities;
use crate::ui::{styled, styles};

pub fn handle_copy(ctx: &AppContext, args: &CopyArgs) -> anyhow::Result<()> {
    let log = ctx.open_log()?;
    let entry = log
        .get(&args.id)
        .ok_or_else(|| anyhow::anyhow!("No entry with id {}", args.id))?;

    TerminalCapabilities.copy_text(&clipboard_summary(entry));

    let ui = ctx.ui_context(false, None);
    if !ctx.quiet() && ui.mode.is_pretty() {
        let hint = "Pipe into your clipboard tool, e.g. scanlog copy <id> | xclip";
        eprintln!("{}", styled(hint, styles::DIM, ui.color));
    }
    Ok(())
}
