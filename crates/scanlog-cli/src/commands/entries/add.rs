//! Record a manual entry.

use scanlog_core::capability::entry_feedback;
use scanlog_core::entry::{EntryInput, Source};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::feedback::TerminalCapabilities;
use crate::helpers::parse_mode;
use crate::ui::{badge, styled, styles, Badge};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mode = parse_mode(&args.mode)?;
    let ui = ctx.ui_context(false, None);

    let input = EntryInput::new(mode, args.name.clone(), Source::Manual)
        .with_quantity(args.qty.clone())
        .with_operator(args.operator.clone())
        .with_note(args.note.clone());

    // Refused, not an error: the store never sees an empty name.
    let Some(entry) = input.build() else {
        println!("{}", badge(&ui, Badge::Warn, "Item name must not be empty"));
        return Ok(());
    };

    let mut log = ctx.open_log()?;
    log.append(entry.clone())?;

    let (settings, _storage) = ctx.open_settings()?;
    entry_feedback(&TerminalCapabilities, &settings, &entry);

    if !ctx.quiet() {
        let message = format!("{}: {} ({})", entry.mode, entry.name, entry.quantity);
        println!("{}", badge(&ui, Badge::Ok, &message));
        let context = format!("id: {}", entry.id);
        println!("{}", styled(&context, styles::DIM, ui.color));
    }
    Ok(())
}
