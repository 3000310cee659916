//! Record decoded scans arriving on stdin.
//!
//! This is the capture-source boundary: a decode library (or a tethered
//! scanner, or a pipe) delivers one decoded string per line. Blank
//! lines are decode failures and are ignored without logging; texts
//! caught by the duplicate debounce are dropped silently.

use std::io::{self, BufRead, IsTerminal};

use scanlog_core::capability::entry_feedback;
use scanlog_core::debounce::ScanDebounce;
use scanlog_core::entry::{EntryInput, Source};
use scanlog_core::time;

use crate::app::AppContext;
use crate::cli::ScanArgs;
use crate::feedback::TerminalCapabilities;
use crate::helpers::parse_mode;
use crate::ui::{badge, styled, styles, Badge};

pub fn handle_scan(ctx: &AppContext, args: &ScanArgs) -> anyhow::Result<()> {
    let mode = parse_mode(&args.mode)?;
    let ui = ctx.ui_context(false, None);

    let mut log = ctx.open_log()?;
    let (settings, _storage) = ctx.open_settings()?;
    let caps = TerminalCapabilities;
    let mut debounce = ScanDebounce::new();

    if io::stdin().is_terminal() && !ctx.quiet() {
        let hint = "Reading decoded scans from stdin; one code per line, Ctrl-D to finish";
        eprintln!("{}", styled(hint, styles::DIM, ui.color));
    }

    let mut recorded = 0usize;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let decoded = line.trim();
        if decoded.is_empty() {
            continue;
        }
        if !debounce.accept(decoded, time::now_ms()) {
            continue;
        }

        let input = EntryInput::new(mode, decoded, Source::Scanned)
            .with_quantity(args.qty.clone())
            .with_operator(args.operator.clone())
            .with_note(args.note.clone());
        let Some(entry) = input.build() else {
            continue;
        };

        log.append(entry.clone())?;
        entry_feedback(&caps, &settings, &entry);
        recorded += 1;

        if !ctx.quiet() {
            let message = format!("{}: {} ({})", entry.mode, entry.name, entry.quantity);
            println!("{}", badge(&ui, Badge::Ok, &message));
        }
    }

    if !ctx.quiet() {
        let summary = format!("Recorded {} entries", recorded);
        println!("{}", styled(&summary, styles::DIM, ui.color));
    }
    Ok(())
}
