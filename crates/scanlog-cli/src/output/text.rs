//! Text and table output for entries.

use comfy_table::{presets, Cell, ContentArrangement, Table};

use scanlog_core::entry::ScanEntry;
use scanlog_core::time::format_local;

use crate::ui::format::truncate;
use crate::ui::theme::mode_style;
use crate::ui::{styled, styles, OutputMode, UiContext};

const NOTE_MAX: usize = 40;

/// Print a list of entries in the resolved output mode, with total vs
/// shown counts.
pub fn print_entry_list(
    ctx: &UiContext,
    entries: &[&ScanEntry],
    total: usize,
    quiet: bool,
) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            let value = serde_json::json!({
                "total": total,
                "shown": entries.len(),
                "entries": super::entries_json(entries),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputMode::Plain => {
            for entry in entries {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    entry.id,
                    format_local(entry.timestamp),
                    entry.mode,
                    entry.quantity,
                    entry.name
                );
            }
        }
        OutputMode::Pretty => {
            if entries.is_empty() {
                println!("{}", styled("No entries recorded yet", styles::DIM, ctx.color));
            } else {
                println!("{}", entry_table(ctx, entries));
            }
            if !quiet {
                let counts = format!("Total: {}  Shown: {}", total, entries.len());
                println!("{}", styled(&counts, styles::DIM, ctx.color));
            }
        }
    }
    Ok(())
}

fn entry_table(ctx: &UiContext, entries: &[&ScanEntry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(if ctx.unicode {
            presets::UTF8_BORDERS_ONLY
        } else {
            presets::ASCII_BORDERS_ONLY
        })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "TIME", "MODE", "NAME", "QTY", "OPERATOR", "NOTE"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.id),
            Cell::new(format_local(entry.timestamp)),
            Cell::new(styled(entry.mode.as_str(), mode_style(entry.mode), ctx.color)),
            Cell::new(&entry.name),
            Cell::new(entry.quantity),
            Cell::new(entry.operator.as_deref().unwrap_or("-")),
            Cell::new(truncate(entry.note.as_deref().unwrap_or(""), NOTE_MAX)),
        ]);
    }
    table
}

/// Print one entry in full.
pub fn print_entry(ctx: &UiContext, entry: &ScanEntry, quiet: bool) -> anyhow::Result<()> {
    match ctx.mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&super::entry_json(entry))?);
        }
        OutputMode::Plain => {
            println!("id={}", entry.id);
            println!("time={}", format_local(entry.timestamp));
            println!("mode={}", entry.mode);
            println!("name={}", entry.name);
            println!("quantity={}", entry.quantity);
            println!("operator={}", entry.operator.as_deref().unwrap_or(""));
            println!("note={}", entry.note.as_deref().unwrap_or(""));
            println!("source={}", entry.source.as_str());
        }
        OutputMode::Pretty => {
            if !quiet {
                let label = |text: &str| styled(text, styles::DIM, ctx.color);
                println!("{} {}", label("ID:"), entry.id);
                println!("{} {}", label("Time:"), format_local(entry.timestamp));
                println!(
                    "{} {}",
                    label("Mode:"),
                    styled(entry.mode.as_str(), mode_style(entry.mode), ctx.color)
                );
                println!(
                    "{} {} ({})",
                    label("Item:"),
                    styled(&entry.name, styles::BOLD, ctx.color),
                    entry.quantity
                );
                if let Some(ref operator) = entry.operator {
                    println!("{} {}", label("Operator:"), operator);
                }
                if let Some(ref note) = entry.note {
                    println!("{} {}", label("Note:"), note);
                }
            } else {
                println!("{} {} ({})", entry.mode, entry.name, entry.quantity);
            }
        }
    }
    Ok(())
}
