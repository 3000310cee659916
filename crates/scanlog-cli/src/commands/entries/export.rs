//! Export entries as CSV.

use std::fs;

use chrono::Local;

use scanlog_core::export::{export_filename, to_csv};
use scanlog_core::filter::{view, ViewFilter};

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::helpers::parse_mode;
use crate::ui::{badge, Badge};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let log = ctx.open_log()?;

    let mut filter = ViewFilter::new();
    if let Some(ref query) = args.query {
        filter = filter.query(query);
    }
    if let Some(ref mode) = args.mode {
        filter = filter.mode(parse_mode(mode)?);
    }
    let entries = view(log.entries(), &filter);
    let csv = to_csv(entries.iter().copied());

    if args.output.as_deref() == Some("-") {
        println!("{}", csv);
        return Ok(());
    }

    let path = match args.output {
        Some(ref path) => path.clone(),
        None => export_filename(Local::now()),
    };
    fs::write(&path, format!("{}\n", csv))
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let message = format!("Exported {} entries to {}", entries.len(), path);
        println!("{}", badge(&ui, Badge::Ok, &message));
    }
    Ok(())
}
