//! List entries through the filter engine.

use scanlog_core::filter::{view, ViewFilter};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{check_format, parse_mode};
use crate::output::print_entry_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let log = ctx.open_log()?;

    let mut filter = ViewFilter::new();
    if let Some(ref query) = args.query {
        filter = filter.query(query);
    }
    if let Some(ref mode) = args.mode {
        filter = filter.mode(parse_mode(mode)?);
    }

    let mut entries = view(log.entries(), &filter);
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    let format = check_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format);
    print_entry_list(&ui, &entries, log.count(), ctx.quiet())
}
