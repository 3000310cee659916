//! Delete an entry by id.

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::ui::{badge, Badge};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut log = ctx.open_log()?;
    // An absent id is a no-op, not an error.
    let removed = log.delete_by_id(&args.id)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        if removed {
            println!("{}", badge(&ui, Badge::Ok, &format!("Deleted {}", args.id)));
        } else {
            let message = format!("No entry with id {}", args.id);
            println!("{}", badge(&ui, Badge::Info, &message));
        }
    }
    Ok(())
}
