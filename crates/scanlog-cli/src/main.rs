//! Scanlog CLI - a local inventory scan logbook.
//!
//! Thin entry point: parse arguments, build the application context,
//! dispatch to command handlers.

use clap::Parser;

mod app;
mod cli;
mod commands;
mod config;
mod feedback;
mod helpers;
mod output;
mod ui;

use app::AppContext;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    match &cli.command {
        Commands::Add(args) => commands::entries::handle_add(&ctx, args),
        Commands::Scan(args) => commands::entries::handle_scan(&ctx, args),
        Commands::List(args) => commands::entries::handle_list(&ctx, args),
        Commands::Show(args) => commands::entries::handle_show(&ctx, args),
        Commands::Copy(args) => commands::entries::handle_copy(&ctx, args),
        Commands::Delete(args) => commands::entries::handle_delete(&ctx, args),
        Commands::Clear(args) => commands::entries::handle_clear(&ctx, args),
        Commands::Export(args) => commands::entries::handle_export(&ctx, args),
        Commands::Settings(args) => commands::settings::handle_settings(&ctx, args),
        Commands::Completions(args) => commands::misc::handle_completions(args.shell),
    }
}
