use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use scanlog_core::VERSION;

/// Scanlog - a local inventory scan logbook
#[derive(Parser)]
#[command(name = "scanlog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true, arg_required_else_help = true)]
pub struct Cli {
    /// Data directory holding the log and settings
    #[arg(short, long, global = true, env = "SCANLOG_DATA")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII symbols only (no unicode)
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Item name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Quantity moved (defaults to 1; invalid values coerce to 1)
    #[arg(short = 'n', long = "qty", value_name = "QTY", allow_hyphen_values = true)]
    pub qty: Option<String>,

    /// Movement direction (in or out)
    #[arg(short, long, default_value = "in")]
    pub mode: String,

    /// Operator handling the movement
    #[arg(short, long)]
    pub operator: Option<String>,

    /// Free-text note
    #[arg(long)]
    pub note: Option<String>,
}

/// Arguments for the `scan` command
#[derive(Args)]
pub struct ScanArgs {
    /// Movement direction applied to every accepted scan (in or out)
    #[arg(short, long, default_value = "in")]
    pub mode: String,

    /// Quantity applied to every accepted scan
    #[arg(short = 'n', long = "qty", value_name = "QTY", allow_hyphen_values = true)]
    pub qty: Option<String>,

    /// Operator recorded on every accepted scan
    #[arg(short, long)]
    pub operator: Option<String>,

    /// Note recorded on every accepted scan
    #[arg(long)]
    pub note: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Free-text search over names and notes
    #[arg(short = 'Q', long)]
    pub query: Option<String>,

    /// Filter by movement direction (in or out)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `copy` command
#[derive(Args)]
pub struct CopyArgs {
    /// Entry id
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry id
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Free-text search over names and notes
    #[arg(short = 'Q', long)]
    pub query: Option<String>,

    /// Filter by movement direction (in or out)
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Output path ("-" for stdout; default: timestamped file in cwd)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for the `settings` command
#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one setting and persist it immediately
    Set {
        /// Setting key (sound, vibration, autofocus, notifications, theme)
        #[arg(value_name = "KEY")]
        key: String,

        /// New value (true/false, or light/dark for theme)
        #[arg(value_name = "VALUE")]
        value: String,
    },
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a manual entry
    Add(AddArgs),

    /// Record decoded scans from stdin (one code per line)
    Scan(ScanArgs),

    /// List entries, optionally filtered
    List(ListArgs),

    /// Show a single entry by id
    Show(ShowArgs),

    /// Copy a single-entry summary for the clipboard
    Copy(CopyArgs),

    /// Delete an entry by id
    Delete(DeleteArgs),

    /// Delete all entries
    Clear(ClearArgs),

    /// Export entries as CSV
    Export(ExportArgs),

    /// Show or change operator settings
    Settings(SettingsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
