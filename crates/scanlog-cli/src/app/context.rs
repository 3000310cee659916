//! Application context for the scanlog CLI.
//!
//! Bundles CLI arguments with the lazily-loaded host configuration so
//! handlers do not thread paths and flags individually.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use scanlog_core::settings::Settings;
use scanlog_core::storage::JsonFileStore;
use scanlog_core::store::LogStore;

use crate::cli::Cli;
use crate::config::{self, ScanlogConfig};
use crate::ui::UiContext;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ScanlogConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    fn config(&self) -> anyhow::Result<&ScanlogConfig> {
        self.config.get_or_try_init(config::load_config)
    }

    /// Data directory resolution order: `--data-dir` / `SCANLOG_DATA`,
    /// host config `[storage] path`, then the XDG default.
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(ref dir) = self.cli.data_dir {
            return Ok(PathBuf::from(dir));
        }
        if let Some(ref path) = self.config()?.storage.path {
            return Ok(PathBuf::from(path));
        }
        config::default_data_dir()
    }

    /// Open the scan log over the resolved data directory.
    pub fn open_log(&self) -> anyhow::Result<LogStore<JsonFileStore>> {
        let storage = JsonFileStore::open(&self.data_dir()?)?;
        Ok(LogStore::load(storage))
    }

    /// Operator settings plus the backend they persist through.
    pub fn open_settings(&self) -> anyhow::Result<(Settings, JsonFileStore)> {
        let storage = JsonFileStore::open(&self.data_dir()?)?;
        let settings = Settings::load(&storage);
        Ok((settings, storage))
    }

    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
