//! Output mode routing.

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// Stable line-oriented text for scripts
    #[default]
    Plain,
    /// Human-friendly tables and badges (TTY only)
    Pretty,
}

impl OutputMode {
    /// `--json` wins over everything; `--format plain`, `TERM=dumb`,
    /// and a non-TTY stdout all force plain; otherwise pretty.
    pub fn resolve(json: bool, format: Option<&str>, is_tty: bool, term_is_dumb: bool) -> Self {
        if json {
            Self::Json
        } else if format == Some("plain") || term_is_dumb || !is_tty {
            Self::Plain
        } else {
            Self::Pretty
        }
    }

    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(self) -> bool {
        matches!(self, Self::Pretty)
    }
}
