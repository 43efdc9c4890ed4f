use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::markdown::EmphasisSymbol;

/// Optional settings read from a TOML file.
///
/// ```toml
/// output = "content/posts"
/// emphasis = "underscore"
/// ```
#[derive(PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: Option<PathBuf>,
    pub emphasis: EmphasisSymbol,
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Config> {
        let s = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&s)?)
    }

    /// The output directory to use; `flag` wins over the file, `.` is the fallback.
    pub fn output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
