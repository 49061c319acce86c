use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// What to do when two entries land on the same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later entry replaces the earlier file. A warning is logged.
    #[default]
    Overwrite,
    /// Abort the run before the earlier file is replaced.
    Error,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the generated content tree (month folders go directly below it).
    pub output_dir: PathBuf,
    /// Extra `chrono` formats tried before the built-in ones when reading entry dates.
    pub date_formats: Vec<String>,
    pub on_duplicate: DuplicatePolicy,
    /// Title used when an entry has no `#` heading.
    pub title_fallback: String,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    output_dir: Option<PathBuf>,
    date_formats: Option<Vec<String>>,
    on_duplicate: Option<String>,
    title_fallback: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("./content"),
            date_formats: Vec::new(),
            on_duplicate: DuplicatePolicy::Overwrite,
            title_fallback: "Untitled".to_string(),
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        match Self::read_file_config()? {
            Some(file_config) => Self::from_file_config(file_config),
            None => Ok(Self::default()),
        }
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let on_duplicate = match file_config.on_duplicate.as_deref() {
            Some(policy) => policy
                .parse::<DuplicatePolicy>()
                .with_context(|| format!("unknown on_duplicate policy `{policy}`"))?,
            None => defaults.on_duplicate,
        };

        Ok(Self {
            output_dir: file_config.output_dir.unwrap_or(defaults.output_dir),
            date_formats: file_config.date_formats.unwrap_or_default(),
            on_duplicate,
            title_fallback: file_config
                .title_fallback
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(defaults.title_fallback),
        })
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("daybook")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("daybook").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<Option<FileConfig>> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            log::debug!("loading config from {}", path.display());
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            let fc = Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
            return Ok(Some(fc));
        }
        Ok(None)
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
