//! The `Converter` turns one journal export into a month-by-month Markdown content tree.
use crate::config::{Config, DuplicatePolicy};
use crate::dates::{EntryDate, MonthFolder, parse_entry_date};
use crate::errors::{ConvertError, ConvertResult};
use crate::extract::{extract_entries, preamble};
use crate::index::MonthIndex;
use crate::paths::{entry_path, index_path, month_dir};
use crate::render::{format_entry_document, format_month_index};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Holds the configuration and runs conversions.
#[derive(Debug)]
pub struct Converter {
    pub config: Config,
}

/// What a finished run wrote.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Entry pages written, counting every overwrite.
    pub entries_written: usize,
    pub indexes_written: usize,
    /// Entries that replaced an earlier entry of the same day in this run.
    pub overwritten: usize,
    /// Month folders in the order their indexes were written.
    pub months: Vec<String>,
}

impl Converter {
    /// Creates a new `Converter`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Reads the export at `input` in full and converts it into `output_dir`.
    ///
    /// The output directory is created if it does not exist yet.
    pub fn convert_file(&self, input: &Path, output_dir: &Path) -> Result<ConvertSummary> {
        let content = fs::read_to_string(input)
            .with_context(|| format!("reading {}", input.display()))?;
        self.convert_str(&content, output_dir)
            .with_context(|| format!("converting {}", input.display()))
    }

    /// Converts the export `content` into `output_dir`.
    ///
    /// Entries are handled one at a time in file order: parse the date, write the page, record
    /// it under its month. Once every entry is written, one `_index.md` per month follows.
    ///
    /// The first error stops the run. Pages written before it stay on disk; no index is written.
    pub fn convert_str(&self, content: &str, output_dir: &Path) -> ConvertResult<ConvertSummary> {
        let mut entries = extract_entries(content).peekable();
        if entries.peek().is_none() {
            return Err(ConvertError::NoEntries);
        }
        if let Some(lead) = preamble(content) {
            log::debug!("skipping {} bytes before the first entry", lead.len());
        }

        fs::create_dir_all(output_dir).map_err(|e| ConvertError::io(output_dir, e))?;

        let mut summary = ConvertSummary::default();
        let mut index = MonthIndex::new();

        for raw in entries {
            let date = EntryDate::new(parse_entry_date(raw.date_text, &self.config.date_formats)?);
            let month_folder = date.month_folder();
            let file_name = date.file_name();
            let path = entry_path(output_dir, date);

            if index.contains(&month_folder, &file_name) {
                match self.config.on_duplicate {
                    DuplicatePolicy::Error => {
                        return Err(ConvertError::DuplicateDate {
                            date: date.iso_date(),
                            file: path,
                        });
                    }
                    DuplicatePolicy::Overwrite => {
                        log::warn!(
                            "Second entry for {} replaces {}",
                            date.iso_date(),
                            path.display()
                        );
                        summary.overwritten += 1;
                    }
                }
            }

            let dir = month_dir(output_dir, date);
            fs::create_dir_all(&dir).map_err(|e| ConvertError::io(&dir, e))?;

            let document = format_entry_document(date, raw.body, &self.config.title_fallback);
            fs::write(&path, document).map_err(|e| ConvertError::io(&path, e))?;
            log::info!("Written: {}", path.display());

            summary.entries_written += 1;
            index.record(&month_folder, &file_name);
        }

        for month in index.months() {
            let folder = MonthFolder::parse(month)?;
            let files = index.sorted_files(month);
            let path = index_path(output_dir, month);

            fs::write(&path, format_month_index(&folder, &files))
                .map_err(|e| ConvertError::io(&path, e))?;
            log::info!("Written index: {}", path.display());

            summary.indexes_written += 1;
            summary.months.push(month.to_string());
        }

        Ok(summary)
    }
}
