use crate::dates::EntryDate;
use std::path::{Path, PathBuf};

pub const INDEX_FILE_NAME: &str = "_index.md";

/// `{root}/2021-03`
pub fn month_dir(root: &Path, date: EntryDate) -> PathBuf {
    root.join(date.month_folder())
}

/// `{root}/2021-03/20210305.md`
pub fn entry_path(root: &Path, date: EntryDate) -> PathBuf {
    month_dir(root, date).join(date.file_name())
}

/// `{root}/2021-03/_index.md`
pub fn index_path(root: &Path, month_folder: &str) -> PathBuf {
    root.join(month_folder).join(INDEX_FILE_NAME)
}
