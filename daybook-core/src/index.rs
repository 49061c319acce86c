//! Groups written entry files by month folder while a run is in progress.

/// Month folder → file names, in the order months were first seen.
#[derive(Debug, Default)]
pub struct MonthIndex {
    months: Vec<(String, Vec<String>)>,
}

impl MonthIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `file_name` under `month_folder`. Recording the same file twice keeps one copy.
    pub fn record(&mut self, month_folder: &str, file_name: &str) {
        let pos = match self.months.iter().position(|(m, _)| m == month_folder) {
            Some(pos) => pos,
            None => {
                self.months.push((month_folder.to_string(), Vec::new()));
                self.months.len() - 1
            }
        };
        let files = &mut self.months[pos].1;
        if !files.iter().any(|f| f == file_name) {
            files.push(file_name.to_string());
        }
    }

    /// Whether `file_name` was already recorded under `month_folder`.
    pub fn contains(&self, month_folder: &str, file_name: &str) -> bool {
        self.months
            .iter()
            .any(|(m, files)| m == month_folder && files.iter().any(|f| f == file_name))
    }

    /// Month folders in first-seen order.
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.months.iter().map(|(m, _)| m.as_str())
    }

    /// File names of one month, sorted. Lexicographic order is chronological for `yyyyMMdd.md`.
    pub fn sorted_files(&self, month_folder: &str) -> Vec<String> {
        let mut files = self
            .months
            .iter()
            .find(|(m, _)| m == month_folder)
            .map(|(_, files)| files.clone())
            .unwrap_or_default();
        files.sort();
        files
    }
}
