use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one file in the batch.
#[derive(Debug, Clone)]
pub struct FileStat {
    pub path: PathBuf,
    pub lines: usize,
    pub pages: usize,
}

/// Accumulated outcome of a whole print run.
#[derive(Debug, Default)]
pub struct PrintStats {
    pub files_printed: usize,
    pub files_skipped: usize,
    pub pages_printed: usize,
    pub file_stats: Vec<FileStat>,
    pub total_duration: Duration,
}

impl PrintStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_printed(&mut self, stat: FileStat) {
        self.files_printed += 1;
        self.pages_printed += stat.pages;
        self.file_stats.push(stat);
    }

    pub fn add_skipped(&mut self) {
        self.files_skipped += 1;
    }

    pub fn files_seen(&self) -> usize {
        self.files_printed + self.files_skipped
    }
}
