pub mod stats;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::dispatch::{PrintDispatcher, PrintJob};
use crate::error::CodePrintError;
use crate::lang::LanguageRegistry;
use crate::page::{PageGeometry, PageLayout};
use crate::select;
use stats::{FileStat, PrintStats};

/// Everything one print run needs: where to look, what to keep, and how
/// pages are shaped.
#[derive(Debug, Clone)]
pub struct PrintRequest {
    pub root: PathBuf,
    pub language: String,
    pub geometry: PageGeometry,
    pub completion_timeout: Duration,
}

/// Runs a whole print batch: select, load, paginate, dispatch, wait.
///
/// Selection failures abort the run. Failures on an individual file (an
/// unreadable file, a completion timeout) are logged and that file is
/// skipped; one bad file must not void the rest of the project's hard
/// copy. A busy device counts as success.
pub fn run(
    request: &PrintRequest,
    registry: &LanguageRegistry,
    dispatcher: &mut dyn PrintDispatcher,
) -> Result<PrintStats, CodePrintError> {
    let start_time = Instant::now();

    // Validate the geometry up front so a bad configuration fails before
    // any file is touched.
    PageLayout::build(0, &request.geometry)?;

    let batch = select::select(&request.root, &request.language, registry)?;
    tracing::info!(
        "printing {} file(s) under {}",
        batch.len(),
        request.root.display()
    );

    let mut run_stats = PrintStats::new();
    for path in &batch {
        match print_file(path, request, dispatcher) {
            Ok(stat) => {
                tracing::debug!("printed {} ({} page(s))", path.display(), stat.pages);
                run_stats.add_printed(stat);
            }
            Err(err) => {
                tracing::warn!("skipping {}: {err}", path.display());
                run_stats.add_skipped();
            }
        }
    }

    run_stats.total_duration = start_time.elapsed();
    Ok(run_stats)
}

fn print_file(
    path: &Path,
    request: &PrintRequest,
    dispatcher: &mut dyn PrintDispatcher,
) -> Result<FileStat, CodePrintError> {
    let result = (|| {
        let lines = load_lines(path)?;
        let layout = PageLayout::build(lines.len(), &request.geometry)?;

        let job = PrintJob {
            path,
            lines: &lines,
            layout: &layout,
            geometry: &request.geometry,
        };

        match dispatcher.submit(&job) {
            Ok(watcher) => watcher.wait_done(request.completion_timeout)?,
            Err(err) if err.is_benign_busy() => {
                tracing::info!("device busy, job queued: {err}");
            }
            Err(err) => return Err(err.into()),
        }

        Ok(FileStat {
            path: path.to_path_buf(),
            lines: lines.len(),
            pages: layout.page_count(),
        })
    })();

    result.map_err(|e| CodePrintError::InFile {
        path: path.display().to_string(),
        source: Box::new(e),
    })
}

fn load_lines(path: &Path) -> Result<Vec<String>, CodePrintError> {
    let contents = fs::read_to_string(path).map_err(|e| CodePrintError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(contents.lines().map(str::to_string).collect())
}
