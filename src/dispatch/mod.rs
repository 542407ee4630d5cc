pub mod errors;
mod watcher;

use std::io::Write;
use std::path::Path;

use crate::page::{PageGeometry, PageLayout};
use errors::DispatchError;
pub use watcher::JobWatcher;

/// A fully prepared rendering job: the loaded lines of one file plus its
/// computed page layout.
#[derive(Debug)]
pub struct PrintJob<'a> {
    pub path: &'a Path,
    pub lines: &'a [String],
    pub layout: &'a PageLayout,
    pub geometry: &'a PageGeometry,
}

/// The boundary to whatever actually renders pages. Device-specific
/// spooling lives behind this trait; the print loop only submits jobs and
/// waits on the returned watcher.
pub trait PrintDispatcher {
    fn submit(&mut self, job: &PrintJob<'_>) -> Result<JobWatcher, DispatchError>;
}

/// Renders jobs as plain text: a banner per page, lines clipped to the
/// printable width, a form feed between pages. Completes the watcher as
/// soon as the last page is written.
pub struct TextDispatcher<W: Write> {
    out: W,
}

impl TextDispatcher<std::io::Stdout> {
    pub fn stdout() -> Self {
        TextDispatcher {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> TextDispatcher<W> {
    pub fn new(out: W) -> Self {
        TextDispatcher { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PrintDispatcher for TextDispatcher<W> {
    fn submit(&mut self, job: &PrintJob<'_>) -> Result<JobWatcher, DispatchError> {
        let pages = job.layout.page_count();
        let width = job.geometry.chars_per_page;

        for page in 0..pages {
            // page_span cannot fail for page < page_count
            let span = job
                .layout
                .page_span(page)
                .map_err(|e| DispatchError::Rejected(e.to_string()))?;

            writeln!(
                self.out,
                "==== {} [page {}/{}] ====",
                job.path.display(),
                page + 1,
                pages
            )?;
            for line in &job.lines[span] {
                writeln!(self.out, "{}", clip(line, width))?;
            }
            if page + 1 < pages {
                writeln!(self.out, "\u{c}")?;
            }
        }
        self.out.flush()?;

        let watcher = JobWatcher::new();
        watcher.complete();
        Ok(watcher)
    }
}

/// Clips a line to the printable width, on a character boundary.
fn clip(line: &str, width: usize) -> &str {
    if width == 0 {
        return line;
    }
    match line.char_indices().nth(width) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
