use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("No such page: {page} (document has {pages} page(s)).")]
    NoSuchPage { page: usize, pages: usize },

    #[error("Lines per page must be at least 1.")]
    InvalidLinesPerPage,
}
