//! Non-fatal faults absorbed by the pipeline stage that met them.

/// A soft failure recorded during a search. Each is also logged at `warn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchWarning {
    /// A continuation page failed; collection kept the earlier pages.
    PaginationStopped { page: usize, reason: String },
    /// The page guard tripped while the provider still offered a cursor.
    PageLimitReached { max_pages: usize },
    /// One candidate's detail fetch failed; the candidate was dropped.
    DetailFetchFailed { place_id: String, reason: String },
    /// A record could not be normalized and was dropped.
    RecordSkipped { place_id: String, reason: String },
}

impl std::fmt::Display for SearchWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchWarning::PaginationStopped { page, reason } => {
                write!(f, "pagination stopped at page {page}: {reason}")
            }
            SearchWarning::PageLimitReached { max_pages } => {
                write!(f, "stopped after {max_pages} pages with more available")
            }
            SearchWarning::DetailFetchFailed { place_id, reason } => {
                write!(f, "detail fetch failed for {place_id}: {reason}")
            }
            SearchWarning::RecordSkipped { place_id, reason } => {
                write!(f, "skipped record {place_id}: {reason}")
            }
        }
    }
}
