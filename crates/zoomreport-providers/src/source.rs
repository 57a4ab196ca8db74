//! Participant page sources and the pagination loop.
//!
//! A [`ParticipantSource`] returns one page of attendance records for a
//! cursor. [`fetch_all_participants`] walks the cursors until the source
//! stops returning one, or until the page guard is hit.

use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;
use tracing::{debug, info};
use zoomreport_core::ParticipantRecord;

use crate::error::{ProviderError, ProviderResult};

/// A boxed future for trait methods.
///
/// Boxing keeps [`ParticipantSource`] object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One page of the participants report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParticipantPage {
    /// Records on this page, in server order.
    #[serde(default)]
    pub participants: Vec<ParticipantRecord>,
    /// Cursor for the next page. Absent or empty on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
    /// Total number of records across all pages, when the server says.
    #[serde(default)]
    pub total_records: Option<u64>,
}

impl ParticipantPage {
    /// Creates a page with the given records and cursor.
    pub fn new(participants: Vec<ParticipantRecord>, next_page_token: Option<&str>) -> Self {
        Self {
            participants,
            next_page_token: next_page_token.map(String::from),
            total_records: None,
        }
    }

    /// The cursor for the next page, if there is one.
    pub fn cursor(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Something that serves participant report pages.
pub trait ParticipantSource: Send + Sync {
    /// Short name used in errors and logs.
    fn name(&self) -> &str;

    /// Fetches the page at `cursor`; `None` is the first page.
    fn fetch_page<'a>(
        &'a self,
        meeting_id: &'a str,
        cursor: Option<&'a str>,
    ) -> BoxFuture<'a, ProviderResult<ParticipantPage>>;
}

/// Fetches every page of the participants report and concatenates them.
///
/// Fails with [`LimitExceeded`](crate::ProviderErrorCode::LimitExceeded)
/// when the source still has a cursor after `max_pages` pages.
pub async fn fetch_all_participants(
    source: &dyn ParticipantSource,
    meeting_id: &str,
    max_pages: usize,
) -> ProviderResult<Vec<ParticipantRecord>> {
    let mut participants = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0;

    loop {
        if pages >= max_pages {
            return Err(ProviderError::limit_exceeded(format!(
                "meeting {} still has more participants after {} pages",
                meeting_id, max_pages
            ))
            .with_provider(source.name()));
        }

        let page = source.fetch_page(meeting_id, cursor.as_deref()).await?;
        pages += 1;

        let next = page.cursor().map(String::from);
        debug!(
            page = pages,
            records = page.participants.len(),
            total = ?page.total_records,
            "fetched participants page"
        );
        participants.extend(page.participants);

        match next {
            Some(token) => cursor = Some(token),
            None => break,
        }
    }

    info!(
        "fetched {} participant records for meeting {} in {} pages",
        participants.len(),
        meeting_id,
        pages
    );
    Ok(participants)
}
