// crates/ssm-env-core/src/runtime/pages.rs
// ============================================================================
// Module: Page Stream
// Description: Lazy pagination over a parameter fetcher.
// Purpose: Yield parameter batches until the store stops returning tokens.
// Dependencies: crate::{core, interfaces}, futures
// ============================================================================

//! ## Overview
//! [`page_stream`] issues one fetch per polled item. The first fetch carries no
//! token; each following fetch carries the token returned by the previous page.
//! The stream ends after the first page without a continuation token and fails
//! closed once [`MAX_PAGES_PER_PATH`] pages have been fetched for one path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use futures::Stream;
use futures::stream;

use crate::core::FetchRequest;
use crate::core::Parameter;
use crate::interfaces::FetchError;
use crate::interfaces::ParameterFetcher;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum number of pages fetched for a single path prefix.
pub const MAX_PAGES_PER_PATH: usize = 10_000;

// ============================================================================
// SECTION: Cursor
// ============================================================================

/// Pagination position between fetches.
enum PageCursor {
    /// No page fetched yet.
    Start,
    /// Continue with the given token.
    Next(String),
    /// The previous page carried no token.
    Done,
}

// ============================================================================
// SECTION: Stream
// ============================================================================

/// Returns a lazy stream of parameter batches for one path prefix.
///
/// Nothing is fetched until the stream is polled. Errors end the stream.
pub fn page_stream<'a, F>(
    fetcher: &'a F,
    request: &'a FetchRequest,
) -> impl Stream<Item = Result<Vec<Parameter>, FetchError>> + Send + 'a
where
    F: ParameterFetcher + ?Sized,
{
    stream::try_unfold((PageCursor::Start, 0_usize), move |(cursor, fetched)| async move {
        let token = match cursor {
            PageCursor::Done => return Ok(None),
            PageCursor::Start => None,
            PageCursor::Next(token) => Some(token),
        };
        if fetched >= MAX_PAGES_PER_PATH {
            return Err(FetchError::PageLimit {
                path: request.path.clone(),
                max_pages: MAX_PAGES_PER_PATH,
            });
        }
        let page = fetcher.fetch_page(request, token.as_deref()).await?;
        let cursor = match page.next_token {
            Some(token) if !token.is_empty() => PageCursor::Next(token),
            _ => PageCursor::Done,
        };
        Ok(Some((page.parameters, (cursor, fetched + 1))))
    })
}
