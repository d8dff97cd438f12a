use std::{future::Future, marker::PhantomData};

use crate::{
    Res,
    engine::{EngineError, Page},
};

/// Drains a cursor-based listing page by page.
///
/// The first request is issued without a cursor, every following one with the
/// cursor of the previous page, until a page comes back without a cursor.
/// Empty pages that still carry a cursor do not end the listing. A failed
/// request ends the pager for good, it cannot be restarted.
///
/// # Example
///
/// ```
/// let mut pager = Pager::new(|cursor| source.list_playlist_tracks(playlist_id, cursor));
/// while let Some(tracks) = pager.next_page().await? {
///     println!("{} tracks", tracks.len());
/// }
/// ```
pub struct Pager<T, F> {
    fetch: F,
    cursor: Option<String>,
    finished: bool,
    pages: usize,
    _item: PhantomData<fn() -> T>,
}

impl<T, F, Fut> Pager<T, F>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Res<Page<T>>>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            cursor: None,
            finished: false,
            pages: 0,
            _item: PhantomData,
        }
    }

    /// Fetches the next page, `Ok(None)` once the listing is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, EngineError> {
        if self.finished {
            return Ok(None);
        }

        let page = match (self.fetch)(self.cursor.take()).await {
            Ok(page) => page,
            Err(e) => {
                self.finished = true;
                return Err(EngineError::fetch(e));
            }
        };

        self.pages += 1;
        self.cursor = page.next_cursor.filter(|c| !c.is_empty());
        self.finished = self.cursor.is_none();

        Ok(Some(page.items))
    }

    /// Reads all remaining pages into one sequence, in listing order.
    pub async fn collect_all(mut self) -> Result<Vec<T>, EngineError> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }
        Ok(items)
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }
}
