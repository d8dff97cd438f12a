use std::{
    future::ready,
    sync::atomic::{AtomicUsize, Ordering},
};

use sortify::{
    Res,
    engine::{EngineError, Page, Pager},
};

// Serves the given pages in order; page `i` is requested with cursor `i`.
fn pages(pages: Vec<Res<Page<u32>>>) -> impl FnMut(Option<String>) -> std::future::Ready<Res<Page<u32>>> {
    let mut pages = pages.into_iter().map(Some).collect::<Vec<_>>();
    move |cursor| {
        let index = cursor.map(|c| c.parse::<usize>().unwrap()).unwrap_or(0);
        ready(pages[index].take().expect("page requested twice"))
    }
}

#[tokio::test]
async fn test_collect_all_follows_cursors_in_order() {
    let pager = Pager::new(pages(vec![
        Ok(Page::new(vec![1, 2], Some("1".to_string()))),
        Ok(Page::new(vec![3], Some("2".to_string()))),
        Ok(Page::last(vec![4, 5])),
    ]));

    assert_eq!(pager.collect_all().await.unwrap(), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_empty_page_with_cursor_does_not_end_listing() {
    let mut pager = Pager::new(pages(vec![
        Ok(Page::new(vec![1], Some("1".to_string()))),
        Ok(Page::new(vec![], Some("2".to_string()))),
        Ok(Page::last(vec![2])),
    ]));

    assert_eq!(pager.next_page().await.unwrap(), Some(vec![1]));
    assert_eq!(pager.next_page().await.unwrap(), Some(vec![]));
    assert_eq!(pager.next_page().await.unwrap(), Some(vec![2]));
    assert_eq!(pager.next_page().await.unwrap(), None);
    assert_eq!(pager.pages_fetched(), 3);
}

#[tokio::test]
async fn test_empty_cursor_ends_listing() {
    let requests = AtomicUsize::new(0);
    let pager = Pager::new(|_cursor| {
        requests.fetch_add(1, Ordering::SeqCst);
        ready(Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Page::new(
            vec![7u32],
            Some(String::new()),
        )))
    });

    assert_eq!(pager.collect_all().await.unwrap(), vec![7]);
    assert_eq!(requests.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_single_empty_page() {
    let pager = Pager::new(pages(vec![Ok(Page::last(vec![]))]));
    assert!(pager.collect_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_page_returns_no_partial_result() {
    let pager = Pager::new(pages(vec![
        Ok(Page::new(vec![1, 2], Some("1".to_string()))),
        Err("boom".into()),
        Ok(Page::last(vec![3])),
    ]));

    let err = pager.collect_all().await.unwrap_err();
    assert!(matches!(err, EngineError::RemoteFetch(_)));
}

#[tokio::test]
async fn test_pager_cannot_be_restarted_after_failure() {
    let mut pager = Pager::new(pages(vec![
        Ok(Page::new(vec![1], Some("1".to_string()))),
        Err("boom".into()),
    ]));

    assert_eq!(pager.next_page().await.unwrap(), Some(vec![1]));
    assert!(pager.next_page().await.is_err());
    assert_eq!(pager.next_page().await.unwrap(), None);
}
