mod common;

use sortify::engine::{EngineError, SWEEP_TRACK_ID, find_playlist_by_name, sweep, user_playlists};

use common::{Call, MockSource, playlist, track};

fn toto() -> sortify::types::Track {
    track(SWEEP_TRACK_ID, "1982-04-08", 85)
}

fn library() -> MockSource {
    MockSource::new("me")
        .with_playlist(
            playlist("p1", "Eighties", "me", true),
            vec![track("a", "1984", 0), toto(), track("b", "1985", 0), toto()],
        )
        .with_playlist(playlist("p2", "Jazz", "me", false), vec![track("c", "1959", 0)])
        .with_playlist(
            playlist("p3", "Followed", "someone", true),
            vec![toto(), track("d", "1990", 0)],
        )
        .with_saved(&[SWEEP_TRACK_ID, "a"])
}

#[tokio::test]
async fn test_sweep_removes_track_from_owned_playlists_and_library() {
    let source = library();

    sweep(&source).await.unwrap();

    assert_eq!(source.track_ids("p1"), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(source.track_ids("p2"), vec!["c".to_string()]);
    // not owned by the user
    assert_eq!(source.track_ids("p3").len(), 2);
    assert_eq!(source.state().saved, vec!["a".to_string()]);

    let removes = source
        .calls()
        .into_iter()
        .filter(|c| matches!(c, Call::Remove { .. }))
        .count();
    assert_eq!(removes, 2);
    assert_eq!(
        source.calls().last(),
        Some(&Call::RemoveSaved(SWEEP_TRACK_ID.to_string()))
    );
}

#[tokio::test]
async fn test_playlist_failure_does_not_stop_sweep() {
    let mut source = library();
    source.fail_remove_for.insert("p1".to_string());

    sweep(&source).await.unwrap();

    assert_eq!(source.track_ids("p1").len(), 4);
    assert!(source.calls().contains(&Call::Remove {
        playlist_id: "p2".to_string(),
        track_ids: vec![SWEEP_TRACK_ID.to_string()],
    }));
    assert_eq!(source.state().saved, vec!["a".to_string()]);
}

#[tokio::test]
async fn test_library_failure_is_propagated() {
    let mut source = library();
    source.fail_saved_removal = true;

    let err = sweep(&source).await.unwrap_err();

    assert!(matches!(err, EngineError::RemoteMutation(_)));
    assert_eq!(source.track_ids("p1").len(), 2);
}

#[tokio::test]
async fn test_listing_failure_aborts_sweep() {
    let mut source = library();
    source.playlist_page_size = 2;
    source.fail_playlists_page = Some(1);

    let err = sweep(&source).await.unwrap_err();

    assert!(matches!(err, EngineError::RemoteFetch(_)));
    assert!(
        !source
            .calls()
            .iter()
            .any(|c| matches!(c, Call::RemoveSaved(_)))
    );
}

#[tokio::test]
async fn test_sweep_walks_all_playlist_pages() {
    let mut source = MockSource::new("me");
    source.playlist_page_size = 2;
    for i in 0..5 {
        source = source.with_playlist(
            playlist(&format!("p{}", i), &format!("List {}", i), "me", true),
            vec![toto()],
        );
    }

    sweep(&source).await.unwrap();

    for i in 0..5 {
        assert!(source.track_ids(&format!("p{}", i)).is_empty());
    }
}

#[tokio::test]
async fn test_find_playlist_by_name() {
    let mut source = library();
    source.playlist_page_size = 1;

    let found = find_playlist_by_name(&source, "Jazz").await.unwrap();
    assert_eq!(found.id, "p2");

    // stops paging after the match
    let listed = source
        .calls()
        .iter()
        .filter(|c| matches!(c, Call::ListPlaylists { .. }))
        .count();
    assert_eq!(listed, 2);
}

#[tokio::test]
async fn test_find_playlist_by_name_not_found() {
    let source = library();

    match find_playlist_by_name(&source, "jazz").await {
        Err(EngineError::NotFound(name)) => assert_eq!(name, "jazz"),
        other => panic!("expected NotFound, got {:?}", other.map(|p| p.id)),
    }
}

#[tokio::test]
async fn test_user_playlists_lists_every_page() {
    let mut source = library();
    source.playlist_page_size = 2;

    let playlists = user_playlists(&source).await.unwrap();
    assert_eq!(
        playlists.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        vec!["p1", "p2", "p3"]
    );
}
