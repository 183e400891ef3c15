use super::*;

#[test]
fn gallery_state_default_is_idle_and_empty() {
    let state = GalleryState::default();
    assert!(state.memes.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.refresh_seq, 0);
}

#[test]
fn request_refresh_bumps_sequence() {
    let mut state = GalleryState::default();
    state.request_refresh();
    state.request_refresh();
    assert_eq!(state.refresh_seq, 2);
}

#[test]
fn successful_load_replaces_list() {
    let mut state = GalleryState::default();
    let ticket = state.begin_load();
    assert!(state.loading);

    assert!(state.finish_load(ticket, Ok(vec!["a".into(), "b".into()])));
    assert!(!state.loading);
    assert_eq!(state.memes, vec!["a".to_owned(), "b".to_owned()]);
}

#[test]
fn failed_load_keeps_previous_list_and_records_error() {
    let mut state = GalleryState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Ok(vec!["a".into()]));

    let ticket = state.begin_load();
    state.finish_load(ticket, Err("list failed: 500".into()));
    assert!(!state.loading);
    assert_eq!(state.memes, vec!["a".to_owned()]);
    assert_eq!(state.error.as_deref(), Some("list failed: 500"));
}

#[test]
fn success_clears_previous_error() {
    let mut state = GalleryState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket, Err("boom".into()));
    let ticket = state.begin_load();
    state.finish_load(ticket, Ok(Vec::new()));
    assert!(state.error.is_none());
}

#[test]
fn stale_load_is_ignored() {
    let mut state = GalleryState::default();
    let old = state.begin_load();
    let new = state.begin_load();

    assert!(!state.finish_load(old, Ok(vec!["old".into()])));
    assert!(state.loading);
    assert!(state.memes.is_empty());

    assert!(state.finish_load(new, Ok(vec!["new".into()])));
    assert_eq!(state.memes, vec!["new".to_owned()]);
}
