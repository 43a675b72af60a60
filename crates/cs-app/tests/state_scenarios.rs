//! End-to-end behaviour of the state container over real store adapters.

use std::sync::Arc;

use cs_app::AppState;
use cs_core::ids::{CategoryId, HistoryItemId};
use cs_core::ports::KeyValueStorePort;
use cs_core::snippet::{NewCategory, NewSnippet, Snippet};
use cs_core::AppTheme;
use cs_infra::{FileKeyValueStore, InMemoryKeyValueStore, SystemClock};

fn load(store: Arc<dyn KeyValueStorePort>) -> AppState {
    AppState::load(store, Arc::new(SystemClock)).unwrap()
}

#[test]
fn docs_category_cascade_removes_snippet_everywhere() {
    let mut state = load(Arc::new(InMemoryKeyValueStore::new()));

    let docs = state.add_category(NewCategory::new("Docs").unwrap()).unwrap();
    let x = state
        .add_snippet(NewSnippet::new("x", "y", docs.clone()).unwrap())
        .unwrap();
    state.delete_category(&docs).unwrap();

    assert!(state.snippet(&x).is_none());
    for category in state.categories() {
        assert!(state
            .get_snippets_for_category(category.id())
            .iter()
            .all(|s| s.id() != &x));
    }
}

#[test]
fn protected_categories_survive_delete_requests() {
    let mut state = load(Arc::new(InMemoryKeyValueStore::new()));
    let before = state.categories().len();

    state.delete_category(&CategoryId::general()).unwrap();
    state.delete_category(&CategoryId::code()).unwrap();

    assert_eq!(state.categories().len(), before);
}

#[test]
fn snippet_can_move_to_a_nonexistent_category() {
    let mut state = load(Arc::new(InMemoryKeyValueStore::new()));
    let id = state
        .add_snippet(NewSnippet::new("x", "y", CategoryId::general()).unwrap())
        .unwrap();

    let ghost = CategoryId::from("does-not-exist");
    let moved = Snippet::new(id.clone(), "x", "y", ghost.clone()).unwrap();
    assert!(state.update_snippet(moved).unwrap());

    assert!(state.get_snippets_for_category(&CategoryId::general()).is_empty());
    let found = state.get_snippets_for_category(&ghost);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), &id);
}

#[test]
fn state_round_trips_through_the_file_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn KeyValueStorePort> =
        Arc::new(FileKeyValueStore::new_in_app_data_root(temp_dir.path()).unwrap());

    let mut state = load(store.clone());
    let pinned = state.add_history_item("pinned").unwrap().unwrap();
    state.add_history_item("loose").unwrap();
    state.toggle_pin_history_item(&pinned).unwrap();
    let scratch = state.add_category(NewCategory::new("Scratch").unwrap()).unwrap();
    state
        .add_snippet(NewSnippet::new("a", "alpha", scratch).unwrap())
        .unwrap();
    state
        .add_snippet(NewSnippet::new("b", "beta", CategoryId::code()).unwrap())
        .unwrap();
    state.set_theme(AppTheme::Light).unwrap();

    let reloaded = load(store);

    assert_eq!(reloaded.history(), state.history());
    assert_eq!(reloaded.snippets(), state.snippets());
    assert_eq!(reloaded.categories(), state.categories());
    assert_eq!(reloaded.theme(), AppTheme::Light);
}

#[test]
fn toggling_pin_twice_is_an_involution() {
    let mut state = load(Arc::new(InMemoryKeyValueStore::new()));
    let id = state.add_history_item("a").unwrap().unwrap();

    state.toggle_pin_history_item(&id).unwrap();
    state.toggle_pin_history_item(&id).unwrap();

    assert!(!state.history_item(&id).unwrap().is_pinned);
    state
        .toggle_pin_history_item(&HistoryItemId::from("nope"))
        .unwrap();
}
