//! Cancellation is a normal completion, never an error.

use std::fs;

use filenest::CancelToken;
use filenest::search::{SearchQuery, SearchSlot, spawn_search, spawn_search_with};
use tempfile::{TempDir, tempdir};

fn wide_tree(files: usize) -> TempDir {
    let td = tempdir().unwrap();
    for i in 0..files {
        fs::write(td.path().join(format!("entry-{i:04}.txt")), b"x").unwrap();
    }
    td
}

#[test]
fn cancelling_before_the_first_checkpoint_yields_empty_completion() {
    let td = wide_tree(50);
    let token = CancelToken::new();
    token.cancel();

    let outcome = spawn_search_with(SearchQuery::new(td.path(), "", 1000), token)
        .unwrap()
        .wait();

    assert!(outcome.cancelled);
    assert!(outcome.matches.is_empty());
}

#[test]
fn cancelling_right_after_start_stays_under_the_limit() {
    let td = wide_tree(300);

    let handle = spawn_search(SearchQuery::new(td.path(), "entry", 1000)).unwrap();
    handle.cancel();
    let outcome = handle.wait();

    // Whatever raced in before the checkpoint is fine; the run must simply
    // complete without reaching the limit.
    assert!(outcome.matches.len() < 1000);
}

#[test]
fn cancel_is_idempotent() {
    let td = wide_tree(10);
    let handle = spawn_search(SearchQuery::new(td.path(), "", 1000)).unwrap();
    handle.cancel();
    handle.cancel();
    let outcome = handle.wait();
    assert!(outcome.matches.len() <= 10);
}

#[test]
fn starting_a_new_search_cancels_the_slots_prior_one() {
    let td = wide_tree(200);
    let mut slot = SearchSlot::new();

    let first_token = slot
        .start(SearchQuery::new(td.path(), "entry", 1000))
        .unwrap()
        .cancel_token();
    assert!(!first_token.is_cancelled());

    slot.start(SearchQuery::new(td.path(), "other", 1000)).unwrap();
    assert!(
        first_token.is_cancelled(),
        "slot must cancel the search it previously held"
    );

    let second = slot.take().expect("slot holds the new search");
    let outcome = second.wait();
    assert!(!outcome.cancelled);
}

#[test]
fn slot_cancel_active_clears_the_slot() {
    let td = wide_tree(20);
    let mut slot = SearchSlot::new();
    slot.start(SearchQuery::new(td.path(), "", 1000)).unwrap();
    slot.cancel_active();
    assert!(slot.take().is_none());
}
