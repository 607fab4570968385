//! Integration tests for Store snapshot publication
//!
//! A subscriber task observes snapshots the way a rendering layer would.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use std::convert::Infallible;
use std::sync::Arc;
use taskboard_core::{effect::Effects, reducer::Reducer, SmallVec};
use taskboard_runtime::Store;

#[derive(Debug, Clone, Default, PartialEq)]
struct ListState {
    items: Vec<u32>,
}

#[derive(Debug, Clone)]
enum ListAction {
    Push(u32),
    Remove(u32),
}

struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Action = ListAction;
    type Environment = ();
    type Error = Infallible;

    fn reduce(
        &self,
        state: &mut ListState,
        action: ListAction,
        _env: &(),
    ) -> Result<Effects<ListAction>, Infallible> {
        match action {
            ListAction::Push(item) => state.items.insert(0, item),
            ListAction::Remove(item) => state.items.retain(|i| *i != item),
        }
        Ok(SmallVec::new())
    }
}

#[tokio::test]
async fn subscriber_receives_each_published_snapshot() {
    let mut store = Store::new(ListState::default(), ListReducer, ());
    let mut rx = store.subscribe();

    let observer = tokio::spawn(async move {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let snapshot = Arc::clone(&rx.borrow_and_update());
            seen.push(snapshot.items.clone());
            if snapshot.items.len() == 2 {
                break;
            }
        }
        seen
    });

    store.send(ListAction::Push(1)).unwrap();
    tokio::task::yield_now().await;
    store.send(ListAction::Push(2)).unwrap();

    let seen = observer.await.unwrap();
    assert_eq!(seen.last(), Some(&vec![2, 1]));
}

#[tokio::test]
async fn dropping_store_closes_subscription() {
    let store = Store::new(ListState::default(), ListReducer, ());
    let mut rx = store.subscribe();

    drop(store);

    assert!(rx.changed().await.is_err());
}

proptest! {
    #[test]
    fn held_snapshots_never_change(pushes in proptest::collection::vec(0u32..50, 1..20)) {
        let mut store = Store::new(ListState::default(), ListReducer, ());
        let mut held = Vec::new();

        for item in &pushes {
            let snapshot = store.send(ListAction::Push(*item)).unwrap();
            held.push((Arc::clone(&snapshot), snapshot.items.clone()));
        }
        store.send(ListAction::Remove(pushes[0])).unwrap();

        for (snapshot, items) in held {
            prop_assert_eq!(&snapshot.items, &items);
        }
    }
}
