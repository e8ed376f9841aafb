use std::cell::RefCell;

use soroban_sdk::Env;
use tideswap_order_core::{active_push, active_swap_remove};

struct ListState {
    count: RefCell<u32>,
    slots: RefCell<Vec<Option<u64>>>,
}

impl ListState {
    fn new() -> Self {
        Self {
            count: RefCell::new(0),
            slots: RefCell::new(vec![None; 16]),
        }
    }

    fn ids(&self) -> Vec<u64> {
        let count = *self.count.borrow() as usize;
        self.slots.borrow()[..count]
            .iter()
            .map(|slot| slot.unwrap())
            .collect()
    }
}

fn push(env: &Env, state: &ListState, id: u64) -> u32 {
    active_push(
        env,
        |_| *state.count.borrow(),
        |_, c| *state.count.borrow_mut() = c,
        |_, i, v| state.slots.borrow_mut()[i as usize] = Some(v),
        id,
    )
}

fn remove(env: &Env, state: &ListState, index: u32) -> Option<u64> {
    active_swap_remove(
        env,
        |_| *state.count.borrow(),
        |_, c| *state.count.borrow_mut() = c,
        |_, i| state.slots.borrow()[i as usize].unwrap(),
        |_, i, v| state.slots.borrow_mut()[i as usize] = Some(v),
        |_, i| state.slots.borrow_mut()[i as usize] = None,
        index,
    )
}

#[test]
fn test_push_assigns_sequential_indices() {
    let env = Env::default();
    let state = ListState::new();

    assert_eq!(push(&env, &state, 10), 0);
    assert_eq!(push(&env, &state, 20), 1);
    assert_eq!(push(&env, &state, 30), 2);
    assert_eq!(state.ids(), vec![10, 20, 30]);
}

#[test]
fn test_remove_middle_swaps_last_in() {
    let env = Env::default();
    let state = ListState::new();

    push(&env, &state, 10);
    push(&env, &state, 20);
    push(&env, &state, 30);

    let moved = remove(&env, &state, 0);
    assert_eq!(moved, Some(30), "last id moves into the vacated index");
    assert_eq!(state.ids(), vec![30, 20]);

    // The truncated slot is actually cleared
    assert_eq!(state.slots.borrow()[2], None);
}

#[test]
fn test_remove_last_moves_nothing() {
    let env = Env::default();
    let state = ListState::new();

    push(&env, &state, 10);
    push(&env, &state, 20);

    let moved = remove(&env, &state, 1);
    assert_eq!(moved, None);
    assert_eq!(state.ids(), vec![10]);
}

#[test]
fn test_remove_only_entry_empties_list() {
    let env = Env::default();
    let state = ListState::new();

    push(&env, &state, 42);
    let moved = remove(&env, &state, 0);

    assert_eq!(moved, None);
    assert_eq!(*state.count.borrow(), 0);
}

#[test]
#[should_panic(expected = "active index out of bounds")]
fn test_remove_out_of_range_panics() {
    let env = Env::default();
    let state = ListState::new();

    push(&env, &state, 10);
    remove(&env, &state, 1);
}

#[test]
fn test_reuse_after_removal() {
    let env = Env::default();
    let state = ListState::new();

    push(&env, &state, 10);
    push(&env, &state, 20);
    remove(&env, &state, 0);

    // The freed index is handed out again
    assert_eq!(push(&env, &state, 30), 1);
    assert_eq!(state.ids(), vec![20, 30]);
}
