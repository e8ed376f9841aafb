// Dense index of live order ids
//
// Each scheduler keeps a count plus one storage slot per index so that a
// trigger pass can walk live orders without scanning id space. Removal swaps
// the last entry into the vacated index and truncates, so the list stays
// dense and removal is O(1).

use soroban_sdk::Env;

/// Append an id to the active list and return the index it landed on
pub fn active_push(
    env: &Env,
    read_count: impl Fn(&Env) -> u32,
    write_count: impl Fn(&Env, u32),
    write_slot: impl Fn(&Env, u32, u64),
    id: u64,
) -> u32 {
    let count = read_count(env);
    write_slot(env, count, id);
    write_count(env, count + 1);
    count
}

/// Remove the entry at `index`, keeping the list dense.
///
/// Returns the id that was relocated into `index`, if any, so the caller can
/// update that order's stored index. Panics on an out-of-range index since
/// indices only come from the schedulers' own bookkeeping.
pub fn active_swap_remove(
    env: &Env,
    read_count: impl Fn(&Env) -> u32,
    write_count: impl Fn(&Env, u32),
    read_slot: impl Fn(&Env, u32) -> u64,
    write_slot: impl Fn(&Env, u32, u64),
    clear_slot: impl Fn(&Env, u32),
    index: u32,
) -> Option<u64> {
    let count = read_count(env);
    if index >= count {
        panic!("active index out of bounds");
    }

    let last = count - 1;
    let moved = if index < last {
        let moved_id = read_slot(env, last);
        write_slot(env, index, moved_id);
        Some(moved_id)
    } else {
        None
    };

    clear_slot(env, last);
    write_count(env, last);

    moved
}
