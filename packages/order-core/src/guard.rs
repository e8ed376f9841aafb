// Reentrancy latch for trigger entry points

use soroban_sdk::{Env, Symbol};

const LATCH: &str = "reentrancy";

/// Scoped reentrancy latch backed by instance storage.
///
/// Taking the guard while another one is live in the same invocation tree
/// panics, which rolls the transaction back. The latch clears when the guard
/// drops at the end of the entry point.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn lock(env: &Env) -> Self {
        let key = Symbol::new(env, LATCH);
        if env.storage().instance().has(&key) {
            panic!("reentrant call");
        }
        env.storage().instance().set(&key, &true);
        Self { env: env.clone() }
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        let key = Symbol::new(&self.env, LATCH);
        self.env.storage().instance().remove(&key);
    }
}
