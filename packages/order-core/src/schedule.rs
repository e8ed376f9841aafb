// Self-rescheduling state returned by trigger handlers

use soroban_sdk::{contracttype, Env};

/// What a trigger pass wants to happen next.
///
/// An armed wake asks the keeper to call again at `target_ledger`; a
/// disarmed one means no live work remains and the scheduler sleeps until
/// new orders arrive.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextWake {
    pub armed: bool,
    pub target_ledger: u32,
}

impl NextWake {
    pub fn at(target_ledger: u32) -> Self {
        Self {
            armed: true,
            target_ledger,
        }
    }

    pub fn idle() -> Self {
        Self {
            armed: false,
            target_ledger: 0,
        }
    }

    /// Earlier of two wakes; anything armed beats idle
    pub fn soonest(self, other: NextWake) -> NextWake {
        match (self.armed, other.armed) {
            (true, true) => {
                if self.target_ledger <= other.target_ledger {
                    self
                } else {
                    other
                }
            }
            (true, false) => self,
            (false, _) => other,
        }
    }
}

/// The next ledger sequence, the soonest a trigger can fire again
#[inline]
pub fn next_ledger(env: &Env) -> u32 {
    env.ledger().sequence().saturating_add(1)
}

/// Persist an armed wake through the caller's trigger-state slot
pub fn arm(env: &Env, write_trigger: impl Fn(&Env, &NextWake), target_ledger: u32) -> NextWake {
    let wake = NextWake::at(target_ledger);
    write_trigger(env, &wake);
    wake
}

/// Persist a disarmed wake; the scheduler sleeps until new orders arrive
pub fn disarm(env: &Env, write_trigger: impl Fn(&Env, &NextWake)) -> NextWake {
    let wake = NextWake::idle();
    write_trigger(env, &wake);
    wake
}
