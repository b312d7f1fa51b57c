//! Process-wide interception state
//!
//! The patching engine rewires the HTTP client process-wide, so whether
//! interception is currently on is a single piece of shared state. It is
//! held behind a mutex and only ever mutated through
//! [`UnpatchedScope`](crate::UnpatchedScope); a second thread that tries
//! to enter the scope while it is held observes `Unpatched` and is
//! rejected rather than racing the toggle.

use parking_lot::Mutex;

/// Whether the HTTP client is currently patched for interception.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptionState {
    /// Interception is active: HTTP calls are redirected to cassettes
    Patched,
    /// Interception is disabled: HTTP calls reach the network
    Unpatched,
}

/// Owner of the interception state.
///
/// The process-wide instance is [`InterceptionFlag::global`], which
/// starts `Patched` (the hosting default: a recorder process patches the
/// client at startup). Separate instances exist so tests do not share
/// state across threads.
#[derive(Debug)]
pub struct InterceptionFlag {
    state: Mutex<InterceptionState>,
}

static GLOBAL: InterceptionFlag = InterceptionFlag {
    state: Mutex::new(InterceptionState::Patched),
};

impl InterceptionFlag {
    /// Create a flag in the given initial state
    pub const fn new(initial: InterceptionState) -> Self {
        InterceptionFlag {
            state: Mutex::new(initial),
        }
    }

    /// The process-wide flag
    pub fn global() -> &'static InterceptionFlag {
        &GLOBAL
    }

    /// Current state
    pub fn state(&self) -> InterceptionState {
        *self.state.lock()
    }

    /// Atomically transition `from -> to`.
    ///
    /// Returns false (and changes nothing) if the current state is not
    /// `from`. This is the only mutation path; it keeps check-then-set
    /// races out of the scope type.
    pub(crate) fn transition(&self, from: InterceptionState, to: InterceptionState) -> bool {
        let mut state = self.state.lock();
        if *state == from {
            *state = to;
            true
        } else {
            false
        }
    }
}

impl Default for InterceptionFlag {
    fn default() -> Self {
        InterceptionFlag::new(InterceptionState::Patched)
    }
}
