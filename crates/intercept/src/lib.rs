//! Scoped interception toggle for tapedeck
//!
//! Code under record/replay talks to a patched HTTP client. Occasionally
//! a real, unintercepted network call has to be made from inside that
//! code; this crate provides the construct that makes it safe: disable
//! interception, run the caller's logic, and re-enable interception on
//! every exit path, the way a lock is always released.
//!
//! The patching engine itself lives elsewhere and is consumed through
//! the [`Patcher`] trait: `unpatch` disables interception, `patch`
//! re-enables it for a given cassette/library context.
//!
//! ## Lifecycle
//!
//! ```text
//! 1. UnpatchedScope::enter()  - Patched -> Unpatched via Patcher::unpatch
//! 2. caller logic runs        - real network calls go through
//! 3. scope.restore()          - Unpatched -> Patched via Patcher::patch
//! ```
//!
//! If step 2 returns early, errors out, or panics, step 3 still runs from
//! `Drop`. Entering while already unpatched is rejected with
//! [`InterceptError::AlreadyUnpatched`]; nesting is not supported.
//!
//! ## Example
//!
//! ```
//! use tapedeck_intercept::{InterceptionFlag, Patcher, PatchError, UnpatchedScope};
//!
//! struct NoopPatcher;
//! impl Patcher for NoopPatcher {
//!     type Context = ();
//!     fn unpatch(&mut self) -> Result<(), PatchError> { Ok(()) }
//!     fn patch(&mut self, _: &()) -> Result<(), PatchError> { Ok(()) }
//! }
//!
//! let flag = InterceptionFlag::default();
//! let mut patcher = NoopPatcher;
//! let scope = UnpatchedScope::enter(&flag, &mut patcher, &()).unwrap();
//! // ... one real network call ...
//! scope.restore().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod flag;
mod scope;

pub use flag::{InterceptionFlag, InterceptionState};
pub use scope::{
    without_interception, without_interception_on, InterceptError, PatchError, Patcher,
    UnpatchedScope,
};
