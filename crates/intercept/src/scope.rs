//! The unpatched scope
//!
//! [`UnpatchedScope`] is the guaranteed-restore construct: it disables
//! interception on entry and re-enables it on exit, whether the exit is
//! an explicit [`restore`](UnpatchedScope::restore), an early return, or
//! a panic unwinding through the scope.
//!
//! A restore failure is never confused with a failure of the caller's
//! own logic: it surfaces as [`InterceptError::Restore`] on the explicit
//! path, and is logged from `Drop` on the unwind path (where nothing can
//! be returned).

use crate::{InterceptionFlag, InterceptionState};
use thiserror::Error;

/// Error reported by the external patching engine.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PatchError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PatchError {
    /// Create a patch error from a message
    pub fn new(message: impl Into<String>) -> Self {
        PatchError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a patch error wrapping an underlying error
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PatchError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Errors raised by the scoped toggle itself.
#[derive(Debug, Error)]
pub enum InterceptError {
    /// The scope was entered while interception was already disabled.
    ///
    /// Nested scopes are rejected rather than counted: the construct
    /// exists for exactly one real call at a time, and a counter would
    /// hide toggle mismatches.
    #[error("interception is already disabled")]
    AlreadyUnpatched,

    /// The patching engine failed to disable interception on entry
    #[error("failed to disable interception")]
    Disable(#[source] PatchError),

    /// The patching engine failed to re-enable interception on exit.
    ///
    /// Distinct from any failure of the caller's logic: when this is
    /// returned, the body already ran (and may have succeeded).
    #[error("failed to restore interception after the scope exited")]
    Restore(#[source] PatchError),
}

/// The external patching engine, as consumed by the toggle.
///
/// Implemented by the interception layer, not by this crate. `unpatch`
/// rewires the HTTP client back to the real network; `patch` re-installs
/// interception for the given cassette/library context.
pub trait Patcher {
    /// Opaque handle identifying which cassette/library state to restore
    /// interception for
    type Context;

    /// Disable interception
    fn unpatch(&mut self) -> Result<(), PatchError>;

    /// Re-enable interception for `context`
    fn patch(&mut self, context: &Self::Context) -> Result<(), PatchError>;
}

/// A span of code with interception disabled.
///
/// Created by [`UnpatchedScope::enter`]; interception is re-enabled when
/// the scope is [`restore`](UnpatchedScope::restore)d or dropped.
#[must_use = "dropping the scope immediately re-enables interception"]
pub struct UnpatchedScope<'a, P: Patcher> {
    flag: &'a InterceptionFlag,
    patcher: &'a mut P,
    context: &'a P::Context,
    restored: bool,
}

impl<'a, P: Patcher> UnpatchedScope<'a, P> {
    /// Disable interception and enter the scope.
    ///
    /// Transitions the flag `Patched -> Unpatched` and calls
    /// [`Patcher::unpatch`]. Fails with
    /// [`InterceptError::AlreadyUnpatched`] if interception is already
    /// off, and with [`InterceptError::Disable`] if the patching engine
    /// refuses (in which case the flag is rolled back to `Patched`).
    pub fn enter(
        flag: &'a InterceptionFlag,
        patcher: &'a mut P,
        context: &'a P::Context,
    ) -> Result<Self, InterceptError> {
        if !flag.transition(InterceptionState::Patched, InterceptionState::Unpatched) {
            return Err(InterceptError::AlreadyUnpatched);
        }
        if let Err(e) = patcher.unpatch() {
            // The client is still patched; put the flag back
            flag.transition(InterceptionState::Unpatched, InterceptionState::Patched);
            return Err(InterceptError::Disable(e));
        }
        tracing::debug!("interception disabled");
        Ok(UnpatchedScope {
            flag,
            patcher,
            context,
            restored: false,
        })
    }

    /// Re-enable interception and leave the scope.
    ///
    /// On [`InterceptError::Restore`] the flag stays `Unpatched`, which
    /// reflects reality: the patching engine did not re-install.
    pub fn restore(mut self) -> Result<(), InterceptError> {
        self.restored = true;
        self.restore_now()
    }

    fn restore_now(&mut self) -> Result<(), InterceptError> {
        self.patcher
            .patch(self.context)
            .map_err(InterceptError::Restore)?;
        self.flag
            .transition(InterceptionState::Unpatched, InterceptionState::Patched);
        tracing::debug!("interception restored");
        Ok(())
    }
}

// Manual impl: the patcher and context need no Debug of their own
impl<P: Patcher> std::fmt::Debug for UnpatchedScope<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnpatchedScope")
            .field("state", &self.flag.state())
            .field("restored", &self.restored)
            .finish_non_exhaustive()
    }
}

impl<P: Patcher> Drop for UnpatchedScope<'_, P> {
    fn drop(&mut self) {
        if !self.restored {
            self.restored = true;
            if let Err(e) = self.restore_now() {
                // Drop cannot return; this path is reached on early
                // returns and panic unwinds
                tracing::error!(error = %e, "failed to restore interception on scope drop");
            }
        }
    }
}

/// Run `body` with interception disabled on the process-wide flag.
///
/// Restoration is guaranteed on every exit path; if the body panics, the
/// scope restores during unwind. A restore failure is reported even when
/// the body succeeded.
pub fn without_interception<P, T>(
    patcher: &mut P,
    context: &P::Context,
    body: impl FnOnce() -> T,
) -> Result<T, InterceptError>
where
    P: Patcher,
{
    without_interception_on(InterceptionFlag::global(), patcher, context, body)
}

/// [`without_interception`] against an explicit flag.
pub fn without_interception_on<P, T>(
    flag: &InterceptionFlag,
    patcher: &mut P,
    context: &P::Context,
    body: impl FnOnce() -> T,
) -> Result<T, InterceptError>
where
    P: Patcher,
{
    let scope = UnpatchedScope::enter(flag, patcher, context)?;
    let out = body();
    scope.restore()?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records patch/unpatch calls and optionally fails them.
    struct TestPatcher {
        unpatch_calls: usize,
        patch_calls: usize,
        contexts: Vec<String>,
        fail_unpatch: bool,
        fail_patch: bool,
    }

    impl TestPatcher {
        fn new() -> Self {
            TestPatcher {
                unpatch_calls: 0,
                patch_calls: 0,
                contexts: Vec::new(),
                fail_unpatch: false,
                fail_patch: false,
            }
        }
    }

    impl Patcher for TestPatcher {
        type Context = String;

        fn unpatch(&mut self) -> Result<(), PatchError> {
            if self.fail_unpatch {
                return Err(PatchError::new("unpatch refused"));
            }
            self.unpatch_calls += 1;
            Ok(())
        }

        fn patch(&mut self, context: &String) -> Result<(), PatchError> {
            if self.fail_patch {
                return Err(PatchError::new("patch refused"));
            }
            self.patch_calls += 1;
            self.contexts.push(context.clone());
            Ok(())
        }
    }

    fn ctx() -> String {
        "library".to_string()
    }

    // === Normal path ===

    #[test]
    fn test_enter_and_restore() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        let context = ctx();

        let scope = UnpatchedScope::enter(&flag, &mut patcher, &context).unwrap();
        assert_eq!(flag.state(), InterceptionState::Unpatched);
        scope.restore().unwrap();

        assert_eq!(flag.state(), InterceptionState::Patched);
        assert_eq!(patcher.unpatch_calls, 1);
        assert_eq!(patcher.patch_calls, 1);
        assert_eq!(patcher.contexts, vec!["library".to_string()]);
    }

    #[test]
    fn test_without_interception_returns_body_output() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        let context = ctx();

        let out =
            without_interception_on(&flag, &mut patcher, &context, || 42).unwrap();

        assert_eq!(out, 42);
        assert_eq!(flag.state(), InterceptionState::Patched);
    }

    #[test]
    fn test_body_observes_unpatched_state() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        let context = ctx();

        let seen = without_interception_on(&flag, &mut patcher, &context, || flag.state())
            .unwrap();

        assert_eq!(seen, InterceptionState::Unpatched);
    }

    // === Error exit paths ===

    #[test]
    fn test_body_error_still_restores() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        let context = ctx();

        let out: Result<Result<(), &str>, _> =
            without_interception_on(&flag, &mut patcher, &context, || Err("body failed"));

        // The body's own error comes back intact...
        assert_eq!(out.unwrap(), Err("body failed"));
        // ...and interception is back on
        assert_eq!(flag.state(), InterceptionState::Patched);
        assert_eq!(patcher.patch_calls, 1);
    }

    #[test]
    fn test_drop_restores_on_early_exit() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        let context = ctx();

        {
            let _scope = UnpatchedScope::enter(&flag, &mut patcher, &context).unwrap();
            // dropped without an explicit restore
        }

        assert_eq!(flag.state(), InterceptionState::Patched);
        assert_eq!(patcher.patch_calls, 1);
    }

    #[test]
    fn test_panic_in_body_restores() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        let context = ctx();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            without_interception_on(&flag, &mut patcher, &context, || {
                panic!("body blew up")
            })
        }));

        assert!(result.is_err());
        assert_eq!(flag.state(), InterceptionState::Patched);
        assert_eq!(patcher.patch_calls, 1);
    }

    // === Collaborator failures ===

    #[test]
    fn test_disable_failure_rolls_back_flag() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        patcher.fail_unpatch = true;
        let context = ctx();

        let err = UnpatchedScope::enter(&flag, &mut patcher, &context).unwrap_err();

        assert!(matches!(err, InterceptError::Disable(_)));
        assert_eq!(flag.state(), InterceptionState::Patched);
    }

    #[test]
    fn test_restore_failure_is_distinct_from_body_failure() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        patcher.fail_patch = true;
        let context = ctx();

        // Body succeeds; only the restore fails
        let err = without_interception_on(&flag, &mut patcher, &context, || 42).unwrap_err();

        assert!(matches!(err, InterceptError::Restore(_)));
        // The flag reflects reality: interception never came back
        assert_eq!(flag.state(), InterceptionState::Unpatched);
    }

    // === Reentrancy ===

    #[test]
    fn test_nested_enter_is_rejected() {
        let flag = InterceptionFlag::default();
        let mut outer = TestPatcher::new();
        let mut inner = TestPatcher::new();
        let context = ctx();

        let scope = UnpatchedScope::enter(&flag, &mut outer, &context).unwrap();
        let err = UnpatchedScope::enter(&flag, &mut inner, &context).unwrap_err();
        assert!(matches!(err, InterceptError::AlreadyUnpatched));

        scope.restore().unwrap();
        // The outer scope is unaffected by the rejected inner attempt
        assert_eq!(flag.state(), InterceptionState::Patched);
        assert_eq!(inner.unpatch_calls, 0);
    }

    #[test]
    fn test_reenter_after_restore_succeeds() {
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        let context = ctx();

        without_interception_on(&flag, &mut patcher, &context, || ()).unwrap();
        without_interception_on(&flag, &mut patcher, &context, || ()).unwrap();

        assert_eq!(patcher.unpatch_calls, 2);
        assert_eq!(patcher.patch_calls, 2);
    }

    // === Debug ===

    #[test]
    fn test_scope_is_debuggable_without_patcher_debug() {
        // TestPatcher derives nothing; `unwrap_err` on enter() needs this
        let flag = InterceptionFlag::default();
        let mut patcher = TestPatcher::new();
        let context = ctx();

        let scope = UnpatchedScope::enter(&flag, &mut patcher, &context).unwrap();
        let rendered = format!("{scope:?}");
        assert!(rendered.contains("UnpatchedScope"));
        assert!(rendered.contains("state: Unpatched"));
        scope.restore().unwrap();
    }

    // === PatchError ===

    #[test]
    fn test_patch_error_carries_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "socket gone");
        let err = PatchError::with_source("re-wire failed", io);
        assert_eq!(err.to_string(), "re-wire failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
