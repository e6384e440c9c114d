//! Process-wide run-once guard.
//!
//! A duplicated checker install means the host may instantiate this analysis
//! more than once in a single process. The first instance wins; later ones
//! are no-ops. The guard is an explicit process-lifetime flag, not a
//! host-object lookup.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::check::{CheckInput, CheckOutput, run_check};

#[derive(Debug, Default)]
pub struct RunGuard {
    ran: AtomicBool,
}

impl RunGuard {
    pub const fn new() -> Self {
        Self {
            ran: AtomicBool::new(false),
        }
    }

    /// Claim the single run. True exactly once per guard.
    pub fn try_acquire(&self) -> bool {
        !self.ran.swap(true, Ordering::SeqCst)
    }

    pub fn has_run(&self) -> bool {
        self.ran.load(Ordering::SeqCst)
    }
}

static PROCESS_GUARD: RunGuard = RunGuard::new();

/// The guard shared by every caller in this process.
pub fn process_guard() -> &'static RunGuard {
    &PROCESS_GUARD
}

/// Run the check at most once per process lifetime.
///
/// Returns `None` when a prior call already claimed the run.
pub fn run_check_once(input: CheckInput<'_>) -> anyhow::Result<Option<CheckOutput>> {
    if !PROCESS_GUARD.try_acquire() {
        return Ok(None);
    }
    run_check(input).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonyguard_settings::Overrides;

    #[test]
    fn guard_claims_exactly_once() {
        let guard = RunGuard::new();
        assert!(!guard.has_run());
        assert!(guard.try_acquire());
        assert!(guard.has_run());
        assert!(!guard.try_acquire());
        assert!(!guard.try_acquire());
    }

    #[test]
    fn second_process_run_is_a_no_op() {
        // This test owns the process-global guard; no other test touches it.
        let input = CheckInput {
            components: &[],
            config_text: "",
            overrides: Overrides::default(),
        };

        let first = run_check_once(input.clone()).expect("first run");
        assert!(first.is_some());

        let second = run_check_once(input).expect("second run");
        assert!(second.is_none());
    }
}
