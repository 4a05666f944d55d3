//! Property tests for `RemoteSession` probing and aggregation

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use proptest::prelude::*;
use remoteops_core::{
    CommandRunner, HostStyle, InvocationMode, OperationKind, OperationResult, RemoteSession,
    SessionConfig, TransportCommand,
};

/// Returns queued results in order, then `fallback`; counts invocations
struct QueueRunner {
    queue: RefCell<VecDeque<OperationResult>>,
    fallback: OperationResult,
    calls: Cell<usize>,
}

impl QueueRunner {
    fn new(queue: Vec<OperationResult>, fallback: OperationResult) -> Self {
        Self {
            queue: RefCell::new(queue.into()),
            fallback,
            calls: Cell::new(0),
        }
    }
}

impl CommandRunner for QueueRunner {
    fn execute(&self, _command: &TransportCommand, _mode: InvocationMode) -> OperationResult {
        self.calls.set(self.calls.get() + 1);
        self.queue
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

fn config(retries: u32) -> SessionConfig {
    SessionConfig::new("user@host")
        .with_host_style(HostStyle::Posix)
        .with_retries(retries, Duration::ZERO)
}

fn arb_kind() -> impl Strategy<Value = OperationKind> {
    prop::sample::select(OperationKind::ALL.to_vec())
}

proptest! {
    /// Property: an always-failing probe is attempted exactly N + 1 times and
    /// the last failure is kept
    #[test]
    fn failing_probe_attempted_retries_plus_one(retries in 0u32..8, code in 1i32..256) {
        let runner = QueueRunner::new(Vec::new(), OperationResult::new(code, "unreachable"));
        let session = RemoteSession::with_runner(config(retries), &runner);

        prop_assert_eq!(runner.calls.get(), retries as usize + 1);
        prop_assert!(!session.is_reachable());
        prop_assert_eq!(session.reachability_info(), OperationResult::new(code, "unreachable"));
    }

    /// Property: reachability is exactly "probe exit code is zero"
    #[test]
    fn reachable_iff_probe_code_zero(code in -1i32..256) {
        let runner = QueueRunner::new(Vec::new(), OperationResult::new(code, ""));
        let session = RemoteSession::with_runner(config(0), &runner);
        prop_assert_eq!(session.is_reachable(), code == 0);
    }

    /// Property: an unreachable session returns the cached probe for every
    /// operation without spawning anything
    #[test]
    fn unreachable_session_never_spawns(
        kind in arb_kind(),
        params in prop::collection::vec("[a-z]{1,8}", 0..4),
        dir in prop::option::of("/[a-z]{1,8}"),
    ) {
        let runner = QueueRunner::new(Vec::new(), OperationResult::new(255, "down"));
        let session = RemoteSession::with_runner(config(0), &runner);
        let before = runner.calls.get();

        let result = session.run(kind, params, dir.as_deref());

        prop_assert_eq!(result.ok(), Some(OperationResult::new(255, "down")));
        prop_assert_eq!(runner.calls.get(), before);
    }

    /// Property: copy_from issues one transfer per file and reports the first
    /// non-zero exit code
    #[test]
    fn copy_from_aggregates_each_file(codes in prop::collection::vec(0i32..3, 1..8)) {
        let dir = tempfile::tempdir().unwrap();
        let mut queue = vec![OperationResult::new(0, "")];
        queue.extend(codes.iter().enumerate().map(|(i, code)| {
            OperationResult::new(*code, format!("file{i}\n"))
        }));
        let runner = QueueRunner::new(queue, OperationResult::new(0, ""));
        let session = RemoteSession::with_runner(config(0), &runner);

        let files: Vec<String> = (0..codes.len()).map(|i| format!("remote{i}")).collect();
        let result = session.copy_from(files, dir.path().to_str()).unwrap();

        let expected_code = codes.iter().copied().find(|c| *c != 0).unwrap_or(0);
        let expected_output: String = (0..codes.len()).map(|i| format!("file{i}\n")).collect();

        prop_assert_eq!(runner.calls.get(), codes.len() + 1);
        prop_assert_eq!(result.exit_code, expected_code);
        prop_assert_eq!(result.output, expected_output);
    }
}
