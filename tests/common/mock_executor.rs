//! Mock command executor, ancestry oracle and progress callback
//!
//! These manually implement the traits rather than using a mocking crate so
//! call order can be asserted directly.

use async_trait::async_trait;
use premerge::error::{Error, Result};
use premerge::exec::CommandExecutor;
use premerge::git::AncestryOracle;
use premerge::progress::ProgressCallback;
use premerge::types::{MergeOutcome, PrNumber};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

/// Scriptable executor
///
/// Features:
/// - Call tracking (command lines joined with spaces)
/// - Persistent exit codes per command line
/// - One-shot exit code queues per command line, consumed in order
/// - Interrupt injection
///
/// Unscripted commands succeed.
#[derive(Default)]
pub struct MockExecutor {
    calls: Mutex<Vec<String>>,
    exit_codes: Mutex<HashMap<String, i32>>,
    scripted: Mutex<HashMap<String, VecDeque<i32>>>,
    interrupt_on: Mutex<HashSet<String>>,
}

impl MockExecutor {
    /// Executor where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    // === Response setup ===

    /// Make `command` always exit with `code`
    pub fn fail(&self, command: &str, code: i32) {
        self.exit_codes
            .lock()
            .unwrap()
            .insert(command.to_string(), code);
    }

    /// Queue exit codes for successive runs of `command`
    ///
    /// Once the queue is drained, the persistent code (or 0) applies.
    pub fn script(&self, command: &str, codes: &[i32]) {
        self.scripted
            .lock()
            .unwrap()
            .entry(command.to_string())
            .or_default()
            .extend(codes.iter().copied());
    }

    /// Make `command` fail as if the wait was interrupted
    pub fn interrupt_on(&self, command: &str) {
        self.interrupt_on
            .lock()
            .unwrap()
            .insert(command.to_string());
    }

    // === Call verification ===

    /// All command lines run, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether `command` was run
    pub fn was_called(&self, command: &str) -> bool {
        self.calls().iter().any(|c| c == command)
    }

    /// How many times `command` was run
    pub fn call_count(&self, command: &str) -> usize {
        self.calls().iter().filter(|c| *c == command).count()
    }

    /// Command lines starting with `prefix`, in order
    pub fn calls_starting_with(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    /// Assert `command` was run
    pub fn assert_called(&self, command: &str) {
        let calls = self.calls();
        assert!(
            calls.iter().any(|c| c == command),
            "Expected `{command}` but got: {calls:#?}"
        );
    }

    /// Assert `command` was NOT run
    pub fn assert_not_called(&self, command: &str) {
        let calls = self.calls();
        assert!(
            !calls.iter().any(|c| c == command),
            "Expected `{command}` NOT to run but it did: {calls:#?}"
        );
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn run(&self, command: &[&str], _bind_stdio: bool) -> Result<i32> {
        let line = command.join(" ");
        self.calls.lock().unwrap().push(line.clone());

        if self.interrupt_on.lock().unwrap().contains(&line) {
            return Err(Error::Interrupted(line));
        }

        if let Some(code) = self
            .scripted
            .lock()
            .unwrap()
            .get_mut(&line)
            .and_then(VecDeque::pop_front)
        {
            return Ok(code);
        }

        Ok(self
            .exit_codes
            .lock()
            .unwrap()
            .get(&line)
            .copied()
            .unwrap_or(0))
    }
}

/// Ancestry oracle answering from a fixed set of (ancestor, descendant) pairs
#[derive(Default)]
pub struct MockAncestry {
    pairs: Mutex<HashSet<(String, String)>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockAncestry {
    /// Oracle that answers `false` to everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `true` for `ancestor` in `descendant`
    pub fn set_ancestor(&self, ancestor: &str, descendant: &str) {
        self.pairs
            .lock()
            .unwrap()
            .insert((ancestor.to_string(), descendant.to_string()));
    }

    /// All questions asked, in order
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AncestryOracle for MockAncestry {
    async fn is_ancestor(&self, ancestor: &str, descendant: &str) -> bool {
        let key = (ancestor.to_string(), descendant.to_string());
        self.calls.lock().unwrap().push(key.clone());
        self.pairs.lock().unwrap().contains(&key)
    }
}

/// Recorded progress event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// `on_pr_started`
    Started(PrNumber),
    /// `on_pr_finished`
    Finished(PrNumber, MergeOutcome),
    /// `on_message`
    Message(String),
}

/// Progress callback that records every event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, in order
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// PR numbers in the order they were started
    pub fn started_order(&self) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Started(pr) => Some(pr.get()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_pr_started(&self, pr: PrNumber) {
        self.events.lock().unwrap().push(ProgressEvent::Started(pr));
    }

    async fn on_pr_finished(&self, pr: PrNumber, outcome: &MergeOutcome) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Finished(pr, *outcome));
    }

    async fn on_message(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Message(message.to_string()));
    }
}
