//! In-memory local repository and progress recorder

use gh_sweep::error::{Error, Result};
use gh_sweep::repo::LocalRepository;
use gh_sweep::sweep::{SweepEvent, SweepProgress};
use std::collections::HashMap;
use std::sync::Mutex;

/// Local repository that records deletions instead of running git
pub struct MockRepository {
    branch_lines: Vec<String>,
    delete_calls: Mutex<Vec<String>>,
    delete_errors: Mutex<HashMap<String, String>>,
}

impl MockRepository {
    /// Repository whose `git branch` output is `lines`
    pub fn with_branch_lines(lines: &[&str]) -> Self {
        Self {
            branch_lines: lines.iter().map(ToString::to_string).collect(),
            delete_calls: Mutex::new(Vec::new()),
            delete_errors: Mutex::new(HashMap::new()),
        }
    }

    /// Repository with no branches listed
    pub fn empty() -> Self {
        Self::with_branch_lines(&[])
    }

    /// Make deleting `branch` fail
    pub fn fail_delete(&self, branch: &str, msg: &str) {
        self.delete_errors
            .lock()
            .unwrap()
            .insert(branch.to_string(), msg.to_string());
    }

    /// Branches `delete_branch` was called with, in order
    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }
}

impl LocalRepository for MockRepository {
    fn list_branches(&self) -> Result<Vec<String>> {
        Ok(self.branch_lines.clone())
    }

    fn delete_branch(&self, name: &str) -> Result<()> {
        self.delete_calls.lock().unwrap().push(name.to_string());
        if let Some(msg) = self.delete_errors.lock().unwrap().get(name) {
            return Err(Error::BranchDeletion {
                branch: name.to_string(),
                message: msg.clone(),
            });
        }
        Ok(())
    }
}

/// Progress sink that keeps every event
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<SweepEvent>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event received, in order
    pub fn events(&self) -> Vec<SweepEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events other than `Checking`, in order
    pub fn reports(&self) -> Vec<SweepEvent> {
        self.events()
            .into_iter()
            .filter(|e| !matches!(e, SweepEvent::Checking { .. }))
            .collect()
    }
}

impl SweepProgress for RecordingProgress {
    fn on_event(&self, event: &SweepEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
