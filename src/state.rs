//! View State
//!
//! The task list's state struct and its transitions. The component keeps one
//! `TaskListState` behind an `RwSignal` and mutates it only through these
//! methods, so the flag/epoch invariants hold no matter which handler runs.

use crate::error::ApiError;
use crate::models::Task;

/// Which of the three mutually exclusive screens to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Empty,
    Populated,
}

/// State owned by `TaskListView`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub draft: String,
    pub is_loading: bool,
    pub is_creating: bool,
    pub error: Option<String>,
    load_epoch: u64,
}

impl TaskListState {
    /// Starts a tracked load and returns its epoch token.
    ///
    /// A newer `begin_load` supersedes any in-flight load: the superseded
    /// load's settlement is discarded by `finish_load`.
    pub fn begin_load(&mut self) -> u64 {
        self.load_epoch += 1;
        self.is_loading = true;
        self.error = None;
        self.load_epoch
    }

    /// Settles a load. Returns `false` (and changes nothing) if the token is
    /// stale. The current load always clears `is_loading`, success or failure.
    pub fn finish_load(&mut self, token: u64, result: Result<Vec<Task>, ApiError>) -> bool {
        if token != self.load_epoch {
            return false;
        }
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
            }
            Err(error) => {
                self.tasks.clear();
                self.error = Some(error.to_string());
            }
        }
        self.is_loading = false;
        true
    }

    pub fn set_draft(&mut self, text: String) {
        self.draft = text;
    }

    /// Starts a create; the submit control stays disabled until
    /// `finish_create` runs.
    pub fn begin_create(&mut self) {
        self.is_creating = true;
        self.error = None;
    }

    /// Settles a create. Success clears the draft buffer; failure keeps it so
    /// the user can retry. The creating flag is cleared on both paths.
    pub fn finish_create(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.draft.clear(),
            Err(error) => self.error = Some(error.to_string()),
        }
        self.is_creating = false;
    }

    /// Post-condition of a successful clear-all: empty list, no re-fetch.
    ///
    /// Bumps the epoch so any load still in flight settles as stale and
    /// cannot repopulate the cleared list.
    pub fn apply_cleared(&mut self) {
        self.load_epoch += 1;
        self.is_loading = false;
        self.tasks.clear();
        self.error = None;
    }

    /// Applies the filtered list after a successful bulk replace. Supersedes
    /// any in-flight load, same as `apply_cleared`.
    pub fn apply_replaced(&mut self, tasks: Vec<Task>) {
        self.load_epoch += 1;
        self.is_loading = false;
        self.tasks = tasks;
        self.error = None;
    }

    pub fn set_error(&mut self, error: &ApiError) {
        self.error = Some(error.to_string());
    }

    pub fn display(&self) -> DisplayState {
        if self.is_loading {
            DisplayState::Loading
        } else if self.tasks.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Populated
        }
    }

    /// Footer text with singular/plural wording.
    pub fn count_label(&self) -> String {
        match self.tasks.len() {
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        }
    }
}
