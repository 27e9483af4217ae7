//! What a run did. Used for display and tests, never for control flow.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Paths created by the materializer, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializationResult {
    pub created_root: PathBuf,
    pub created_dirs: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
}

impl MaterializationResult {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            created_root: root.into(),
            created_dirs: Vec::new(),
            created_files: Vec::new(),
        }
    }
}

/// External bootstrap steps, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostInitStep {
    PackageManager,
    ContinuousIntegration,
    VirtualEnv,
    VersionControl,
}

impl PostInitStep {
    pub const ORDER: [PostInitStep; 4] = [
        PostInitStep::PackageManager,
        PostInitStep::ContinuousIntegration,
        PostInitStep::VirtualEnv,
        PostInitStep::VersionControl,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PackageManager => "package-manager",
            Self::ContinuousIntegration => "ci",
            Self::VirtualEnv => "venv",
            Self::VersionControl => "git",
        }
    }

    /// Whether a failure of this step aborts the run.
    ///
    /// Version control is best-effort; the other steps feed later ones.
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::VersionControl)
    }
}

impl fmt::Display for PostInitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of one step: `Skipped`, or `Pending` → `Succeeded` | `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StepState {
    Skipped,
    Pending,
    Succeeded,
    Failed { reason: String },
}

impl StepState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: PostInitStep,
    #[serde(flatten)]
    pub state: StepState,
}

/// Outcome of every post-init step that was reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostInitReport {
    pub steps: Vec<StepOutcome>,
}

impl PostInitReport {
    pub fn record(&mut self, step: PostInitStep, state: StepState) {
        self.steps.push(StepOutcome { step, state });
    }

    pub fn state_of(&self, step: PostInitStep) -> Option<&StepState> {
        self.steps.iter().find(|o| o.step == step).map(|o| &o.state)
    }

    /// Non-fatal failures that were recorded instead of aborting.
    pub fn warnings(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps
            .iter()
            .filter(|o| matches!(o.state, StepState::Failed { .. }))
    }
}

/// Everything `pyinit init` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub project_name: String,
    pub materialization: MaterializationResult,
    pub post_init: PostInitReport,
}
