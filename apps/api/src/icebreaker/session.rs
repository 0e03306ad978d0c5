//! The single visible outcome shown to the user.
//!
//! Each submission takes the next generation number and clears whatever was
//! visible. A finished submission only publishes if nothing newer has started;
//! otherwise its outcome is dropped.

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::icebreaker::generator::GenerationError;
use crate::icebreaker::models::IcebreakerResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Outcome {
    Empty,
    Pending {
        submission: u64,
    },
    Ready {
        submission: u64,
        result: IcebreakerResult,
    },
    Failed {
        submission: u64,
        reason: &'static str,
        message: &'static str,
    },
}

#[derive(Debug)]
struct SlotState {
    latest: u64,
    outcome: Outcome,
}

#[derive(Debug)]
pub struct ResultSlot {
    state: RwLock<SlotState>,
}

impl Default for ResultSlot {
    fn default() -> Self {
        Self {
            state: RwLock::new(SlotState {
                latest: 0,
                outcome: Outcome::Empty,
            }),
        }
    }
}

impl ResultSlot {
    /// Starts a new submission, hiding any previous result or error.
    pub async fn begin(&self) -> u64 {
        let mut state = self.state.write().await;
        state.latest += 1;
        state.outcome = Outcome::Pending {
            submission: state.latest,
        };
        debug!("Submission {} started", state.latest);
        state.latest
    }

    /// Publishes a finished submission. Returns `false` if a newer submission
    /// has started since, in which case nothing changes.
    pub async fn publish(
        &self,
        submission: u64,
        outcome: &Result<IcebreakerResult, GenerationError>,
    ) -> bool {
        let mut state = self.state.write().await;
        if submission != state.latest {
            info!(
                "Discarding outcome of submission {} (latest is {})",
                submission, state.latest
            );
            return false;
        }

        state.outcome = match outcome {
            Ok(result) => Outcome::Ready {
                submission,
                result: result.clone(),
            },
            Err(err) => Outcome::Failed {
                submission,
                reason: err.reason().as_str(),
                message: err.user_message(),
            },
        };
        true
    }

    pub async fn snapshot(&self) -> Outcome {
        self.state.read().await.outcome.clone()
    }

    /// The visible result, if the latest submission succeeded.
    pub async fn current_result(&self) -> Option<IcebreakerResult> {
        match &self.state.read().await.outcome {
            Outcome::Ready { result, .. } => Some(result.clone()),
            _ => None,
        }
    }
}
