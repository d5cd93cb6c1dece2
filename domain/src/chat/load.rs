//! Model load lifecycle.
//!
//! [`LoadPhase`] describes model acquisition and startup progress. Within a
//! single load attempt the phases move monotonically
//! (Idle → Downloading → Initializing → Ready); Failed is reachable from any
//! phase and a later attempt starts the sequence over.

use serde::{Deserialize, Serialize};

/// Load phase of the model runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    /// No load attempted, or the last attempt was reset.
    Idle,
    /// Model files are being acquired.
    Downloading {
        /// Completed fraction in `[0, 1]`.
        fraction: f64,
        /// Observed throughput.
        bytes_per_sec: u64,
    },
    /// Download complete; the runtime is loading the model into memory.
    Initializing,
    /// A conversation can be created and messages sent.
    Ready,
    /// The attempt aborted; `reason` is shown to the user verbatim.
    Failed { reason: String },
}

impl LoadPhase {
    /// True while a load attempt is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Downloading { .. } | Self::Initializing)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Short label for status display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Downloading { .. } => "downloading",
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::Failed { .. } => "failed",
        }
    }
}

impl Default for LoadPhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_covers_download_and_init() {
        assert!(
            LoadPhase::Downloading {
                fraction: 0.4,
                bytes_per_sec: 1_000_000
            }
            .is_busy()
        );
        assert!(LoadPhase::Initializing.is_busy());
        assert!(!LoadPhase::Idle.is_busy());
        assert!(!LoadPhase::Ready.is_busy());
        assert!(
            !LoadPhase::Failed {
                reason: "disk full".to_string()
            }
            .is_busy()
        );
    }

    #[test]
    fn ready_is_only_ready() {
        assert!(LoadPhase::Ready.is_ready());
        assert!(!LoadPhase::Initializing.is_ready());
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(LoadPhase::Idle.label(), "idle");
        assert_eq!(
            LoadPhase::Failed {
                reason: "x".to_string()
            }
            .label(),
            "failed"
        );
    }
}
