use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const COPY_LABEL: &str = "Copy link";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPIED_LABEL_REVERT: Duration = Duration::from_millis(900);
pub const COPY_BLOCKED_NOTICE: &str =
    "Could not copy to clipboard. Your browser may block clipboard access.";

/// Result of a clipboard write attempted by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// What the copy button shows after a write attempt. Filter state is never
/// touched and failures are not retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CopyFeedback {
    TemporaryLabel {
        label: &'static str,
        revert_after_ms: u64,
    },
    BlockingNotice {
        message: &'static str,
    },
}

#[must_use]
pub fn copy_feedback(outcome: CopyOutcome) -> CopyFeedback {
    match outcome {
        CopyOutcome::Copied => CopyFeedback::TemporaryLabel {
            label: COPIED_LABEL,
            revert_after_ms: u64::try_from(COPIED_LABEL_REVERT.as_millis()).unwrap_or(u64::MAX),
        },
        CopyOutcome::Failed => CopyFeedback::BlockingNotice {
            message: COPY_BLOCKED_NOTICE,
        },
    }
}
