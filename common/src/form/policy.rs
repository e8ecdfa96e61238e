use std::fmt;
use std::str::FromStr;

/// Alert shown when a submission fails under the strict policy.
pub const FAILURE_ALERT: &str = "Something went wrong. Please try again.";

/// What happened to a single submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The server answered with a 2xx status.
    Accepted,
    /// The server answered with an error status and, usually, an error message.
    Rejected { status: u16, message: String },
    /// The request never produced a response.
    Unreachable(String),
}

/// How the form reacts to a failed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Only an accepted submission reveals the success panel.
    #[default]
    Strict,
    /// Every attempt reveals the success panel, even when the backend is down.
    Graceful,
}

/// What the form renders once the request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    ShowSuccess,
    /// Keep the form visible, alert the user and log `log` to the console.
    Alert { message: &'static str, log: String },
}

impl FailurePolicy {
    pub fn resolve(self, result: &SubmissionResult) -> SubmitOutcome {
        match (self, result) {
            (_, SubmissionResult::Accepted) | (FailurePolicy::Graceful, _) => {
                SubmitOutcome::ShowSuccess
            }
            (FailurePolicy::Strict, SubmissionResult::Rejected { status, message }) => {
                SubmitOutcome::Alert {
                    message: FAILURE_ALERT,
                    log: format!("Form error: {} ({})", message, status),
                }
            }
            (FailurePolicy::Strict, SubmissionResult::Unreachable(reason)) => {
                SubmitOutcome::Alert {
                    message: FAILURE_ALERT,
                    log: format!("Form error: {}", reason),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown failure policy `{}`", self.0)
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for FailurePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(FailurePolicy::Strict),
            "graceful" => Ok(FailurePolicy::Graceful),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
