use std::fmt;

/// Lifecycle of a single formatting invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Idle => write!(f, "Idle"),
            RequestState::InFlight => write!(f, "InFlight"),
            RequestState::Succeeded => write!(f, "Succeeded"),
            RequestState::Failed(reason) => write!(f, "Failed({})", reason),
        }
    }
}

impl Default for RequestState {
    fn default() -> Self {
        RequestState::Idle
    }
}
