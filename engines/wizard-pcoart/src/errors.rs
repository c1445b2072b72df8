use crate::state::{StepInput, WizardStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// User-input constraint violation; carries the offending field for
    /// inline display. Never advances the step pointer.
    Validation { field: &'static str, message: String },
    InvalidTransition(String),
    IncompleteConfiguration(String),
    DeploymentRejected(String),
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { field, message } => write!(f, "Invalid {field}: {message}"),
            Self::InvalidTransition(msg) => write!(f, "Invalid transition: {msg}"),
            Self::IncompleteConfiguration(msg) => {
                write!(f, "Incomplete configuration: {msg}")
            }
            Self::DeploymentRejected(msg) => write!(f, "Deployment rejected: {msg}"),
        }
    }
}

impl std::error::Error for WizardError {}

impl WizardError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }

    pub(crate) fn wrong_step(current: WizardStep, input: &StepInput) -> Self {
        Self::InvalidTransition(format!(
            "{} input cannot be submitted on the {current} step",
            input.step()
        ))
    }
}
