use thiserror::Error;

/// Failures surfaced by the rendering core
///
/// The core never terminates the process itself. Callers decide what to do
/// with a corrupt due date; the binary maps each variant to an exit code.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(
        "invalid due date '{value}': {reason}\nThis may be due to corruption of the todo data file."
    )]
    CorruptDueDate {
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RenderError {
    /// Get the exit code for this error (sysexits.h values)
    pub fn exit_code(&self) -> i32 {
        match self {
            RenderError::CorruptDueDate { .. } => 65,
            RenderError::Io(_) => 74,
            RenderError::Config(_) => 78,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
