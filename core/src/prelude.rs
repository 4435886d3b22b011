/// Common error type for stage execution.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StageError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

pub type StageResult<T> = Result<T, StageError>;

/// A pure step of the analysis pipeline.
///
/// Stages borrow the lookup tables they need at construction time and turn
/// the previous stage's output into a fresh value.
pub trait AnalysisStage {
    type Input: ?Sized;
    type Output;

    fn name(&self) -> &'static str;
    fn execute(&self, input: &Self::Input) -> StageResult<Self::Output>;
}
