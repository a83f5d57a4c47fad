use thiserror::Error;

/// Reasons the viewport observer could not be attached. The reveal
/// controller never surfaces these; every one of them means "show the
/// content now".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("IntersectionObserver is not available in this environment")]
    ObserverUnavailable,
    #[error("reveal target is not mounted")]
    TargetMissing,
    #[error("IntersectionObserver rejected the options: {0}")]
    ObserverRejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("required input is empty")]
    EmptyInput,
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("chart canvas is not mounted")]
    CanvasMissing,
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

impl ChartError {
    pub fn draw<E: std::fmt::Debug>(err: E) -> Self {
        ChartError::Draw(format!("{:?}", err))
    }
}
