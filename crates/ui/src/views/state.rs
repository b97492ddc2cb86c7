#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// An evaluation request failed; carries the text shown next to Retry.
    Evaluation(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            ViewError::Evaluation(message) if !message.trim().is_empty() => message,
            ViewError::Evaluation(_) => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}
