use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToastError {
    #[error("notifier used outside of a live ToastProvider")]
    ProviderUnavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
