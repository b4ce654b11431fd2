#[derive(thiserror::Error, Debug)]
pub enum JSError {
    #[error("console.stdout is not set; install a platform sink before invoking console methods")]
    ConsoleSinkNotSet,

    #[error("std::io error: {0}")]
    IoError(#[from] std::io::Error),
}
