use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Data size does not match expected size: {actual} != {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        fn open_missing() -> Result<std::fs::File> {
            Ok(std::fs::File::open("/nonexistent/skypixel/input.raw")?)
        }

        assert!(matches!(open_missing(), Err(ProcessingError::Io(_))));
    }
}
