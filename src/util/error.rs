/// Error type for gridref-rs operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridRefError {
    /// The grid reference text is malformed, or the coordinates fall outside
    /// the lettered tiling.
    InvalidGridReference(String),
    /// The requested encode precision is not one of the six supported powers of ten.
    UnsupportedPrecision(u32),
    /// A letter repeats while inverting a letter table.
    DuplicateLetter(char),
}

impl std::fmt::Display for GridRefError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridRefError::InvalidGridReference(cause) => {
                write!(f, "Invalid grid reference: {}", cause)
            }
            GridRefError::UnsupportedPrecision(precision) => {
                write!(f, "Unsupported precision: {} m", precision)
            }
            GridRefError::DuplicateLetter(letter) => {
                write!(f, "Duplicate letter in table: {}", letter)
            }
        }
    }
}

impl std::error::Error for GridRefError {}
