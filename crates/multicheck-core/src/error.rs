//! Error types for multicheck.

/// The main error type for multicheck operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MultiCheckError {
    /// A section (column) count below 1 was requested.
    #[error("cannot split into {sections} sections: at least 1 section is required")]
    InvalidArgument {
        /// The rejected section count.
        sections: usize,
    },
}

impl MultiCheckError {
    /// Create an invalid argument error for a rejected section count.
    pub fn invalid_sections(sections: usize) -> Self {
        Self::InvalidArgument { sections }
    }
}

/// A specialized Result type for multicheck operations.
pub type Result<T> = std::result::Result<T, MultiCheckError>;
