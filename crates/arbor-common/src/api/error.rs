// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArborError {
    /// An option value violated its definition (type, range, enumeration, presence).
    #[error("Invalid option '{option}': {reason}")]
    OptionValidation { option: String, reason: String },

    /// A resolved option was read under a name the schema never declared.
    #[error("Option '{option}' is not declared by the algorithm schema")]
    UnknownOption { option: String },

    /// Result write against a node that is not part of the graph
    #[error("Node '{id}' not found in graph")]
    NodeNotFound { id: String },

    /// Result write against an edge that is not part of the graph
    #[error("Edge '{src}' -> '{dst}' not found in graph")]
    EdgeNotFound { src: String, dst: String },

    #[error("Algorithm '{key}' is already registered")]
    DuplicateAlgorithm { key: String },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ArborError {
    pub fn option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        ArborError::OptionValidation {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArborError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_error_message_names_option() {
        let err = ArborError::option("dampingFactor", "must be <= 1, got 1.5");
        assert_eq!(
            err.to_string(),
            "Invalid option 'dampingFactor': must be <= 1, got 1.5"
        );
    }

    #[test]
    fn test_internal_from_anyhow() {
        let err: ArborError = anyhow::anyhow!("worker panicked").into();
        assert!(matches!(err, ArborError::Internal(_)));
        assert!(err.to_string().contains("worker panicked"));
    }
}
