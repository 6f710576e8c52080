use thiserror::Error;
use crate::models::{FeatureVector, Label};

/// Errors raised while classifying a feature vector
#[derive(Debug, Error, PartialEq)]
pub enum ClassifyError {
    #[error("Feature '{name}' became non-finite after scaling")]
    NonFiniteFeature { name: &'static str },

    #[error("Decision function produced a non-finite value ({0})")]
    NonFiniteDecision(f64),

    #[error("Tree {tree} has no node {node}")]
    MissingNode { tree: usize, node: usize },
}

/// Errors raised when a model's parameters are structurally unusable
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("{what} has {actual} entries, expected {expected}")]
    WrongLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what}[{index}] is not a finite number")]
    NonFinite { what: &'static str, index: usize },

    #[error("Scaler scale[{0}] is zero")]
    ZeroScale(usize),

    #[error("Tree ensemble contains no trees")]
    EmptyEnsemble,

    #[error("Tree {0} contains no nodes")]
    EmptyTree(usize),

    #[error("Tree {tree} node {node} splits on feature {feature}, only {max} features exist")]
    FeatureOutOfRange {
        tree: usize,
        node: usize,
        feature: usize,
        max: usize,
    },

    #[error("Tree {tree} node {node} points to child {child}, which must be after the node and below {len}")]
    BadChild {
        tree: usize,
        node: usize,
        child: usize,
        len: usize,
    },
}

/// A trained binary classifier over the 22 vocal measurements.
///
/// Implementations are immutable after construction and shared across
/// request workers.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> Result<Label, ClassifyError>;

    /// Short description used in startup logs
    fn describe(&self) -> String {
        "classifier".to_string()
    }
}

pub(crate) fn check_finite(what: &'static str, values: &[f64]) -> Result<(), ModelError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ModelError::NonFinite { what, index }),
        None => Ok(()),
    }
}

pub(crate) fn check_length(what: &'static str, expected: usize, values: &[f64]) -> Result<(), ModelError> {
    if values.len() != expected {
        return Err(ModelError::WrongLength {
            what,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}
