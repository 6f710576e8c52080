use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

use crate::core::{
    Classifier, Estimator, LinearModel, ModelError, Pipeline, StandardScaler, TreeEnsemble, TreeNode,
};
use crate::models::FEATURE_NAMES;

/// Artifact format revision this build understands
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// Errors that can occur while loading a model artifact
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model artifact could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported model format version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Model was trained on features {found:?}, expected {expected:?}")]
    FeatureMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },

    #[error("Invalid model: {0}")]
    Invalid(#[from] ModelError),
}

/// On-disk representation produced by the training toolchain
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    format_version: u32,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    #[serde(default)]
    scaler: Option<ScalerArtifact>,
    estimator: EstimatorArtifact,
}

#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum EstimatorArtifact {
    Linear { coefficients: Vec<f64>, intercept: f64 },
    TreeEnsemble { trees: Vec<Vec<TreeNode>> },
}

/// Read and validate a model artifact from disk
pub async fn load_model<P: AsRef<Path>>(path: P) -> Result<Pipeline, ModelLoadError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| ModelLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_model(&raw)
}

/// Load the model the server will share across workers.
///
/// Failure is logged and yields `None`; the server keeps running and every
/// prediction then reports the model as unavailable.
pub async fn load_for_serving<P: AsRef<Path>>(path: P) -> Option<Arc<dyn Classifier>> {
    let path = path.as_ref();
    match load_model(path).await {
        Ok(pipeline) => {
            tracing::info!("Loaded {} model from {}", pipeline.describe(), path.display());
            Some(Arc::new(pipeline))
        }
        Err(e) => {
            tracing::error!("Error loading the Parkinson's disease model: {}", e);
            None
        }
    }
}

/// Validate an artifact held in memory
pub fn parse_model(raw: &str) -> Result<Pipeline, ModelLoadError> {
    let artifact: ModelArtifact = serde_json::from_str(raw)?;

    if artifact.format_version != SUPPORTED_FORMAT_VERSION {
        return Err(ModelLoadError::UnsupportedVersion {
            found: artifact.format_version,
            supported: SUPPORTED_FORMAT_VERSION,
        });
    }

    if let Some(found) = artifact.feature_names {
        if !found.iter().map(String::as_str).eq(FEATURE_NAMES.iter().copied()) {
            return Err(ModelLoadError::FeatureMismatch {
                found,
                expected: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            });
        }
    }

    let scaler = artifact
        .scaler
        .map(|s| StandardScaler::new(&s.mean, &s.scale))
        .transpose()?;

    let estimator = match artifact.estimator {
        EstimatorArtifact::Linear { coefficients, intercept } => {
            Estimator::Linear(LinearModel::new(&coefficients, intercept)?)
        }
        EstimatorArtifact::TreeEnsemble { trees } => {
            Estimator::TreeEnsemble(TreeEnsemble::new(trees)?)
        }
    };

    Ok(Pipeline::new(scaler, estimator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classifier;
    use crate::models::{FeatureVector, Label, FEATURE_COUNT};

    fn linear_artifact(version: u32, names: Option<Vec<&str>>) -> String {
        serde_json::json!({
            "format_version": version,
            "feature_names": names,
            "estimator": {
                "type": "linear",
                "coefficients": vec![0.0; FEATURE_COUNT],
                "intercept": 1.0,
            }
        })
        .to_string()
    }

    #[test]
    fn test_parse_linear() {
        let model = parse_model(&linear_artifact(1, Some(FEATURE_NAMES.to_vec()))).unwrap();
        let label = model.classify(&FeatureVector([0.0; FEATURE_COUNT])).unwrap();
        assert_eq!(label, Label::POSITIVE);
    }

    #[test]
    fn test_rejects_future_version() {
        let err = parse_model(&linear_artifact(2, None)).unwrap_err();
        assert!(matches!(err, ModelLoadError::UnsupportedVersion { found: 2, supported: 1 }));
    }

    #[test]
    fn test_rejects_reordered_features() {
        let mut names = FEATURE_NAMES.to_vec();
        names.swap(0, 1);
        let err = parse_model(&linear_artifact(1, Some(names))).unwrap_err();
        assert!(matches!(err, ModelLoadError::FeatureMismatch { .. }));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_model("\u{80}\u{4}\u{95}pickle").unwrap_err();
        assert!(matches!(err, ModelLoadError::Parse(_)));
    }

    #[test]
    fn test_parse_tree_ensemble() {
        let raw = serde_json::json!({
            "format_version": 1,
            "estimator": {
                "type": "tree_ensemble",
                "trees": [[
                    {"split": {"feature": 21, "threshold": 0.2, "left": 1, "right": 2}},
                    {"leaf": 0.0},
                    {"leaf": 1.0}
                ]]
            }
        })
        .to_string();
        let model = parse_model(&raw).unwrap();
        assert_eq!(model.describe(), "tree ensemble (1 trees)");

        let mut x = [0.0; FEATURE_COUNT];
        x[21] = 0.3;
        assert_eq!(model.classify(&FeatureVector(x)).unwrap(), Label::POSITIVE);
    }

    #[test]
    fn test_rejects_fractional_leaf() {
        let raw = serde_json::json!({
            "format_version": 1,
            "estimator": { "type": "tree_ensemble", "trees": [[{"leaf": 0.5}]] }
        })
        .to_string();
        let err = parse_model(&raw).unwrap_err();
        assert!(matches!(err, ModelLoadError::Parse(_)));
        assert!(err.to_string().starts_with("Model artifact could not be parsed"));
    }

    #[tokio::test]
    async fn test_serving_load_survives_failure() {
        assert!(load_for_serving("/nonexistent/parkinsons_model.json").await.is_none());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = load_model("/nonexistent/parkinsons_model.json").await.unwrap_err();
        assert!(matches!(err, ModelLoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/parkinsons_model.json"));
    }
}
