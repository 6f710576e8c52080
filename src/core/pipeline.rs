use crate::core::classifier::{Classifier, ClassifyError};
use crate::core::ensemble::TreeEnsemble;
use crate::core::linear::LinearModel;
use crate::core::scaler::StandardScaler;
use crate::models::{FeatureVector, Label};

/// Final estimator of a pipeline
#[derive(Debug, Clone)]
pub enum Estimator {
    Linear(LinearModel),
    TreeEnsemble(TreeEnsemble),
}

/// Optional standardization followed by an estimator
#[derive(Debug, Clone)]
pub struct Pipeline {
    scaler: Option<StandardScaler>,
    estimator: Estimator,
}

impl Pipeline {
    pub fn new(scaler: Option<StandardScaler>, estimator: Estimator) -> Self {
        Self { scaler, estimator }
    }
}

impl Classifier for Pipeline {
    fn classify(&self, features: &FeatureVector) -> Result<Label, ClassifyError> {
        let scaled;
        let input = match &self.scaler {
            Some(scaler) => {
                scaled = scaler.transform(features)?;
                &scaled
            }
            None => features,
        };

        match &self.estimator {
            Estimator::Linear(model) => model.predict(input),
            Estimator::TreeEnsemble(model) => model.predict(input),
        }
    }

    fn describe(&self) -> String {
        let estimator = match &self.estimator {
            Estimator::Linear(_) => "linear".to_string(),
            Estimator::TreeEnsemble(e) => format!("tree ensemble ({} trees)", e.len()),
        };
        match self.scaler {
            Some(_) => format!("standardized {}", estimator),
            None => estimator,
        }
    }
}
