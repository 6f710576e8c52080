use crate::core::classifier::{check_finite, check_length, ClassifyError, ModelError};
use crate::models::{FeatureVector, Label, FEATURE_COUNT};

/// Linear decision function `w·x + b`, positive side is label 1.
///
/// Covers exported linear SVMs and logistic regressions alike, since both
/// threshold the same affine score at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    coefficients: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: &[f64], intercept: f64) -> Result<Self, ModelError> {
        check_length("coefficients", FEATURE_COUNT, coefficients)?;
        check_finite("coefficients", coefficients)?;
        check_finite("intercept", &[intercept])?;

        let mut w = [0.0; FEATURE_COUNT];
        w.copy_from_slice(coefficients);
        Ok(Self {
            coefficients: w,
            intercept,
        })
    }

    pub fn decision_function(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.as_slice())
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<Label, ClassifyError> {
        let score = self.decision_function(features);
        if !score.is_finite() {
            return Err(ClassifyError::NonFiniteDecision(score));
        }
        Ok(if score > 0.0 { Label::POSITIVE } else { Label::NEGATIVE })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_on(index: usize, weight: f64, intercept: f64) -> LinearModel {
        let mut w = vec![0.0; FEATURE_COUNT];
        w[index] = weight;
        LinearModel::new(&w, intercept).unwrap()
    }

    #[test]
    fn test_sign_of_decision() {
        let model = model_on(21, 8.0, -2.0);
        let mut x = [0.0; FEATURE_COUNT];
        x[21] = 0.284654;
        assert_eq!(model.predict(&FeatureVector(x)).unwrap(), Label::POSITIVE);
        x[21] = 0.1;
        assert_eq!(model.predict(&FeatureVector(x)).unwrap(), Label::NEGATIVE);
        // Exactly on the boundary counts as negative
        x[21] = 0.25;
        assert_eq!(model.predict(&FeatureVector(x)).unwrap(), Label::NEGATIVE);
    }

    #[test]
    fn test_overflow_is_an_error() {
        let mut w = vec![0.0; FEATURE_COUNT];
        w[0] = 1e308;
        w[1] = 1e308;
        let model = LinearModel::new(&w, 0.0).unwrap();
        let err = model.predict(&FeatureVector([1e308; FEATURE_COUNT])).unwrap_err();
        assert!(matches!(err, ClassifyError::NonFiniteDecision(_)));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = LinearModel::new(&[1.0; 21], 0.0).unwrap_err();
        assert_eq!(
            err,
            ModelError::WrongLength { what: "coefficients", expected: 22, actual: 21 }
        );
    }
}
