use crate::core::classifier::{check_finite, check_length, ClassifyError, ModelError};
use crate::models::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

/// Per-feature standardization `(x - mean) / scale` applied before the estimator
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    pub fn new(mean: &[f64], scale: &[f64]) -> Result<Self, ModelError> {
        check_length("scaler.mean", FEATURE_COUNT, mean)?;
        check_length("scaler.scale", FEATURE_COUNT, scale)?;
        check_finite("scaler.mean", mean)?;
        check_finite("scaler.scale", scale)?;
        if let Some(i) = scale.iter().position(|s| *s == 0.0) {
            return Err(ModelError::ZeroScale(i));
        }

        let mut s = Self {
            mean: [0.0; FEATURE_COUNT],
            scale: [1.0; FEATURE_COUNT],
        };
        s.mean.copy_from_slice(mean);
        s.scale.copy_from_slice(scale);
        Ok(s)
    }

    pub fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, ClassifyError> {
        let mut out = [0.0; FEATURE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            let z = (features.0[i] - self.mean[i]) / self.scale[i];
            if !z.is_finite() {
                return Err(ClassifyError::NonFiniteFeature {
                    name: FEATURE_NAMES[i],
                });
            }
            *slot = z;
        }
        Ok(FeatureVector(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform() {
        let mut mean = vec![0.0; FEATURE_COUNT];
        let mut scale = vec![1.0; FEATURE_COUNT];
        mean[0] = 150.0;
        scale[0] = 50.0;
        let scaler = StandardScaler::new(&mean, &scale).unwrap();

        let mut values = [3.0; FEATURE_COUNT];
        values[0] = 200.0;
        let z = scaler.transform(&FeatureVector(values)).unwrap();
        assert_eq!(z.0[0], 1.0);
        assert_eq!(z.0[1], 3.0);
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[7] = 0.0;
        let err = StandardScaler::new(&vec![0.0; FEATURE_COUNT], &scale).unwrap_err();
        assert_eq!(err, ModelError::ZeroScale(7));
    }

    #[test]
    fn test_overflow_reported_by_name() {
        let mut scale = vec![1.0; FEATURE_COUNT];
        scale[15] = 1e-300;
        let scaler = StandardScaler::new(&vec![0.0; FEATURE_COUNT], &scale).unwrap();
        let err = scaler.transform(&FeatureVector([1e300; FEATURE_COUNT])).unwrap_err();
        assert_eq!(err, ClassifyError::NonFiniteFeature { name: "HNR" });
    }
}
