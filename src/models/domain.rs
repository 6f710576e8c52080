use serde::Deserialize;

/// Number of vocal measurements consumed by the classifier
pub const FEATURE_COUNT: usize = 22;

/// Wire names of the vocal measurements, in the order the model was trained on
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Fo",
    "Fhi",
    "Flo",
    "Jitter_Percent",
    "Jitter_Abs",
    "RAP",
    "PPQ",
    "DDP",
    "Shimmer",
    "Shimmer_dB",
    "APQ3",
    "APQ5",
    "APQ",
    "DDA",
    "NHR",
    "HNR",
    "RPDE",
    "DFA",
    "Spread1",
    "Spread2",
    "D2",
    "PPE",
];

/// Fixed-order feature vector handed to a classifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Value of the measurement with the given wire name
    pub fn by_name(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.0[i])
    }
}

/// Raw classifier output
///
/// Exported artifacts may write class labels as floats (`1.0`); any value
/// with no fractional part is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "f64")]
pub struct Label(pub i64);

/// Largest magnitude an `f64` holds without losing integer precision
const MAX_EXACT_LABEL: f64 = 9_007_199_254_740_992.0;

impl TryFrom<f64> for Label {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.fract() != 0.0 || value.abs() > MAX_EXACT_LABEL {
            return Err(format!("class label {} is not an integer", value));
        }
        Ok(Label(value as i64))
    }
}

impl Label {
    pub const NEGATIVE: Label = Label(0);
    pub const POSITIVE: Label = Label(1);
}

/// Human-facing outcome of a screening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Healthy,
    Parkinsons,
}

impl Diagnosis {
    pub fn message(&self) -> &'static str {
        match self {
            Diagnosis::Healthy => "The person does not have Parkinson's disease",
            Diagnosis::Parkinsons => "The person has Parkinson's disease",
        }
    }
}

impl From<Label> for Diagnosis {
    /// Zero means healthy; any other label is treated as a positive finding
    fn from(label: Label) -> Self {
        if label == Label::NEGATIVE {
            Diagnosis::Healthy
        } else {
            Diagnosis::Parkinsons
        }
    }
}
