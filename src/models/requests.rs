use serde::{Deserialize, Serialize};
use crate::models::domain::{FeatureVector, FEATURE_COUNT};

/// Vocal measurements submitted for a Parkinson's screening
///
/// Every field is required. Field names on the wire are case-sensitive and
/// follow the acoustic feature names of the training data set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkinsonsInput {
    /// Average vocal fundamental frequency (Hz)
    #[serde(rename = "Fo")]
    pub fo: f64,
    /// Maximum vocal fundamental frequency (Hz)
    #[serde(rename = "Fhi")]
    pub fhi: f64,
    /// Minimum vocal fundamental frequency (Hz)
    #[serde(rename = "Flo")]
    pub flo: f64,
    #[serde(rename = "Jitter_Percent")]
    pub jitter_percent: f64,
    #[serde(rename = "Jitter_Abs")]
    pub jitter_abs: f64,
    #[serde(rename = "RAP")]
    pub rap: f64,
    #[serde(rename = "PPQ")]
    pub ppq: f64,
    #[serde(rename = "DDP")]
    pub ddp: f64,
    #[serde(rename = "Shimmer")]
    pub shimmer: f64,
    #[serde(rename = "Shimmer_dB")]
    pub shimmer_db: f64,
    #[serde(rename = "APQ3")]
    pub apq3: f64,
    #[serde(rename = "APQ5")]
    pub apq5: f64,
    #[serde(rename = "APQ")]
    pub apq: f64,
    #[serde(rename = "DDA")]
    pub dda: f64,
    /// Noise-to-harmonics ratio
    #[serde(rename = "NHR")]
    pub nhr: f64,
    /// Harmonics-to-noise ratio
    #[serde(rename = "HNR")]
    pub hnr: f64,
    /// Recurrence period density entropy
    #[serde(rename = "RPDE")]
    pub rpde: f64,
    /// Detrended fluctuation analysis
    #[serde(rename = "DFA")]
    pub dfa: f64,
    #[serde(rename = "Spread1")]
    pub spread1: f64,
    #[serde(rename = "Spread2")]
    pub spread2: f64,
    /// Correlation dimension
    #[serde(rename = "D2")]
    pub d2: f64,
    /// Pitch period entropy
    #[serde(rename = "PPE")]
    pub ppe: f64,
}

impl ParkinsonsInput {
    /// Lay the measurements out in training order.
    ///
    /// The classifier cannot detect a permuted vector, so this is the only
    /// place the ordering is spelled out. It must stay in lockstep with
    /// `FEATURE_NAMES`.
    pub fn to_feature_vector(&self) -> FeatureVector {
        let values: [f64; FEATURE_COUNT] = [
            self.fo,
            self.fhi,
            self.flo,
            self.jitter_percent,
            self.jitter_abs,
            self.rap,
            self.ppq,
            self.ddp,
            self.shimmer,
            self.shimmer_db,
            self.apq3,
            self.apq5,
            self.apq,
            self.dda,
            self.nhr,
            self.hnr,
            self.rpde,
            self.dfa,
            self.spread1,
            self.spread2,
            self.d2,
            self.ppe,
        ];
        FeatureVector(values)
    }
}

impl From<&ParkinsonsInput> for FeatureVector {
    fn from(input: &ParkinsonsInput) -> Self {
        input.to_feature_vector()
    }
}
