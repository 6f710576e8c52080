//! Parkinson's screening service
//!
//! Classifies 22 acoustic voice measurements as indicating Parkinson's
//! disease or not, using a pre-trained model exported by an external
//! training pipeline.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Classifier, ClassifyError, Pipeline};
pub use crate::models::{Diagnosis, FeatureVector, Label, ParkinsonsInput, FEATURE_NAMES};
pub use crate::routes::AppState;
pub use crate::services::{load_model, ModelLoadError};
