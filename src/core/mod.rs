// Core classification exports
pub mod classifier;
pub mod ensemble;
pub mod linear;
pub mod pipeline;
pub mod scaler;

pub use classifier::{Classifier, ClassifyError, ModelError};
pub use ensemble::{TreeEnsemble, TreeNode};
pub use linear::LinearModel;
pub use pipeline::{Estimator, Pipeline};
pub use scaler::StandardScaler;
