// Service exports
pub mod model_loader;

pub use model_loader::{load_for_serving, load_model, parse_model, ModelLoadError, SUPPORTED_FORMAT_VERSION};
