pub mod grade;
pub mod model;
pub mod train;
pub mod validation;

pub use grade::Grade;
pub use model::{ScoringModel, SCORE_MAX, SCORE_MIN};
pub use train::{train_fallback_model, RIDGE_ALPHA, TRAIN_ROWS, TRAIN_SEED};
pub use validation::{validate_features, validate_profile};
