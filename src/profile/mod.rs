pub mod fields;
pub mod layout;
pub mod student;

pub use fields::{Internet, Level};
pub use layout::{FeatureDef, FEATURES, FEATURE_COUNT};
pub use student::{FeatureVector, StudentProfile};
