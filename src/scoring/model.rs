use crate::profile::{FeatureVector, FEATURE_COUNT};

/// Lower bound of every prediction.
pub const SCORE_MIN: f64 = 40.0;
/// Upper bound of every prediction.
pub const SCORE_MAX: f64 = 100.0;

/// A fitted linear model plus the standardization parameters it was trained
/// against. Constructed once at startup and never mutated; predictions are
/// pure reads, so sharing across callers needs no synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringModel {
    pub coefficients: [f64; FEATURE_COUNT],
    pub intercept: f64,
    pub mean: [f64; FEATURE_COUNT],
    pub scale: [f64; FEATURE_COUNT],
}

impl ScoringModel {
    /// Predict a score in [40, 100] for one feature vector.
    ///
    /// Each field is standardized with the stored mean/scale before the
    /// linear combination; the result is clamped into the score range.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let mut score = self.intercept;
        for i in 0..FEATURE_COUNT {
            let standardized = (features.get(i) - self.mean[i]) / self.scale[i];
            score += self.coefficients[i] * standardized;
        }
        score.clamp(SCORE_MIN, SCORE_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::StudentProfile;

    fn identity_model() -> ScoringModel {
        ScoringModel {
            coefficients: [0.0; FEATURE_COUNT],
            intercept: 70.0,
            mean: [0.0; FEATURE_COUNT],
            scale: [1.0; FEATURE_COUNT],
        }
    }

    #[test]
    fn predict_applies_standardization_before_weights() {
        let mut model = identity_model();
        model.coefficients[0] = 2.0;
        model.mean[0] = 10.0;
        model.scale[0] = 5.0;

        // field 0 = 20 -> z = (20 - 10) / 5 = 2 -> 70 + 2*2 = 74
        let features = StudentProfile::default().to_features();
        assert_eq!(model.predict(&features), 74.0);
    }

    #[test]
    fn predict_clamps_to_score_range() {
        let mut high = identity_model();
        high.intercept = 500.0;
        let mut low = identity_model();
        low.intercept = -500.0;

        let features = StudentProfile::default().to_features();
        assert_eq!(high.predict(&features), SCORE_MAX);
        assert_eq!(low.predict(&features), SCORE_MIN);
    }

    #[test]
    fn predict_is_deterministic() {
        let mut model = identity_model();
        model.coefficients = [0.3; FEATURE_COUNT];
        model.mean = [1.5; FEATURE_COUNT];
        model.scale = [2.0; FEATURE_COUNT];

        let features = StudentProfile::default().to_features();
        let first = model.predict(&features);
        for _ in 0..10 {
            assert_eq!(model.predict(&features), first);
        }
    }

    #[test]
    fn unweighted_model_returns_its_intercept() {
        let model = identity_model();
        let features = StudentProfile::default().to_features();
        assert_eq!(model.predict(&features), 70.0);
    }
}
