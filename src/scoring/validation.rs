use crate::profile::{FeatureVector, StudentProfile, FEATURES};

/// Validate a feature vector against the documented ranges.
/// Returns all violations at once (not just the first).
pub fn validate_features(features: &FeatureVector) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, def) in FEATURES.iter().enumerate() {
        let value = features.get(i);
        if !value.is_finite() {
            errors.push(format!("{}: value must be finite, got {}", def.name, value));
            continue;
        }
        if value < def.min as f64 || value > def.max as f64 {
            errors.push(format!(
                "{}: {} outside range {}-{}",
                def.name, value, def.min, def.max
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a named profile by encoding it and checking the vector.
pub fn validate_profile(profile: &StudentProfile) -> Result<(), Vec<String>> {
    validate_features(&profile.to_features())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::layout;

    #[test]
    fn default_profile_is_valid() {
        assert!(validate_profile(&StudentProfile::default()).is_ok());
    }

    #[test]
    fn out_of_range_value_is_reported_by_name() {
        let features = StudentProfile::default()
            .to_features()
            .with_value(layout::HOURS_STUDIED, 50.0);
        let errors = validate_features(&features).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("hours_studied"));
        assert!(errors[0].contains("1-44"));
    }

    #[test]
    fn collects_all_errors() {
        let features = StudentProfile::default()
            .to_features()
            .with_value(layout::HOURS_STUDIED, 0.0)
            .with_value(layout::SLEEP_HOURS, 12.0)
            .with_value(layout::MOTIVATION_LEVEL, 3.0);
        let errors = validate_features(&features).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let features = StudentProfile::default()
            .to_features()
            .with_value(layout::PREVIOUS_SCORE, f64::NAN);
        let errors = validate_features(&features).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn boundary_values_are_accepted() {
        let mut profile = StudentProfile::default();
        profile.hours_studied = 1;
        profile.attendance_pct = 100;
        profile.sleep_hours = 4;
        assert!(validate_profile(&profile).is_ok());
    }
}
