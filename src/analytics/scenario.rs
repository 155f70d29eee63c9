use crate::profile::{Internet, Level, StudentProfile};
use crate::scoring::ScoringModel;

/// A named what-if outcome against a baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub label: &'static str,
    pub baseline: f64,
    pub projected: f64,
    pub delta: f64,
}

/// Score the baseline and a transformed copy of it.
pub fn scenario_delta(
    model: &ScoringModel,
    base: &StudentProfile,
    label: &'static str,
    transform: impl FnOnce(StudentProfile) -> StudentProfile,
) -> Scenario {
    let baseline = model.predict(&base.to_features());
    let projected = model.predict(&transform(*base).to_features());
    Scenario {
        label,
        baseline,
        projected,
        delta: projected - baseline,
    }
}

/// The fixed catalog of improvement scenarios, all against the same baseline.
pub fn improvement_scenarios(model: &ScoringModel, base: &StudentProfile) -> Vec<Scenario> {
    let catalog: [(&'static str, fn(StudentProfile) -> StudentProfile); 7] = [
        ("+5 Study Hrs", |mut p| {
            p.hours_studied = (p.hours_studied + 5).min(44);
            p
        }),
        ("+10 Study Hrs", |mut p| {
            p.hours_studied = (p.hours_studied + 10).min(44);
            p
        }),
        ("95% Attendance", |mut p| {
            p.attendance_pct = 95;
            p
        }),
        ("8 hrs Sleep", |mut p| {
            p.sleep_hours = 8;
            p
        }),
        ("4 Tutor Sessions", |mut p| {
            p.tutoring_sessions = 4;
            p
        }),
        ("High Motivation", |mut p| {
            p.motivation_level = Level::High;
            p
        }),
        ("All Improved", |mut p| {
            p.hours_studied = (p.hours_studied + 10).min(44);
            p.attendance_pct = (p.attendance_pct + 10).min(100);
            p.sleep_hours = 8;
            p.tutoring_sessions = p.tutoring_sessions.max(4);
            p.parental_involvement = Level::High;
            p.access_to_resources = Level::High;
            p.motivation_level = Level::High;
            p.internet_access = Internet::Yes;
            p.family_income = Level::High;
            p.teacher_quality = Level::High;
            p
        }),
    ];

    catalog
        .into_iter()
        .map(|(label, transform)| scenario_delta(model, base, label, transform))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::train_fallback_model;

    #[test]
    fn delta_is_exactly_projected_minus_baseline() {
        let model = train_fallback_model().unwrap();
        let base = StudentProfile::default();
        for scenario in improvement_scenarios(&model, &base) {
            assert_eq!(scenario.delta, scenario.projected - scenario.baseline);
        }
    }

    #[test]
    fn catalog_is_stable() {
        let model = train_fallback_model().unwrap();
        let scenarios = improvement_scenarios(&model, &StudentProfile::default());
        let labels: Vec<_> = scenarios.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "+5 Study Hrs",
                "+10 Study Hrs",
                "95% Attendance",
                "8 hrs Sleep",
                "4 Tutor Sessions",
                "High Motivation",
                "All Improved",
            ]
        );
    }

    #[test]
    fn every_scenario_shares_the_same_baseline() {
        let model = train_fallback_model().unwrap();
        let base = StudentProfile::default();
        let expected = model.predict(&base.to_features());
        for scenario in improvement_scenarios(&model, &base) {
            assert_eq!(scenario.baseline, expected);
        }
    }

    #[test]
    fn study_hour_transforms_clamp_at_the_range_maximum() {
        let model = train_fallback_model().unwrap();
        let mut base = StudentProfile::default();
        base.hours_studied = 42;

        let bumped = scenario_delta(&model, &base, "+5 Study Hrs", |mut p| {
            p.hours_studied = (p.hours_studied + 5).min(44);
            p
        });
        let capped = scenario_delta(&model, &base, "cap", |mut p| {
            p.hours_studied = 44;
            p
        });
        assert_eq!(bumped.projected, capped.projected);
    }

    #[test]
    fn all_improved_lifts_the_default_profile() {
        let model = train_fallback_model().unwrap();
        let scenarios = improvement_scenarios(&model, &StudentProfile::default());
        let all_improved = scenarios.last().unwrap();
        assert!(all_improved.delta > 0.0, "delta was {}", all_improved.delta);
    }

    #[test]
    fn transform_does_not_mutate_the_caller_profile() {
        let model = train_fallback_model().unwrap();
        let base = StudentProfile::default();
        let before = base;
        let _ = improvement_scenarios(&model, &base);
        assert_eq!(base, before);
    }
}
