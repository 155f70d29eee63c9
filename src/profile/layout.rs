//! Authoritative feature layout.
//!
//! The model's standardization parameters were computed against this exact
//! ordering. Reordering, inserting, or removing an entry silently corrupts
//! every prediction, so positions are defined here once and referenced by
//! name everywhere else.

/// Number of model inputs.
pub const FEATURE_COUNT: usize = 12;

// Named positions into the feature vector.
pub const HOURS_STUDIED: usize = 0;
pub const ATTENDANCE_PCT: usize = 1;
pub const SLEEP_HOURS: usize = 2;
pub const PREVIOUS_SCORE: usize = 3;
pub const TUTORING_SESSIONS: usize = 4;
pub const PHYSICAL_ACTIVITY: usize = 5;
pub const PARENTAL_INVOLVEMENT: usize = 6;
pub const ACCESS_TO_RESOURCES: usize = 7;
pub const MOTIVATION_LEVEL: usize = 8;
pub const INTERNET_ACCESS: usize = 9;
pub const FAMILY_INCOME: usize = 10;
pub const TEACHER_QUALITY: usize = 11;

/// One feature's identity and inclusive value range.
#[derive(Debug, Clone, Copy)]
pub struct FeatureDef {
    pub name: &'static str,
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
}

impl FeatureDef {
    /// Clamp a raw value into this feature's range.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    /// Map a value to [0, 1] across the feature's range.
    pub fn normalized(&self, value: f64) -> f64 {
        let span = (self.max - self.min) as f64;
        ((value - self.min as f64) / span).clamp(0.0, 1.0)
    }
}

/// Feature definitions in vector order.
pub const FEATURES: [FeatureDef; FEATURE_COUNT] = [
    FeatureDef { name: "hours_studied", label: "Study Hrs/Wk", min: 1, max: 44 },
    FeatureDef { name: "attendance_pct", label: "Attendance %", min: 60, max: 100 },
    FeatureDef { name: "sleep_hours", label: "Sleep Hrs", min: 4, max: 10 },
    FeatureDef { name: "previous_score", label: "Prev. Score", min: 50, max: 100 },
    FeatureDef { name: "tutoring_sessions", label: "Tutoring/Mo", min: 0, max: 8 },
    FeatureDef { name: "physical_activity", label: "Activity Hrs", min: 0, max: 6 },
    FeatureDef { name: "parental_involvement", label: "Parental Inv.", min: 0, max: 2 },
    FeatureDef { name: "access_to_resources", label: "Resources", min: 0, max: 2 },
    FeatureDef { name: "motivation_level", label: "Motivation", min: 0, max: 2 },
    FeatureDef { name: "internet_access", label: "Internet", min: 0, max: 1 },
    FeatureDef { name: "family_income", label: "Family Income", min: 0, max: 2 },
    FeatureDef { name: "teacher_quality", label: "Teacher Qual.", min: 0, max: 2 },
];
