use anyhow::{bail, Result};

use super::fields::{Internet, Level};
use super::layout::{self, FEATURES, FEATURE_COUNT};

/// A student's inputs by name.
///
/// This is the only place field names meet vector positions: everything else
/// goes through [`StudentProfile::to_features`] and the index constants in
/// [`crate::profile::layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentProfile {
    pub hours_studied: u8,
    pub attendance_pct: u8,
    pub sleep_hours: u8,
    pub previous_score: u8,
    pub tutoring_sessions: u8,
    pub physical_activity: u8,
    pub parental_involvement: Level,
    pub access_to_resources: Level,
    pub motivation_level: Level,
    pub internet_access: Internet,
    pub family_income: Level,
    pub teacher_quality: Level,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            hours_studied: 20,
            attendance_pct: 85,
            sleep_hours: 7,
            previous_score: 75,
            tutoring_sessions: 2,
            physical_activity: 2,
            parental_involvement: Level::Medium,
            access_to_resources: Level::Medium,
            motivation_level: Level::Medium,
            internet_access: Internet::Yes,
            family_income: Level::Medium,
            teacher_quality: Level::Medium,
        }
    }
}

impl StudentProfile {
    /// Encode into the ordered vector the model expects.
    pub fn to_features(&self) -> FeatureVector {
        let mut values = [0.0; FEATURE_COUNT];
        values[layout::HOURS_STUDIED] = f64::from(self.hours_studied);
        values[layout::ATTENDANCE_PCT] = f64::from(self.attendance_pct);
        values[layout::SLEEP_HOURS] = f64::from(self.sleep_hours);
        values[layout::PREVIOUS_SCORE] = f64::from(self.previous_score);
        values[layout::TUTORING_SESSIONS] = f64::from(self.tutoring_sessions);
        values[layout::PHYSICAL_ACTIVITY] = f64::from(self.physical_activity);
        values[layout::PARENTAL_INVOLVEMENT] = self.parental_involvement.encode();
        values[layout::ACCESS_TO_RESOURCES] = self.access_to_resources.encode();
        values[layout::MOTIVATION_LEVEL] = self.motivation_level.encode();
        values[layout::INTERNET_ACCESS] = self.internet_access.encode();
        values[layout::FAMILY_INCOME] = self.family_income.encode();
        values[layout::TEACHER_QUALITY] = self.teacher_quality.encode();
        FeatureVector(values)
    }

    /// Current value of the field at a layout position.
    pub fn value(&self, index: usize) -> i64 {
        match index {
            layout::HOURS_STUDIED => i64::from(self.hours_studied),
            layout::ATTENDANCE_PCT => i64::from(self.attendance_pct),
            layout::SLEEP_HOURS => i64::from(self.sleep_hours),
            layout::PREVIOUS_SCORE => i64::from(self.previous_score),
            layout::TUTORING_SESSIONS => i64::from(self.tutoring_sessions),
            layout::PHYSICAL_ACTIVITY => i64::from(self.physical_activity),
            layout::PARENTAL_INVOLVEMENT => self.parental_involvement.encode() as i64,
            layout::ACCESS_TO_RESOURCES => self.access_to_resources.encode() as i64,
            layout::MOTIVATION_LEVEL => self.motivation_level.encode() as i64,
            layout::INTERNET_ACCESS => self.internet_access.encode() as i64,
            layout::FAMILY_INCOME => self.family_income.encode() as i64,
            layout::TEACHER_QUALITY => self.teacher_quality.encode() as i64,
            _ => panic!("feature index out of range: {}", index),
        }
    }

    /// Shift the field at a layout position by `delta`, clamped to its range.
    pub fn adjust(&mut self, index: usize, delta: i64) {
        let next = FEATURES[index].clamp(self.value(index) + delta);
        self.set_clamped(index, next);
    }

    fn set_clamped(&mut self, index: usize, value: i64) {
        match index {
            layout::HOURS_STUDIED => self.hours_studied = value as u8,
            layout::ATTENDANCE_PCT => self.attendance_pct = value as u8,
            layout::SLEEP_HOURS => self.sleep_hours = value as u8,
            layout::PREVIOUS_SCORE => self.previous_score = value as u8,
            layout::TUTORING_SESSIONS => self.tutoring_sessions = value as u8,
            layout::PHYSICAL_ACTIVITY => self.physical_activity = value as u8,
            layout::PARENTAL_INVOLVEMENT => self.parental_involvement = level_of(value),
            layout::ACCESS_TO_RESOURCES => self.access_to_resources = level_of(value),
            layout::MOTIVATION_LEVEL => self.motivation_level = level_of(value),
            layout::INTERNET_ACCESS => {
                self.internet_access = if value == 0 { Internet::No } else { Internet::Yes }
            }
            layout::FAMILY_INCOME => self.family_income = level_of(value),
            layout::TEACHER_QUALITY => self.teacher_quality = level_of(value),
            _ => panic!("feature index out of range: {}", index),
        }
    }

    /// Human-readable value of the field at a layout position.
    pub fn display_value(&self, index: usize) -> String {
        match index {
            layout::PARENTAL_INVOLVEMENT => self.parental_involvement.label().to_string(),
            layout::ACCESS_TO_RESOURCES => self.access_to_resources.label().to_string(),
            layout::MOTIVATION_LEVEL => self.motivation_level.label().to_string(),
            layout::INTERNET_ACCESS => self.internet_access.label().to_string(),
            layout::FAMILY_INCOME => self.family_income.label().to_string(),
            layout::TEACHER_QUALITY => self.teacher_quality.label().to_string(),
            _ => self.value(index).to_string(),
        }
    }
}

fn level_of(value: i64) -> Level {
    match value {
        0 => Level::Low,
        1 => Level::Medium,
        _ => Level::High,
    }
}

/// Ordered numeric inputs for one prediction.
///
/// The fixed-size array makes wrong-length vectors unrepresentable once past
/// [`FeatureVector::from_slice`]; positions follow `profile::layout`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Build from a slice, failing fast on any other length.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() != FEATURE_COUNT {
            bail!(
                "feature vector must have exactly {} values, got {}",
                FEATURE_COUNT,
                values.len()
            );
        }
        let mut array = [0.0; FEATURE_COUNT];
        array.copy_from_slice(values);
        Ok(Self(array))
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> f64 {
        self.0[index]
    }

    /// Copy of this vector with one field replaced.
    pub fn with_value(&self, index: usize, value: f64) -> Self {
        let mut values = self.0;
        values[index] = value;
        Self(values)
    }

    /// The vector with every field at its documented maximum.
    pub fn all_maximums() -> Self {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, def) in values.iter_mut().zip(FEATURES.iter()) {
            *slot = def.max as f64;
        }
        Self(values)
    }
}
