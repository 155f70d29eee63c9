use crate::profile::{layout, Level, StudentProfile, FEATURES};

const MAX_INSIGHTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Warn,
    Bad,
    Info,
}

/// One advisory line for the dashboard's insight panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub severity: Severity,
    pub title: &'static str,
    pub body: &'static str,
}

/// Fixed threshold rules over the profile, strongest signals first, capped
/// at five entries.
pub fn insights(profile: &StudentProfile) -> Vec<Insight> {
    let mut tips = Vec::new();

    if profile.hours_studied < 10 {
        tips.push(Insight {
            severity: Severity::Bad,
            title: "Low Study Hours",
            body: "Increase to 20+ hrs/week for a meaningful boost.",
        });
    } else if profile.hours_studied >= 30 {
        tips.push(Insight {
            severity: Severity::Good,
            title: "Strong Study Habit",
            body: "Top-percentile — primary performance driver.",
        });
    } else {
        tips.push(Insight {
            severity: Severity::Warn,
            title: "Moderate Study",
            body: "Targeting 25+ hrs/week could push the score higher.",
        });
    }

    if profile.attendance_pct < 75 {
        tips.push(Insight {
            severity: Severity::Bad,
            title: "Low Attendance",
            body: "Below 75% strongly predicts lower scores.",
        });
    } else if profile.attendance_pct >= 90 {
        tips.push(Insight {
            severity: Severity::Good,
            title: "Excellent Attendance",
            body: "Top tier — one of the highest-impact factors.",
        });
    } else {
        tips.push(Insight {
            severity: Severity::Warn,
            title: "Good Attendance",
            body: "Reaching 90%+ would unlock full benefit.",
        });
    }

    if profile.sleep_hours < 6 {
        tips.push(Insight {
            severity: Severity::Warn,
            title: "Sleep Deprivation",
            body: "7-8 hrs/night improves cognitive performance.",
        });
    } else if profile.sleep_hours >= 7 {
        tips.push(Insight {
            severity: Severity::Good,
            title: "Healthy Sleep",
            body: "Consistent sleep supports sustained output.",
        });
    }

    if profile.tutoring_sessions >= 4 {
        tips.push(Insight {
            severity: Severity::Info,
            title: "Active Tutoring",
            body: "Frequent sessions positively lift the prediction.",
        });
    } else if profile.tutoring_sessions == 0 {
        tips.push(Insight {
            severity: Severity::Warn,
            title: "No Tutoring",
            body: "1-2 sessions/month can improve focused learning.",
        });
    }

    if profile.motivation_level == Level::Low {
        tips.push(Insight {
            severity: Severity::Bad,
            title: "Low Motivation",
            body: "Key behavioural predictor — address this first.",
        });
    }

    tips.truncate(MAX_INSIGHTS);
    tips
}

/// The seven factor meters on the Predict page, normalized to [0, 1] via
/// each feature's documented range.
pub fn factor_levels(profile: &StudentProfile) -> Vec<(&'static str, f64)> {
    let features = profile.to_features();
    let meters = [
        ("Study Hours", layout::HOURS_STUDIED),
        ("Attendance", layout::ATTENDANCE_PCT),
        ("Sleep", layout::SLEEP_HOURS),
        ("Prev Score", layout::PREVIOUS_SCORE),
        ("Tutoring", layout::TUTORING_SESSIONS),
        ("Motivation", layout::MOTIVATION_LEVEL),
        ("Teacher Q.", layout::TEACHER_QUALITY),
    ];
    meters
        .into_iter()
        .map(|(label, index)| (label, FEATURES[index].normalized(features.get(index))))
        .collect()
}
