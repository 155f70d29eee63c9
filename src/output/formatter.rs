use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::analytics::{factor_levels, improvement_scenarios, max_achievable_score, potential_gain};
use crate::artifact::ModelSource;
use crate::profile::{StudentProfile, FEATURES};
use crate::scoring::{Grade, ScoringModel};

const METER_WIDTH: usize = 10;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with one decimal ("76.4")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Format a signed delta ("+3.2", "-0.4", "±0.0")
pub fn format_delta(delta: f64) -> String {
    if delta > 0.05 {
        format!("+{:.1}", delta)
    } else if delta < -0.05 {
        format!("{:.1}", delta)
    } else {
        "±0.0".to_string()
    }
}

/// Fixed-width meter bar ("███████░░░") for a fraction in [0, 1]
pub fn meter_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width.saturating_sub(filled)));
    bar
}

/// Full plain-text analysis of one profile, for piped or `--report` output.
pub fn format_report(
    profile: &StudentProfile,
    model: &ScoringModel,
    source: &ModelSource,
    use_colors: bool,
) -> String {
    let features = profile.to_features();
    let score = model.predict(&features);
    let grade = Grade::from_score(score);
    let width = rule_width();

    let mut out = String::new();
    let rule = "─".repeat(width);

    if use_colors {
        out.push_str(&format!(
            "ScoreIQ — predicted {} (Grade {})\n",
            format_score(score).bold(),
            grade.label().bold()
        ));
    } else {
        out.push_str(&format!(
            "ScoreIQ — predicted {} (Grade {})\n",
            format_score(score),
            grade.label()
        ));
    }
    out.push_str(&format!("model: {}\n", source.describe()));
    out.push_str(&rule);
    out.push('\n');

    out.push_str("Profile\n");
    for (index, def) in FEATURES.iter().enumerate() {
        out.push_str(&format!(
            "  {:<14} {}\n",
            def.label,
            profile.display_value(index)
        ));
    }
    out.push('\n');

    out.push_str("Grade Scale\n");
    for band in Grade::ALL {
        let marker = if band == grade { ">" } else { " " };
        let line = format!("  {} {:<3} {}\n", marker, band.label(), band.band());
        if use_colors && band == grade {
            out.push_str(&line.green().to_string());
        } else {
            out.push_str(&line);
        }
    }
    out.push('\n');

    out.push_str("Factors\n");
    for (label, level) in factor_levels(profile) {
        out.push_str(&format!(
            "  {:<12} {} {:>4.0}%\n",
            label,
            meter_bar(level, METER_WIDTH),
            level * 100.0
        ));
    }
    out.push('\n');

    out.push_str("Improvement Scenarios\n");
    for scenario in improvement_scenarios(model, profile) {
        let delta = format_delta(scenario.delta);
        let line = format!(
            "  {:<18} {:>5}  {:>5}\n",
            scenario.label,
            format_score(scenario.projected),
            delta
        );
        if use_colors && scenario.delta > 0.05 {
            out.push_str(&line.green().to_string());
        } else {
            out.push_str(&line);
        }
    }
    out.push('\n');

    let gain = potential_gain(model, score);
    out.push_str(&format!(
        "Potential gain: {} (optimised profile reaches {})\n",
        format_delta(gain),
        format_score(max_achievable_score(model))
    ));

    out
}

/// Width for horizontal rules, bounded for pipes and very wide terminals.
fn rule_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| (w as usize).min(72))
        .unwrap_or(60)
}
