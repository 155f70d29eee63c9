pub mod insight;
pub mod scenario;
pub mod sensitivity;

pub use insight::{factor_levels, insights, Insight, Severity};
pub use scenario::{improvement_scenarios, scenario_delta, Scenario};
pub use sensitivity::{
    max_achievable_score, potential_gain, score_grid, sensitivity_curve, GridAxis, ScoreGrid,
};
