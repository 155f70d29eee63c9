use std::time::Instant;

use crate::artifact::ModelSource;
use crate::profile::{StudentProfile, FEATURE_COUNT};
use crate::scoring::{Grade, ScoringModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Predict,
    Simulator,
    Analytics,
    About,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Predict, Page::Simulator, Page::Analytics, Page::About];

    pub fn title(self) -> &'static str {
        match self {
            Page::Predict => "Predict",
            Page::Simulator => "Simulator",
            Page::Analytics => "Analytics",
            Page::About => "About",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Predict => 0,
            Page::Simulator => 1,
            Page::Analytics => 2,
            Page::About => 3,
        }
    }

    pub fn next(self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn previous(self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Help,
}

pub struct App {
    pub profile: StudentProfile,
    pub model: ScoringModel,
    pub source: ModelSource,
    pub page: Page,
    pub selected: usize,
    pub input_mode: InputMode,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl App {
    /// The model is built once at startup and owned here for the rest of the
    /// process; every page reads the same instance.
    pub fn new(model: ScoringModel, source: ModelSource) -> Self {
        Self {
            profile: StudentProfile::default(),
            model,
            source,
            page: Page::Predict,
            selected: 0,
            input_mode: InputMode::Normal,
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn score(&self) -> f64 {
        self.model.predict(&self.profile.to_features())
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score())
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % FEATURE_COUNT;
    }

    pub fn previous_field(&mut self) {
        self.selected = (self.selected + FEATURE_COUNT - 1) % FEATURE_COUNT;
    }

    /// Shift the selected input, clamped to its documented range.
    pub fn adjust_selected(&mut self, delta: i64) {
        self.profile.adjust(self.selected, delta);
    }

    pub fn reset_profile(&mut self) {
        self.profile = StudentProfile::default();
        self.show_flash("Profile reset to defaults".to_string());
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.previous();
    }

    pub fn go_to_page(&mut self, page: Page) {
        self.page = page;
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::layout;
    use crate::scoring::train_fallback_model;

    fn test_app() -> App {
        App::new(train_fallback_model().unwrap(), ModelSource::SyntheticFallback)
    }

    #[test]
    fn field_selection_wraps_both_ways() {
        let mut app = test_app();
        app.previous_field();
        assert_eq!(app.selected, FEATURE_COUNT - 1);
        app.next_field();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn adjusting_clamps_to_the_field_range() {
        let mut app = test_app();
        app.selected = layout::SLEEP_HOURS;
        app.adjust_selected(100);
        assert_eq!(app.profile.sleep_hours, 10);
        app.adjust_selected(-100);
        assert_eq!(app.profile.sleep_hours, 4);
    }

    #[test]
    fn page_cycle_visits_all_pages() {
        let mut app = test_app();
        let mut seen = Vec::new();
        for _ in 0..Page::ALL.len() {
            seen.push(app.page);
            app.next_page();
        }
        assert_eq!(seen, Page::ALL.to_vec());
        assert_eq!(app.page, Page::Predict);
        app.previous_page();
        assert_eq!(app.page, Page::About);
    }

    #[test]
    fn adjusting_the_profile_changes_the_score() {
        let mut app = test_app();
        let before = app.score();
        app.selected = layout::HOURS_STUDIED;
        app.adjust_selected(20);
        assert!(app.score() > before);
    }

    #[test]
    fn reset_restores_defaults_and_flashes() {
        let mut app = test_app();
        app.selected = layout::HOURS_STUDIED;
        app.adjust_selected(10);
        app.reset_profile();
        assert_eq!(app.profile, StudentProfile::default());
        assert!(app.flash_message.is_some());
    }
}
