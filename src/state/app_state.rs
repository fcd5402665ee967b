//! Application state definitions

use crate::api::EstimateResponse;
use crate::estimate::ValidationError;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The estimate form
    #[default]
    Form,
    /// Rendered estimate returned by the service
    Results,
}

/// Main application state
///
/// The form has exactly two observable states: editing/idle and submitting.
/// `submitting` guards against a second in-flight request and drives the
/// busy indicator; it is cleared on every submission outcome.
#[derive(Default)]
pub struct AppState {
    pub current_view: View,
    pub submitting: bool,

    /// The last successful estimate, consumed by the results view
    pub estimate: Option<EstimateResponse>,

    /// Transient user-facing notification (success or failure text)
    pub status_message: Option<String>,

    /// Field-level errors from the last failed validation
    pub validation_errors: Vec<ValidationError>,

    /// Scroll position in the results view
    pub scroll_offset: usize,
}

impl AppState {
    /// Scroll down one line
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up one line
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down a page (10 lines)
    pub fn scroll_down_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(10);
    }

    /// Scroll up a page (10 lines)
    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(10);
    }

    /// Reset scrolling (entering a view)
    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    /// First validation message for the given wire field name, if any
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.validation_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle_form() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Form);
        assert!(!state.submitting);
        assert!(state.estimate.is_none());
        assert!(state.status_message.is_none());
        assert!(state.validation_errors.is_empty());
    }

    #[test]
    fn test_scroll_up_saturates_at_zero() {
        let mut state = AppState::default();
        state.scroll_up();
        state.scroll_up_page();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_page_moves_ten_lines() {
        let mut state = AppState::default();
        state.scroll_down_page();
        assert_eq!(state.scroll_offset, 10);
        state.scroll_up();
        assert_eq!(state.scroll_offset, 9);
        state.reset_scroll();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_field_error_lookup() {
        let mut state = AppState::default();
        state.validation_errors = vec![ValidationError {
            field: "bedrooms",
            message: "Bedrooms must be at least 1.".to_string(),
        }];
        assert_eq!(
            state.field_error("bedrooms"),
            Some("Bedrooms must be at least 1.")
        );
        assert_eq!(state.field_error("bathrooms"), None);
    }
}
