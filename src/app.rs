//! Application state and core logic

use crate::api::{
    ApiError, EstimateRequest, EstimateResponse, EstimatorClient, HttpEstimatorClient,
    GENERIC_REMOTE_ERROR,
};
use crate::config::TuiConfig;
use crate::estimate::validate;
use crate::state::{AppState, EstimateForm, FieldKind, Form, View, FIELD_AREA, FIELD_SUBMIT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// The estimate form being edited
    pub form: EstimateForm,
    /// Client for the estimation service
    client: Arc<dyn EstimatorClient>,
    /// Completion channel for the in-flight submission, if any
    pending: Option<oneshot::Receiver<Result<EstimateResponse, ApiError>>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_client(Arc::new(HttpEstimatorClient::new(config.endpoint.clone())))
    }

    /// Create an App with a specific client (used by tests)
    pub fn with_client(client: Arc<dyn EstimatorClient>) -> Self {
        Self {
            state: AppState::default(),
            form: EstimateForm::new(),
            client,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Set a transient user-facing notification
    pub fn push_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }

    /// Handle a key event for the current view
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Form => self.handle_form_key(key),
            View::Results => self.handle_results_key(key),
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // A single outstanding request at a time: everything except quit is
        // ignored while a submission is in flight.
        if self.state.submitting {
            return;
        }

        let active = self.form.active_field_index;
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => {
                self.blur_if_leaving_area(active);
                self.form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.blur_if_leaving_area(active);
                self.form.prev_field();
            }
            KeyCode::Left => self.form.cycle_field(active, false),
            KeyCode::Right => self.form.cycle_field(active, true),
            KeyCode::Enter => {
                if active == FIELD_SUBMIT {
                    self.submit_estimate();
                } else {
                    self.blur_if_leaving_area(active);
                    self.form.next_field();
                }
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_estimate();
            }
            KeyCode::Char(c) => self.handle_form_char(active, c),
            KeyCode::Backspace => match EstimateForm::field_kind(active) {
                FieldKind::Numeric => self.form.area_pop_char(),
                FieldKind::Text => {
                    if let Some(field) = self.form.text_field_mut(active) {
                        field.pop_char();
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_form_char(&mut self, active: usize, c: char) {
        match EstimateForm::field_kind(active) {
            FieldKind::Numeric => self.form.area_push_char(c),
            FieldKind::Text => {
                if let Some(field) = self.form.text_field_mut(active) {
                    field.push_char(c);
                }
            }
            FieldKind::Select => {
                if c == ' ' {
                    self.form.cycle_field(active, true);
                }
            }
            FieldKind::Count => {
                if let Some(digit) = c.to_digit(10) {
                    self.form.set_count_from_digit(active, digit);
                } else if c == ' ' {
                    self.form.cycle_field(active, true);
                }
            }
            FieldKind::Submit => {}
        }
    }

    /// Leaving the area field is the blur point for the blank-commit rule.
    fn blur_if_leaving_area(&mut self, active: usize) {
        if active == FIELD_AREA {
            self.form.on_area_blur();
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('b') => {
                self.state.current_view = View::Form;
                self.state.status_message = None;
                self.state.reset_scroll();
            }
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::PageDown => self.state.scroll_down_page(),
            KeyCode::PageUp => self.state.scroll_up_page(),
            _ => {}
        }
    }

    /// Validate the form and, if clean, POST it to the estimation service.
    ///
    /// The request runs on a spawned task so the event loop keeps drawing
    /// (busy indicator, Ctrl+C quit) while it is in flight; the outcome is
    /// collected by `poll_submission`. Validation failures surface one
    /// notification and never leave the form.
    pub fn submit_estimate(&mut self) {
        if self.state.submitting {
            return;
        }

        // Submission implies leaving the area field: commit a blank buffer.
        self.form.on_area_blur();
        self.state.validation_errors.clear();

        let validated = match validate(&self.form) {
            Ok(validated) => validated,
            Err(errors) => {
                tracing::warn!(count = errors.len(), "form failed validation");
                self.push_status(errors[0].message.clone());
                self.state.validation_errors = errors;
                return;
            }
        };

        let request = EstimateRequest::from(&validated);
        let client = Arc::clone(&self.client);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = client.fetch_estimate(&request).await;
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
        self.state.submitting = true;
    }

    /// Collect a finished submission, if any. Called once per event-loop
    /// iteration; does nothing while the request is still in flight.
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => {
                Err(ApiError::Remote {
                    status: 0,
                    detail: GENERIC_REMOTE_ERROR.to_string(),
                })
            }
        };

        self.pending = None;
        self.state.submitting = false;

        match result {
            Ok(response) => {
                self.state.estimate = Some(response);
                self.state.current_view = View::Results;
                self.state.reset_scroll();
                self.push_status("Estimate generated successfully!");
            }
            Err(err) => {
                tracing::error!(%err, "estimate submission failed");
                self.push_status(err.user_message());
            }
        }
    }
}
