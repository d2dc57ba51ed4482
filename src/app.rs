//! Application state and core logic

use crate::config::IntakeConfig;
use crate::state::{
    AppState, FieldId, Form, ResumeFile, SubmissionState, CLEAR_BUTTON, SUBMIT_BUTTON,
};
use crate::submit::{encode_form, IntakeClient, IntakeClientTrait};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Deployment configuration, fixed at construction
    pub config: IntakeConfig,
    /// Client for the intake endpoint
    client: Box<dyn IntakeClientTrait>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: IntakeConfig) -> Result<Self> {
        let client = Box::new(IntakeClient::new(&config)?);
        Ok(Self {
            state: AppState::default(),
            config,
            client,
        })
    }

    /// Create an App with an injected client
    #[cfg(test)]
    fn with_client(config: IntakeConfig, client: Box<dyn IntakeClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            config,
            client,
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Submit and reset controls are disabled while a submission is in
        // flight; nothing else is actionable either
        if self.state.submission.is_submitting() {
            return Ok(());
        }

        let on_buttons = self.state.form.is_buttons_row_active();
        let on_checkbox = self.state.form.is_checkbox_active();

        match key.code {
            KeyCode::Tab => self.advance_field(false),
            KeyCode::BackTab => self.advance_field(true),
            // Button row navigation
            KeyCode::Left | KeyCode::Up if on_buttons => self.state.form.prev_button(),
            KeyCode::Right | KeyCode::Down if on_buttons => self.state.form.next_button(),
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                SUBMIT_BUTTON => self.submit().await,
                CLEAR_BUTTON => self.reset(),
                _ => {}
            },
            // Shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset();
            }
            // Checkbox toggling
            KeyCode::Char(' ') if on_checkbox => self.toggle_active_checkbox(),
            // Form field input
            KeyCode::Char(c) if !on_buttons && !on_checkbox => self.input_char(c),
            KeyCode::Backspace if !on_buttons && !on_checkbox => self.backspace(),
            KeyCode::Enter => {
                // Enter adds a newline in the motivation textarea and
                // otherwise advances focus
                if self
                    .state
                    .form
                    .get_field(self.state.form.active_field())
                    .is_some_and(|f| f.is_multiline)
                {
                    self.input_char('\n');
                } else {
                    self.advance_field(false);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Move focus, marking the field being left as touched (blur)
    fn advance_field(&mut self, backwards: bool) {
        self.blur_active();
        if backwards {
            self.state.form.prev_field();
        } else {
            self.state.form.next_field();
        }
    }

    /// Blur handling for the focused field
    fn blur_active(&mut self) {
        if let Some(id) = self.state.form.active_field_id() {
            self.state.form.interaction.touch(id);
            if id == FieldId::Resume {
                self.refresh_resume();
            }
        }
    }

    /// Re-stat the typed resume path into attachment metadata
    fn refresh_resume(&mut self) {
        let path = self.state.form.resume_path.trimmed().to_string();
        let resume = if path.is_empty() {
            None
        } else {
            ResumeFile::from_path(&path)
        };
        self.state.form.set_resume(resume);
    }

    fn input_char(&mut self, c: char) {
        self.state.show_success = false;
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.push_char(c);
        }
    }

    fn backspace(&mut self) {
        self.state.show_success = false;
        if let Some(field) = self.state.form.get_active_field_mut() {
            field.pop_char();
        }
    }

    fn toggle_active_checkbox(&mut self) {
        self.state.show_success = false;
        if let Some(id) = self.state.form.active_field_id() {
            self.state.form.toggle(id);
            self.state.form.interaction.touch(id);
        }
    }

    /// Attempt a submission.
    ///
    /// Marks the form as submitted (revealing every error), recomputes all
    /// validators, and only enters `Submitting` when the form is clean. On
    /// abort no network call is made; consent is additionally marked touched
    /// when it is the failing field.
    async fn submit(&mut self) {
        if self.state.submission.is_submitting() {
            return;
        }
        self.state.show_success = false;

        // The path may have been edited without leaving the field
        self.refresh_resume();
        self.state.form.interaction.mark_submitted();

        let rules = self.config.rules();
        let errors = self.state.form.validation_errors(&rules);
        if !errors.is_empty() {
            if errors.iter().any(|(id, _)| *id == FieldId::Consent) {
                self.state.form.interaction.touch(FieldId::Consent);
            }
            tracing::debug!(errors = errors.len(), "submission blocked by validation");
            return;
        }

        let payload = encode_form(&self.state.form);
        self.state.submission = SubmissionState::Submitting;

        match self.client.submit(&payload).await {
            Ok(receipt) => {
                tracing::info!(status = receipt.status, "application submitted");
                self.state.submission = SubmissionState::Succeeded;
                self.finish_success();
            }
            Err(err) => {
                tracing::warn!(error = %err, "submission failed");
                self.state.submission = SubmissionState::Failed(err.user_message());
            }
        }
    }

    /// Post-success cleanup: the form and interaction state are cleared and
    /// the machine returns to idle; only the banner flag survives
    fn finish_success(&mut self) {
        self.state.form.reset();
        self.state.submission = SubmissionState::Idle;
        self.state.show_success = true;
    }

    /// Clear the form, interaction state, and banners
    fn reset(&mut self) {
        if self.state.submission.is_submitting() {
            return;
        }
        self.state.form.reset();
        self.state.submission = SubmissionState::Idle;
        self.state.show_success = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ResumeFile;
    use crate::submit::{MockIntakeClientTrait, SubmitError, SubmitReceipt};
    use pretty_assertions::assert_eq;

    fn test_config() -> IntakeConfig {
        IntakeConfig {
            endpoint: Some("http://localhost:8787/upload".to_string()),
            max_upload_mb: Some(5),
            resume_required: Some(true),
        }
    }

    fn app_with(mock: MockIntakeClientTrait) -> App {
        App::with_client(test_config(), Box::new(mock))
    }

    fn pdf_resume() -> ResumeFile {
        ResumeFile {
            name: "cv.pdf".to_string(),
            size_bytes: 4 * 1024 * 1024,
            media_type: "application/pdf".to_string(),
        }
    }

    fn fill_valid(app: &mut App) {
        let form = &mut app.state.form;
        form.full_name.set_text("John Doe".to_string());
        form.email.set_text("john.doe@example.com".to_string());
        form.location.set_text("San Francisco, CA".to_string());
        form.areas.set_text("Education".to_string());
        form.capacity.set_text("2".to_string());
        form.set_resume(Some(pdf_resume()));
        form.consent = true;
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[tokio::test]
    async fn test_submit_success_resets_everything() {
        let mut mock = MockIntakeClientTrait::new();
        mock.expect_submit().times(1).returning(|_| {
            Ok(SubmitReceipt {
                status: 200,
                body: "ok".to_string(),
            })
        });
        let mut app = app_with(mock);
        fill_valid(&mut app);

        app.submit().await;

        assert_eq!(app.state.submission, SubmissionState::Idle);
        assert!(app.state.show_success);
        assert_eq!(app.state.form.full_name.text_value(), "");
        assert!(!app.state.form.consent);
        assert!(app.state.form.resume.is_none());
        assert!(!app.state.form.interaction.is_submitted());
    }

    #[tokio::test]
    async fn test_submit_sends_both_key_sets() {
        let mut mock = MockIntakeClientTrait::new();
        mock.expect_submit()
            .withf(|fields| {
                let find = |key: &str| {
                    fields
                        .iter()
                        .find(|(k, _)| k == key)
                        .map(|(_, v)| v.as_str())
                };
                find("full_name") == Some("John Doe")
                    && find("volunteer.full_name") == Some("John Doe")
                    && find("consent") == Some("true")
            })
            .times(1)
            .returning(|_| {
                Ok(SubmitReceipt {
                    status: 200,
                    body: String::new(),
                })
            });
        let mut app = app_with(mock);
        fill_valid(&mut app);

        app.submit().await;
        assert!(app.state.show_success);
    }

    #[tokio::test]
    async fn test_submit_without_consent_makes_no_call() {
        let mut mock = MockIntakeClientTrait::new();
        mock.expect_submit().times(0);
        let mut app = app_with(mock);
        fill_valid(&mut app);
        app.state.form.consent = false;

        app.submit().await;

        assert_eq!(app.state.submission, SubmissionState::Idle);
        assert!(app.state.form.interaction.is_touched(FieldId::Consent));
        assert_eq!(
            app.state
                .form
                .visible_error(FieldId::Consent, &app.config.rules()),
            Some("Consent is required to proceed".to_string())
        );
        // The rest of the form is untouched by the abort
        assert_eq!(app.state.form.full_name.text_value(), "John Doe");
    }

    #[tokio::test]
    async fn test_submit_with_empty_form_makes_no_call() {
        let mut mock = MockIntakeClientTrait::new();
        mock.expect_submit().times(0);
        let mut app = app_with(mock);

        app.submit().await;

        assert_eq!(app.state.submission, SubmissionState::Idle);
        // The failed attempt reveals every error from here on
        assert!(app.state.form.interaction.is_submitted());
        assert!(app
            .state
            .form
            .visible_error(FieldId::Email, &app.config.rules())
            .is_some());
    }

    #[tokio::test]
    async fn test_submit_failure_preserves_form() {
        let mut mock = MockIntakeClientTrait::new();
        mock.expect_submit().times(1).returning(|_| {
            Err(SubmitError::Endpoint {
                status: 503,
                body: "over quota".to_string(),
            })
        });
        let mut app = app_with(mock);
        fill_valid(&mut app);

        app.submit().await;

        assert_eq!(
            app.state.submission,
            SubmissionState::Failed("Submission failed (503): over quota".to_string())
        );
        assert!(!app.state.show_success);
        assert_eq!(app.state.form.full_name.text_value(), "John Doe");
        assert!(app.state.form.consent);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_succeeds() {
        let mut mock = MockIntakeClientTrait::new();
        let mut attempt = 0;
        mock.expect_submit().times(2).returning(move |_| {
            attempt += 1;
            if attempt == 1 {
                Err(SubmitError::Endpoint {
                    status: 500,
                    body: String::new(),
                })
            } else {
                Ok(SubmitReceipt {
                    status: 200,
                    body: String::new(),
                })
            }
        });
        let mut app = app_with(mock);
        fill_valid(&mut app);

        app.submit().await;
        assert!(matches!(app.state.submission, SubmissionState::Failed(_)));

        app.submit().await;
        assert_eq!(app.state.submission, SubmissionState::Idle);
        assert!(app.state.show_success);
    }

    #[tokio::test]
    async fn test_ctrl_s_submits() {
        let mut mock = MockIntakeClientTrait::new();
        mock.expect_submit().times(1).returning(|_| {
            Ok(SubmitReceipt {
                status: 200,
                body: String::new(),
            })
        });
        let mut app = app_with(mock);
        fill_valid(&mut app);

        app.handle_key(ctrl('s')).await.unwrap();
        assert!(app.state.show_success);
    }

    #[tokio::test]
    async fn test_reset_clears_form_and_banners() {
        let mut app = app_with(MockIntakeClientTrait::new());
        fill_valid(&mut app);
        app.state.form.interaction.mark_submitted();
        app.state.submission = SubmissionState::Failed("boom".to_string());
        app.state.show_success = true;

        app.handle_key(ctrl('r')).await.unwrap();

        assert_eq!(app.state.submission, SubmissionState::Idle);
        assert!(!app.state.show_success);
        assert_eq!(app.state.form.full_name.text_value(), "");
        assert!(!app.state.form.interaction.is_submitted());
    }

    #[tokio::test]
    async fn test_tab_marks_left_field_touched() {
        let mut app = app_with(MockIntakeClientTrait::new());

        app.handle_key(key(KeyCode::Tab)).await.unwrap();

        assert!(app.state.form.interaction.is_touched(FieldId::FullName));
        assert!(!app.state.form.interaction.is_touched(FieldId::Email));
        assert_eq!(app.state.form.active_field(), 1);
    }

    #[tokio::test]
    async fn test_typing_fills_active_field() {
        let mut app = app_with(MockIntakeClientTrait::new());

        app.handle_key(key(KeyCode::Char('J'))).await.unwrap();
        app.handle_key(key(KeyCode::Char('o'))).await.unwrap();
        app.handle_key(key(KeyCode::Backspace)).await.unwrap();

        assert_eq!(app.state.form.full_name.text_value(), "J");
    }

    #[tokio::test]
    async fn test_space_toggles_consent_and_touches_it() {
        let mut app = app_with(MockIntakeClientTrait::new());
        app.state.form.set_active_field(10); // consent row

        app.handle_key(key(KeyCode::Char(' '))).await.unwrap();

        assert!(app.state.form.consent);
        assert!(app.state.form.interaction.is_touched(FieldId::Consent));
    }

    #[tokio::test]
    async fn test_enter_adds_newline_in_motivation() {
        let mut app = app_with(MockIntakeClientTrait::new());
        app.state.form.set_active_field(9); // motivation textarea
        app.handle_key(key(KeyCode::Char('h'))).await.unwrap();
        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        app.handle_key(key(KeyCode::Char('i'))).await.unwrap();

        assert_eq!(app.state.form.motivation.text_value(), "h\ni");
        // Focus stayed put
        assert_eq!(app.state.form.active_field(), 9);
    }

    #[tokio::test]
    async fn test_edit_clears_success_banner() {
        let mut app = app_with(MockIntakeClientTrait::new());
        app.state.show_success = true;

        app.handle_key(key(KeyCode::Char('J'))).await.unwrap();

        assert!(!app.state.show_success);
    }

    #[tokio::test]
    async fn test_button_row_navigation_and_clear() {
        let mut app = app_with(MockIntakeClientTrait::new());
        fill_valid(&mut app);
        app.state.form.set_active_field(12);

        app.handle_key(key(KeyCode::Right)).await.unwrap();
        assert_eq!(app.state.form.selected_button, CLEAR_BUTTON);

        app.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.state.form.full_name.text_value(), "");
    }
}
