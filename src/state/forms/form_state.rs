//! Form state management and the volunteer intake form struct

use super::field::{FormField, ResumeFile};
use super::validate::{self, ValidationRules};
use std::collections::HashSet;

/// Capacity bounds in hours per week (one full week at the top)
pub const CAPACITY_MIN: f64 = 0.0;
pub const CAPACITY_MAX: f64 = 168.0;

/// Index of the Submit button on the buttons row
pub const SUBMIT_BUTTON: usize = 0;
/// Index of the Clear button on the buttons row
pub const CLEAR_BUTTON: usize = 1;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Identifies a form field for touched tracking and validation dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Location,
    Areas,
    Capacity,
    Experience,
    Linkedin,
    Github,
    Resume,
    Motivation,
    Consent,
    Updates,
}

/// Fields that carry a validator, in display order
const VALIDATED_FIELDS: &[FieldId] = &[
    FieldId::FullName,
    FieldId::Email,
    FieldId::Location,
    FieldId::Areas,
    FieldId::Capacity,
    FieldId::Resume,
    FieldId::Consent,
];

/// Which fields the user has interacted with, plus the one-shot submitted
/// flag. Errors stay hidden on pristine fields until the field is touched or
/// the form has been submitted once.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    touched: HashSet<FieldId>,
    submitted: bool,
}

impl InteractionState {
    /// Mark a field as touched (the user blurred or otherwise interacted)
    pub fn touch(&mut self, field: FieldId) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    /// Mark the form as submitted; reveals every error from here on
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// True when error/valid styling may be shown for this field
    pub fn reveal(&self, field: FieldId) -> bool {
        self.submitted || self.touched.contains(&field)
    }

    /// Forget all interaction (reset action and post-success cleanup)
    pub fn clear(&mut self) {
        self.touched.clear();
        self.submitted = false;
    }
}

/// The volunteer intake form: all field state, interaction tracking, and
/// focus position for one page view
#[derive(Debug, Clone)]
pub struct VolunteerForm {
    pub full_name: FormField,
    pub email: FormField,
    pub location: FormField,
    pub areas: FormField,
    pub capacity: FormField,
    pub experience: FormField,
    pub linkedin: FormField,
    pub github: FormField,
    pub resume_path: FormField,
    pub motivation: FormField,
    pub consent: bool,
    pub updates_opt_in: bool,
    pub resume: Option<ResumeFile>,
    pub interaction: InteractionState,
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row (0=Submit, 1=Clear)
    pub selected_button: usize,
}

impl VolunteerForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("full_name", "Full Name", "Ex: John Doe", false),
            email: FormField::text("email", "Email", "Ex: john.doe@example.com", false),
            location: FormField::text("location", "Location", "Ex: San Francisco, CA, USA", false),
            areas: FormField::text(
                "areas",
                "Areas of Interest",
                "Ex: Education, Healthcare, Environment",
                false,
            ),
            capacity: FormField::text("capacity", "Capacity (Hours/week)", "Ex: 2", false),
            experience: FormField::text(
                "experience",
                "Experience Level (optional)",
                "Ex: Entry, Mid, Senior",
                false,
            ),
            linkedin: FormField::text(
                "linkedin",
                "LinkedIn Link (optional)",
                "Ex: linkedin.com/in/johndoe",
                false,
            ),
            github: FormField::text(
                "github",
                "GitHub Link (optional)",
                "Ex: github.com/johndoe",
                false,
            ),
            resume_path: FormField::text(
                "resume",
                "Resume (path to PDF)",
                "Ex: ~/Documents/resume.pdf",
                false,
            ),
            motivation: FormField::text(
                "motivation",
                "Motivation (optional)",
                "Tell us more about what motivates you and where you want to plug in.",
                true,
            ),
            consent: false,
            updates_opt_in: false,
            resume: None,
            interaction: InteractionState::default(),
            active_field_index: 0,
            selected_button: SUBMIT_BUTTON,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == 12
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        self.next_button();
    }

    /// Map a focus index to its field identity (None for the buttons row)
    pub fn field_id(&self, index: usize) -> Option<FieldId> {
        match index {
            0 => Some(FieldId::FullName),
            1 => Some(FieldId::Email),
            2 => Some(FieldId::Location),
            3 => Some(FieldId::Areas),
            4 => Some(FieldId::Capacity),
            5 => Some(FieldId::Experience),
            6 => Some(FieldId::Linkedin),
            7 => Some(FieldId::Github),
            8 => Some(FieldId::Resume),
            9 => Some(FieldId::Motivation),
            10 => Some(FieldId::Consent),
            11 => Some(FieldId::Updates),
            _ => None,
        }
    }

    /// Identity of the currently focused field
    pub fn active_field_id(&self) -> Option<FieldId> {
        self.field_id(self.active_field_index)
    }

    /// True when focus is on one of the checkbox rows
    pub fn is_checkbox_active(&self) -> bool {
        matches!(
            self.active_field_id(),
            Some(FieldId::Consent | FieldId::Updates)
        )
    }

    /// Text field for an id, if the id names one
    pub fn text_field(&self, id: FieldId) -> Option<&FormField> {
        match id {
            FieldId::FullName => Some(&self.full_name),
            FieldId::Email => Some(&self.email),
            FieldId::Location => Some(&self.location),
            FieldId::Areas => Some(&self.areas),
            FieldId::Capacity => Some(&self.capacity),
            FieldId::Experience => Some(&self.experience),
            FieldId::Linkedin => Some(&self.linkedin),
            FieldId::Github => Some(&self.github),
            FieldId::Resume => Some(&self.resume_path),
            FieldId::Motivation => Some(&self.motivation),
            FieldId::Consent | FieldId::Updates => None,
        }
    }

    /// Toggle a checkbox field; other ids are ignored
    pub fn toggle(&mut self, id: FieldId) {
        match id {
            FieldId::Consent => self.consent = !self.consent,
            FieldId::Updates => self.updates_opt_in = !self.updates_opt_in,
            _ => {}
        }
    }

    /// Record the attachment metadata for the typed resume path
    pub fn set_resume(&mut self, resume: Option<ResumeFile>) {
        self.resume = resume;
    }

    /// True when the field currently holds a non-empty value
    pub fn has_value(&self, id: FieldId) -> bool {
        match id {
            FieldId::Resume => self.resume.is_some(),
            FieldId::Consent => self.consent,
            FieldId::Updates => self.updates_opt_in,
            _ => self
                .text_field(id)
                .is_some_and(FormField::has_value),
        }
    }

    /// Validation result for one field, independent of visibility
    pub fn field_error(&self, id: FieldId, rules: &ValidationRules) -> Option<String> {
        match id {
            FieldId::FullName => validate::required_text(self.full_name.text_value()),
            FieldId::Email => validate::email(self.email.text_value()),
            FieldId::Location => validate::required_text(self.location.text_value()),
            FieldId::Areas => validate::required_text(self.areas.text_value()),
            FieldId::Capacity => {
                validate::number_in_range(self.capacity.text_value(), CAPACITY_MIN, CAPACITY_MAX)
            }
            FieldId::Resume => validate::resume_file(
                self.resume.as_ref(),
                rules.resume_required,
                rules.max_upload_mb,
            ),
            FieldId::Consent => validate::consent_given(self.consent),
            FieldId::Experience
            | FieldId::Linkedin
            | FieldId::Github
            | FieldId::Motivation
            | FieldId::Updates => None,
        }
    }

    /// Every failing validator, in display order
    pub fn validation_errors(&self, rules: &ValidationRules) -> Vec<(FieldId, String)> {
        VALIDATED_FIELDS
            .iter()
            .filter_map(|id| self.field_error(*id, rules).map(|msg| (*id, msg)))
            .collect()
    }

    /// The error to render for a field: hidden until the field is touched or
    /// the form has been submitted once
    pub fn visible_error(&self, id: FieldId, rules: &ValidationRules) -> Option<String> {
        if self.interaction.reveal(id) {
            self.field_error(id, rules)
        } else {
            None
        }
    }

    /// Positive affordance: revealed, non-empty, and error-free
    pub fn shows_valid(&self, id: FieldId, rules: &ValidationRules) -> bool {
        self.interaction.reveal(id) && self.has_value(id) && self.field_error(id, rules).is_none()
    }

    /// Clear every field to its default and forget all interaction
    pub fn reset(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.location.clear();
        self.areas.clear();
        self.capacity.clear();
        self.experience.clear();
        self.linkedin.clear();
        self.github.clear();
        self.resume_path.clear();
        self.motivation.clear();
        self.consent = false;
        self.updates_opt_in = false;
        self.resume = None;
        self.interaction.clear();
        self.active_field_index = 0;
        self.selected_button = SUBMIT_BUTTON;
    }
}

impl Default for VolunteerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for VolunteerForm {
    fn field_count(&self) -> usize {
        13 // ten text fields, two checkboxes, buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(12);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.full_name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.location),
            3 => Some(&mut self.areas),
            4 => Some(&mut self.capacity),
            5 => Some(&mut self.experience),
            6 => Some(&mut self.linkedin),
            7 => Some(&mut self.github),
            8 => Some(&mut self.resume_path),
            9 => Some(&mut self.motivation),
            // Checkbox and buttons rows have no text field
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.field_id(index).and_then(|id| self.text_field(id))
    }
}
