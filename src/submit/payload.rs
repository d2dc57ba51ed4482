//! Serialization of the form for form-encoded transport
//!
//! Every key is emitted twice with identical values: once under the
//! `volunteer.` namespace and once plain. The receiving sheet's older columns
//! consume the plain set, the newer schema the namespaced one.

use crate::state::VolunteerForm;

/// Namespace prefix for the second key set
pub const FIELD_NAMESPACE: &str = "volunteer";

/// Flatten the form into transport key/value pairs.
///
/// Text fields are trimmed, booleans become `"true"`/`"false"`, and the
/// resume is carried as name/URL placeholders; the attachment bytes travel
/// through a separate upload channel.
pub fn encode_form(form: &VolunteerForm) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    push_pair(&mut pairs, "full_name", form.full_name.trimmed());
    push_pair(&mut pairs, "email", form.email.trimmed());
    push_pair(&mut pairs, "location", form.location.trimmed());
    push_pair(&mut pairs, "areas", form.areas.trimmed());
    push_pair(&mut pairs, "capacity", form.capacity.trimmed());
    push_pair(&mut pairs, "experience", form.experience.trimmed());
    push_pair(&mut pairs, "linkedin", form.linkedin.trimmed());
    push_pair(&mut pairs, "github", form.github.trimmed());
    push_pair(&mut pairs, "motivation", form.motivation.trimmed());
    push_pair(&mut pairs, "consent", bool_text(form.consent));
    push_pair(&mut pairs, "updates_opt_in", bool_text(form.updates_opt_in));

    let resume_name = form.resume.as_ref().map(|f| f.name.as_str()).unwrap_or("");
    push_pair(&mut pairs, "resume_name", resume_name);
    // Filled in by the upload collaborator once the file lands in storage
    push_pair(&mut pairs, "resume_url", "");

    pairs
}

fn push_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    pairs.push((format!("{FIELD_NAMESPACE}.{key}"), value.to_string()));
    pairs.push((key.to_string(), value.to_string()));
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
