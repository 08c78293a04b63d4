//! Two-step profile form.
//!
//! ```text
//! PersonalDetails ⇄ AcademicInformation → submit
//! ```
//!
//! `next` gates on the personal-details required fields; `submit` validates
//! the whole profile. Field errors stay attached until the field is edited.
//!
//! Family occupation is optional, so the step-1 gate leaves it out even
//! though the field sits on that step. Earlier versions of the form blocked
//! `next` on it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::profile::{InputKind, Profile, ProfileField};
use crate::ui::html::{hidden_input, hidden_profile, html_escape};

/// Message attached by the `next` gate.
pub const FIELD_REQUIRED: &str = "This field is required";

/// Number of wizard steps.
pub const TOTAL_STEPS: u8 = 2;

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: age, gender, caste, religion, family background.
    #[default]
    PersonalDetails,
    /// Step 2: academics, location, institution.
    AcademicInformation,
}

impl WizardStep {
    /// Step after this one, or `None` on the last step.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::PersonalDetails => Some(Self::AcademicInformation),
            Self::AcademicInformation => None,
        }
    }

    /// Step before this one, or `None` on the first step.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::PersonalDetails => None,
            Self::AcademicInformation => Some(Self::PersonalDetails),
        }
    }

    /// 1-based step number.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::PersonalDetails => 1,
            Self::AcademicInformation => 2,
        }
    }

    /// Parse a 1-based step number.
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::PersonalDetails),
            2 => Some(Self::AcademicInformation),
            _ => None,
        }
    }

    /// Step title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalDetails => "Personal Details",
            Self::AcademicInformation => "Academic Information",
        }
    }

    /// Fields shown on this step, in display order.
    #[must_use]
    pub fn fields(self) -> &'static [ProfileField] {
        match self {
            Self::PersonalDetails => &[
                ProfileField::Age,
                ProfileField::Gender,
                ProfileField::Caste,
                ProfileField::Religion,
                ProfileField::FamilyIncome,
                ProfileField::FamilyOccupation,
            ],
            Self::AcademicInformation => &[
                ProfileField::AcademicPerformance,
                ProfileField::Gpa,
                ProfileField::FieldOfStudy,
                ProfileField::InstitutionType,
                ProfileField::Location,
            ],
        }
    }

    /// Fields that must be filled before leaving this step with `next`.
    #[must_use]
    pub fn gate(self) -> &'static [ProfileField] {
        match self {
            Self::PersonalDetails => &[
                ProfileField::Age,
                ProfileField::Gender,
                ProfileField::Caste,
                ProfileField::Religion,
                ProfileField::FamilyIncome,
            ],
            Self::AcademicInformation => &[],
        }
    }

    /// Progress through the wizard as a whole percentage.
    #[must_use]
    pub fn progress_percent(self) -> u8 {
        self.number() * 100 / TOTAL_STEPS
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}: {}", self.number(), TOTAL_STEPS, self.title())
    }
}

/// Why a submission was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Submit is only reachable from the last step.
    #[error("submit is only available on the last step")]
    NotLastStep,
    /// A search is already running.
    #[error("a search is already in progress")]
    Busy,
    /// Required fields are missing; errors are attached to each.
    #[error("missing required fields: {0:?}")]
    Invalid(Vec<ProfileField>),
}

/// Two-step form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormWizard {
    step: WizardStep,
    profile: Profile,
    errors: BTreeMap<ProfileField, String>,
    loading: bool,
}

impl FormWizard {
    /// An empty wizard on the first step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A wizard restored at `step` with `profile`, no errors.
    #[must_use]
    pub fn restore(step: WizardStep, profile: Profile) -> Self {
        Self {
            step,
            profile,
            errors: BTreeMap::new(),
            loading: false,
        }
    }

    /// Current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Profile as edited so far.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Error attached to `field`, if any.
    pub fn error(&self, field: ProfileField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// All attached errors.
    pub fn errors(&self) -> &BTreeMap<ProfileField, String> {
        &self.errors
    }

    /// Whether a search is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Set by the caller while its search request is pending.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Go back to the first step and clear errors.
    pub fn reset_step(&mut self) {
        self.step = WizardStep::default();
        self.errors.clear();
    }

    /// Set `field` and clear its error.
    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) {
        self.profile.set(field, value);
        self.errors.remove(&field);
    }

    /// Advance if every gated field of the current step is filled.
    ///
    /// Returns whether the step changed. On failure each empty gated field
    /// gets [`FIELD_REQUIRED`].
    pub fn next(&mut self) -> bool {
        let Some(next) = self.step.next() else {
            return false;
        };

        let missing: Vec<ProfileField> = self
            .step
            .gate()
            .iter()
            .copied()
            .filter(|f| !self.profile.is_filled(*f))
            .collect();

        if missing.is_empty() {
            self.step = next;
            true
        } else {
            for field in missing {
                self.errors.insert(field, FIELD_REQUIRED.to_owned());
            }
            false
        }
    }

    /// Step back without validation. Returns whether the step changed.
    pub fn previous(&mut self) -> bool {
        match self.step.previous() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Validate the whole profile and hand it off.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::NotLastStep`] before the last step (no errors attached)
    /// - [`SubmitError::Busy`] while loading
    /// - [`SubmitError::Invalid`] with every missing required field; each gets
    ///   its field-specific message
    pub fn submit(&mut self) -> Result<Profile, SubmitError> {
        if self.step.next().is_some() {
            return Err(SubmitError::NotLastStep);
        }
        if self.loading {
            return Err(SubmitError::Busy);
        }

        let missing: Vec<ProfileField> = ProfileField::ALL
            .into_iter()
            .filter(|f| f.is_required() && !self.profile.is_filled(*f))
            .collect();

        if !missing.is_empty() {
            for field in &missing {
                self.errors.insert(*field, field.required_message());
            }
            return Err(SubmitError::Invalid(missing));
        }

        Ok(self.profile.clone())
    }
}

fn render_field(wizard: &FormWizard, field: ProfileField) -> String {
    let Some(input) = field.input() else {
        return String::new();
    };
    let name = field.name();
    let value = wizard.profile().get(field);

    let control = match input {
        InputKind::Text(placeholder) => format!(
            r#"<input id="{name}" name="{name}" type="text" placeholder="{}" value="{}">"#,
            html_escape(placeholder),
            html_escape(value)
        ),
        InputKind::Select { prompt, options } => {
            let mut html = format!(r#"<select id="{name}" name="{name}">"#);
            html.push_str(&format!(
                r#"<option value=""{}>{}</option>"#,
                if value.is_empty() { " selected" } else { "" },
                html_escape(prompt)
            ));
            for option in options {
                let selected = if *option == value { " selected" } else { "" };
                html.push_str(&format!(
                    r#"<option value="{0}"{1}>{0}</option>"#,
                    html_escape(option),
                    selected
                ));
            }
            html.push_str("</select>");
            html
        }
    };

    let error = wizard
        .error(field)
        .map(|msg| format!(r#"<p class="field-error">{}</p>"#, html_escape(msg)))
        .unwrap_or_default();

    format!(
        r#"<div class="field"><label for="{name}">{}</label>{control}{error}</div>"#,
        html_escape(field.label())
    )
}

/// Render the wizard as a self-posting form.
///
/// `notice` is shown above the fields when a failed search is surfaced.
#[must_use]
pub fn render_wizard(wizard: &FormWizard, notice: Option<&str>) -> String {
    let step = wizard.step();
    let mut html = String::new();

    html.push_str(r#"<div class="card">"#);
    html.push_str(r#"<h2>Student Information</h2>"#);
    html.push_str(&format!(r#"<p>{}</p>"#, html_escape(&step.to_string())));
    html.push_str(&format!(
        r#"<div class="progress"><div class="progress-bar" style="width: {}%"></div></div>"#,
        step.progress_percent()
    ));

    if let Some(notice) = notice {
        html.push_str(&format!(
            r#"<div class="card alert-error" role="alert">{}</div>"#,
            html_escape(notice)
        ));
    }

    html.push_str(r#"<form method="post" action="/">"#);
    html.push_str(&hidden_input("page", "form"));
    html.push_str(&hidden_input("wizardStep", &step.number().to_string()));
    html.push_str(&hidden_profile(wizard.profile(), step.fields()));

    html.push_str(r#"<div class="grid">"#);
    for field in step.fields() {
        html.push_str(&render_field(wizard, *field));
    }
    html.push_str(r#"</div>"#);

    html.push_str(r#"<div class="actions">"#);
    if step.previous().is_some() {
        html.push_str(
            r#"<button type="submit" name="event" value="previous" class="outline">Previous</button>"#,
        );
    } else {
        html.push_str(r#"<div></div>"#);
    }
    if step.next().is_some() {
        html.push_str(r#"<button type="submit" name="event" value="next">Next</button>"#);
    } else if wizard.is_loading() {
        html.push_str(
            r#"<button type="submit" name="event" value="submit" disabled>Searching...</button>"#,
        );
    } else {
        html.push_str(
            r#"<button type="submit" name="event" value="submit">Find Scholarships</button>"#,
        );
    }
    html.push_str(r#"</div>"#); // actions

    html.push_str(r#"</form>"#);
    html.push_str(r#"</div>"#); // card
    html
}
