//! Top-level page flow.
//!
//! ```text
//! Landing → Form ⇄ Results
//! ```
//!
//! [`transition`] is the whole state graph; [`Page`] applies it and owns the
//! wizard, the last result set, and the loading flag.

use scholar_search::SearchResult;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::backend::SearchBackend;
use crate::config::UiConfig;
use crate::profile::{Profile, ProfileField};
use crate::query::build_search_query;
use crate::ui::html::render_document;
use crate::ui::landing::{APP_NAME, render_landing};
use crate::ui::results::{ResultsView, render_results};
use crate::ui::wizard::{FormWizard, SubmitError, WizardStep, render_wizard};

/// Message shown on the form when a failed search is surfaced.
pub const SEARCH_FAILED_NOTICE: &str =
    "We couldn't reach the scholarship search right now. Please try again.";

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStep {
    #[default]
    Landing,
    Form,
    Results,
}

impl PageStep {
    /// Every step.
    pub const ALL: [PageStep; 3] = [Self::Landing, Self::Form, Self::Results];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Form => "form",
            Self::Results => "results",
        }
    }

    /// Parse a step from its wire name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "landing" => Some(Self::Landing),
            "form" => Some(Self::Form),
            "results" => Some(Self::Results),
            _ => None,
        }
    }
}

impl fmt::Display for PageStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that happened on the page.
///
/// `SearchSucceeded` and `SearchFailed` are raised by [`Page::submit`] when
/// the backend settles; the rest come from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageEvent {
    Start,
    Next,
    Previous,
    Submit,
    SearchSucceeded,
    SearchFailed,
    Back,
}

impl PageEvent {
    /// Every event.
    pub const ALL: [PageEvent; 7] = [
        Self::Start,
        Self::Next,
        Self::Previous,
        Self::Submit,
        Self::SearchSucceeded,
        Self::SearchFailed,
        Self::Back,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Submit => "submit",
            Self::SearchSucceeded => "search_succeeded",
            Self::SearchFailed => "search_failed",
            Self::Back => "back",
        }
    }

    /// Parse a user event. Backend settlement events are not accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "start" => Some(Self::Start),
            "next" => Some(Self::Next),
            "previous" => Some(Self::Previous),
            "submit" => Some(Self::Submit),
            "back" => Some(Self::Back),
            _ => None,
        }
    }
}

impl fmt::Display for PageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The page state graph. `None` means the event does not apply.
#[must_use]
pub fn transition(step: PageStep, event: PageEvent) -> Option<PageStep> {
    use PageEvent as E;
    use PageStep as S;

    match (step, event) {
        (S::Landing, E::Start) => Some(S::Form),
        (S::Form, E::Next | E::Previous | E::Submit | E::SearchFailed) => Some(S::Form),
        (S::Form, E::SearchSucceeded) => Some(S::Results),
        (S::Results, E::Back) => Some(S::Form),
        _ => None,
    }
}

/// What came of [`Page::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Moved to results with this many entries.
    Results(usize),
    /// The wizard refused the submission.
    Rejected(SubmitError),
    /// The backend failed; the form is shown again.
    SearchFailed,
    /// Not on the form.
    Ignored,
}

/// First value posted under `name`.
pub fn form_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

/// Page orchestrator.
#[derive(Debug, Clone, Default)]
pub struct Page {
    step: PageStep,
    wizard: FormWizard,
    results: Vec<SearchResult>,
    notice: Option<String>,
    ui: UiConfig,
}

impl Page {
    /// A fresh page on the landing screen.
    pub fn new(ui: UiConfig) -> Self {
        Self {
            ui,
            ..Self::default()
        }
    }

    /// Rebuild a page from posted form pairs.
    ///
    /// Reads `page`, `wizardStep`, and every profile field by wire name.
    /// Missing or unknown values fall back to the landing screen and the
    /// first wizard step. Results are never carried in the form.
    pub fn restore(ui: UiConfig, pairs: &[(String, String)]) -> Self {
        let step = form_value(pairs, "page")
            .and_then(PageStep::parse)
            .unwrap_or_default();
        let wizard_step = form_value(pairs, "wizardStep")
            .and_then(|raw| raw.trim().parse::<u8>().ok())
            .and_then(WizardStep::from_number)
            .unwrap_or_default();
        let profile = Profile::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        Self {
            step,
            wizard: FormWizard::restore(wizard_step, profile),
            results: Vec::new(),
            notice: None,
            ui,
        }
    }

    pub fn step(&self) -> PageStep {
        self.step
    }

    pub fn wizard(&self) -> &FormWizard {
        &self.wizard
    }

    pub fn profile(&self) -> &Profile {
        self.wizard.profile()
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Message shown on the form after a surfaced search failure.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.wizard.is_loading()
    }

    /// Mark a search as pending, e.g. while a caller awaits its own request.
    pub fn set_loading(&mut self, loading: bool) {
        self.wizard.set_loading(loading);
    }

    fn apply(&mut self, event: PageEvent) -> bool {
        match transition(self.step, event) {
            Some(next) => {
                tracing::debug!(from = %self.step, to = %next, %event, "page transition");
                self.step = next;
                true
            }
            None => {
                tracing::debug!(step = %self.step, %event, "event ignored");
                false
            }
        }
    }

    /// Landing → form.
    pub fn start(&mut self) -> bool {
        self.apply(PageEvent::Start)
    }

    /// Edit a profile field on the form.
    pub fn edit(&mut self, field: ProfileField, value: impl Into<String>) {
        self.wizard.edit(field, value);
    }

    /// Advance the wizard. Returns whether its step changed.
    pub fn next(&mut self) -> bool {
        self.apply(PageEvent::Next) && self.wizard.next()
    }

    /// Step the wizard back. Returns whether its step changed.
    pub fn previous(&mut self) -> bool {
        self.apply(PageEvent::Previous) && self.wizard.previous()
    }

    /// Validate the profile, search, and move to results on success.
    ///
    /// Loading is set for the duration of the backend call and cleared on
    /// settlement either way.
    pub async fn submit(&mut self, backend: &dyn SearchBackend) -> SubmitOutcome {
        if transition(self.step, PageEvent::Submit).is_none() {
            return SubmitOutcome::Ignored;
        }

        let profile = match self.wizard.submit() {
            Ok(profile) => profile,
            Err(e) => {
                tracing::debug!(error = %e, "submission rejected");
                return SubmitOutcome::Rejected(e);
            }
        };

        self.notice = None;
        self.wizard.set_loading(true);
        let query = build_search_query(&profile);
        let outcome = backend.search(&query).await;
        self.wizard.set_loading(false);

        match outcome {
            Ok(results) => {
                let count = results.len();
                self.results = results;
                self.apply(PageEvent::SearchSucceeded);
                tracing::info!(results = count, "showing scholarship results");
                SubmitOutcome::Results(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "error fetching scholarships");
                if self.ui.surface_search_errors {
                    self.notice = Some(SEARCH_FAILED_NOTICE.to_owned());
                }
                self.apply(PageEvent::SearchFailed);
                SubmitOutcome::SearchFailed
            }
        }
    }

    /// Results → form, keeping the profile and dropping the results.
    pub fn back(&mut self) -> bool {
        if !self.apply(PageEvent::Back) {
            return false;
        }
        self.results.clear();
        if self.ui.reset_wizard_on_back {
            self.wizard.reset_step();
        }
        true
    }

    /// Apply a user event by wire name. Unknown names change nothing.
    pub async fn handle_event(&mut self, raw: &str, backend: &dyn SearchBackend) {
        let Some(event) = PageEvent::parse(raw) else {
            tracing::debug!(event = raw, "unknown page event");
            return;
        };
        match event {
            PageEvent::Start => {
                self.start();
            }
            PageEvent::Next => {
                self.next();
            }
            PageEvent::Previous => {
                self.previous();
            }
            PageEvent::Submit => {
                self.submit(backend).await;
            }
            PageEvent::Back => {
                self.back();
            }
            PageEvent::SearchSucceeded | PageEvent::SearchFailed => {}
        }
    }

    /// Results view for the current result set.
    pub fn results_view(&self) -> ResultsView {
        ResultsView::new(&self.results, self.profile())
    }

    /// Render the current screen as a complete HTML document.
    pub fn render(&self) -> String {
        let body = match self.step {
            PageStep::Landing => render_landing(),
            PageStep::Form => render_wizard(&self.wizard, self.notice()),
            PageStep::Results => render_results(
                &self.results_view(),
                self.profile(),
                self.wizard.step().number(),
            ),
        };
        render_document(APP_NAME, &body)
    }
}
