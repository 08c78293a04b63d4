//! Server-rendered screens: landing, form wizard, results.

pub mod html;
pub mod landing;
pub mod results;
pub mod wizard;

pub use results::{ResultCard, ResultsView, display_host, relevance_label};
pub use wizard::{FormWizard, SubmitError, WizardStep};
