//! Introductory screen.

use crate::ui::html::{hidden_input, html_escape};

/// Product name.
pub const APP_NAME: &str = "Chatra Shayak";

/// Line under the product name.
pub const TAGLINE: &str = "Your AI-powered scholarship finder";

const DESCRIPTION: &str = "Discover scholarships tailored to your caste and religious background \
     across local, government, and state college institutions.";

const START_HINT: &str = "Answer a few questions to find scholarships that match your profile";

/// Feature blurbs as `(heading, text)`.
pub const FEATURES: [(&str, &str); 3] = [
    (
        "Personalized Results",
        "Get scholarship recommendations based on your unique background",
    ),
    (
        "Comprehensive Search",
        "Access scholarships from various institutions and organizations",
    ),
    (
        "Save Time",
        "Find relevant opportunities without hours of manual searching",
    ),
];

/// Render the landing screen with its start action.
pub fn render_landing() -> String {
    let mut html = String::new();
    html.push_str(r#"<section class="empty">"#);
    html.push_str(&format!("<h1>{}</h1>", html_escape(APP_NAME)));
    html.push_str(&format!("<p>{}</p>", html_escape(TAGLINE)));
    html.push_str(&format!("<p>{}</p>", html_escape(DESCRIPTION)));

    html.push_str(r#"<form method="post" action="/">"#);
    html.push_str(&hidden_input("page", "landing"));
    html.push_str(
        r#"<button type="submit" name="event" value="start">Find Scholarships &rarr;</button>"#,
    );
    html.push_str("</form>");
    html.push_str(&format!("<p><small>{}</small></p>", html_escape(START_HINT)));

    html.push_str(r#"<div class="grid">"#);
    for (heading, text) in FEATURES {
        html.push_str(&format!(
            r#"<div class="card"><h3>{}</h3><p>{}</p></div>"#,
            html_escape(heading),
            html_escape(text)
        ));
    }
    html.push_str("</div>");
    html.push_str("</section>");
    html
}

/// Plain-text banner for the terminal wizard.
pub fn banner() -> String {
    format!("{APP_NAME}\n{TAGLINE}\n\n{START_HINT}\n")
}
