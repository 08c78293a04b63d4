//! Shared HTML helpers for the server-rendered page.

use crate::profile::{Profile, ProfileField};

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// A hidden form input.
pub fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        html_escape(name),
        html_escape(value)
    )
}

/// Hidden inputs carrying every profile field except those in `skip`.
///
/// The page keeps its state in the form itself, so every screen re-posts
/// the whole profile.
pub fn hidden_profile(profile: &Profile, skip: &[ProfileField]) -> String {
    let mut html = String::new();
    for field in ProfileField::ALL {
        if skip.contains(&field) {
            continue;
        }
        html.push_str(&hidden_input(field.name(), profile.get(field)));
    }
    html
}

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; font-family: system-ui, sans-serif;
       background: linear-gradient(to bottom, #eff6ff, #e0e7ff); color: #1f2937; }
main { max-width: 64rem; margin: 0 auto; padding: 2rem 1rem; }
.card { background: #fff; border-radius: 0.75rem; box-shadow: 0 1px 3px rgba(0,0,0,.1);
        padding: 1.5rem; margin-bottom: 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1rem; }
.field label { display: block; font-weight: 600; margin-bottom: .25rem; }
.field input, .field select { width: 100%; padding: .5rem; border: 1px solid #d1d5db;
        border-radius: .375rem; box-sizing: border-box; }
.field-error { color: #dc2626; font-size: .875rem; }
.progress { height: .5rem; background: #e5e7eb; border-radius: 9999px; overflow: hidden; }
.progress-bar { height: 100%; background: #4f46e5; }
.actions { display: flex; justify-content: space-between; margin-top: 1.5rem; }
button, .button { background: #4f46e5; color: #fff; border: 0; border-radius: .375rem;
        padding: .5rem 1rem; cursor: pointer; text-decoration: none; display: inline-block; }
button.outline { background: #fff; color: #4f46e5; border: 1px solid #4f46e5; }
button:disabled { opacity: .6; cursor: not-allowed; }
.badge { border: 1px solid #c7d2fe; border-radius: 9999px; padding: .125rem .5rem;
        font-size: .75rem; color: #4338ca; }
.snippet { max-height: 10rem; overflow-y: auto; font-size: .875rem; color: #4b5563; }
.alert { border-left: 4px solid #4f46e5; }
.alert-error { border-left: 4px solid #dc2626; }
.empty { text-align: center; }
"#;

/// Wrap `body` in a complete HTML document.
pub fn render_document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<style>{}</style>
</head>
<body>
<main>
{}
</main>
</body>
</html>
"#,
        html_escape(title),
        STYLE,
        body
    )
}
