//! Scholarship result cards and the empty state.

use scholar_search::SearchResult;
use std::fmt;

use crate::profile::{Profile, ProfileField};
use crate::ui::html::{hidden_input, hidden_profile, html_escape};

/// Heading shown above the empty state.
pub const EMPTY_TITLE: &str = "No scholarships found";

/// Message shown when a search returns nothing.
pub const EMPTY_MESSAGE: &str = "We couldn't find any scholarships matching your criteria. \
     Try adjusting your search parameters for better results.";

/// Host of `url` without a leading `www.`, or `url` itself when it does not
/// parse as an absolute URL with a host.
pub fn display_host(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_owned(),
            None => url.to_owned(),
        },
        Err(_) => url.to_owned(),
    }
}

/// Badge text for a result score.
///
/// A missing or zero score gets the generic label.
pub fn relevance_label(score: Option<f64>) -> String {
    match score {
        Some(score) if score != 0.0 && score.is_finite() => {
            format!("Relevance: {}%", (score * 100.0).round() as i64)
        }
        _ => "Scholarship".to_owned(),
    }
}

fn summary_value(profile: &Profile, field: ProfileField, fallback: &'static str) -> String {
    if profile.is_filled(field) {
        profile.get(field).to_owned()
    } else {
        fallback.to_owned()
    }
}

/// One-sentence description of what was searched for.
pub fn search_summary(profile: &Profile) -> String {
    format!(
        "Showing scholarships for {} students in {} studying {} with {} caste and {} religious background.",
        summary_value(profile, ProfileField::Gender, "all"),
        summary_value(profile, ProfileField::Location, "all locations"),
        summary_value(profile, ProfileField::FieldOfStudy, "all fields"),
        summary_value(profile, ProfileField::Caste, "any"),
        summary_value(profile, ProfileField::Religion, "any"),
    )
}

/// Display model for one result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    pub title: String,
    pub url: String,
    pub host: String,
    pub snippet: String,
    pub badge: String,
}

impl From<&SearchResult> for ResultCard {
    fn from(result: &SearchResult) -> Self {
        Self {
            title: result.title.clone(),
            url: result.url.clone(),
            host: display_host(&result.url),
            snippet: result.content.clone(),
            badge: relevance_label(result.score),
        }
    }
}

/// Results screen: summary plus cards, in provider order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    summary: String,
    cards: Vec<ResultCard>,
}

impl ResultsView {
    pub fn new(results: &[SearchResult], profile: &Profile) -> Self {
        Self {
            summary: search_summary(profile),
            cards: results.iter().map(ResultCard::from).collect(),
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn cards(&self) -> &[ResultCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn external_link(url: &str, class: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" class="{class}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        html_escape(url),
        html_escape(text)
    )
}

fn render_card(card: &ResultCard) -> String {
    let mut html = String::new();
    html.push_str(r#"<article class="card result">"#);
    html.push_str(&format!(r#"<h3>{}</h3>"#, html_escape(&card.title)));
    html.push_str(&external_link(&card.url, "host", &card.host));
    html.push_str(&format!(
        r#"<p class="snippet">{}</p>"#,
        html_escape(&card.snippet)
    ));
    html.push_str(r#"<div class="actions">"#);
    html.push_str(&format!(
        r#"<span class="badge">{}</span>"#,
        html_escape(&card.badge)
    ));
    html.push_str(&external_link(&card.url, "button", "Apply Now"));
    html.push_str(r#"</div>"#);
    html.push_str(r#"</article>"#);
    html
}

/// Render the results screen.
///
/// The `back` buttons re-post the profile so the form comes back filled.
pub fn render_results(view: &ResultsView, profile: &Profile, wizard_step: u8) -> String {
    let back_form = |label: &str, class: &str| {
        let mut html = String::from(r#"<form method="post" action="/">"#);
        html.push_str(&hidden_input("page", "results"));
        html.push_str(&hidden_input("wizardStep", &wizard_step.to_string()));
        html.push_str(&hidden_profile(profile, &[]));
        html.push_str(&format!(
            r#"<button type="submit" name="event" value="back" class="{class}">{}</button>"#,
            html_escape(label)
        ));
        html.push_str("</form>");
        html
    };

    let mut html = String::new();
    html.push_str(r#"<div class="actions"><h2>Scholarship Results</h2>"#);
    html.push_str(&back_form("Back to form", "outline"));
    html.push_str(r#"</div>"#);

    html.push_str(r#"<div class="card alert" role="status">"#);
    html.push_str(r#"<h3>Search Summary</h3>"#);
    html.push_str(&format!(r#"<p>{}</p>"#, html_escape(view.summary())));
    html.push_str(r#"</div>"#);

    if view.is_empty() {
        html.push_str(r#"<div class="card empty">"#);
        html.push_str(r#"<div aria-hidden="true">&#9432;</div>"#);
        html.push_str(&format!(r#"<h3>{EMPTY_TITLE}</h3>"#));
        html.push_str(&format!(r#"<p>{}</p>"#, html_escape(EMPTY_MESSAGE)));
        html.push_str(&back_form("Modify Search", ""));
        html.push_str(r#"</div>"#);
    } else {
        for card in view.cards() {
            html.push_str(&render_card(card));
        }
    }

    html
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Summary")?;
        writeln!(f, "{}", self.summary)?;

        if self.cards.is_empty() {
            writeln!(f)?;
            writeln!(f, "{EMPTY_TITLE}")?;
            return writeln!(f, "{EMPTY_MESSAGE}");
        }

        for (i, card) in self.cards.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}. {} ({})", i + 1, card.title, card.host)?;
            writeln!(f, "   [{}]", card.badge)?;
            if !card.snippet.is_empty() {
                writeln!(f, "   {}", card.snippet)?;
            }
            writeln!(f, "   Apply: {}", card.url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, url: &str, score: Option<f64>) -> SearchResult {
        SearchResult {
            title: title.to_owned(),
            url: url.to_owned(),
            content: format!("About {title}"),
            score,
        }
    }

    #[test]
    fn host_strips_scheme_and_www() {
        assert_eq!(
            display_host("https://www.buddy4study.com/x"),
            "buddy4study.com"
        );
        assert_eq!(
            display_host("https://scholarships.gov.in/page?id=1"),
            "scholarships.gov.in"
        );
    }

    #[test]
    fn unparseable_url_is_shown_raw() {
        assert_eq!(display_host("not-a-url"), "not-a-url");
        assert_eq!(display_host(""), "");
    }

    #[test]
    fn relevance_badge() {
        assert_eq!(relevance_label(Some(0.87)), "Relevance: 87%");
        assert_eq!(relevance_label(Some(0.555)), "Relevance: 56%");
        assert_eq!(relevance_label(Some(0.0)), "Scholarship");
        assert_eq!(relevance_label(None), "Scholarship");
    }

    #[test]
    fn summary_uses_fallbacks() {
        let profile = Profile {
            gender: "Female".into(),
            ..Default::default()
        };
        assert_eq!(
            search_summary(&profile),
            "Showing scholarships for Female students in all locations studying all fields \
             with any caste and any religious background."
        );
    }

    #[test]
    fn empty_results_render_empty_state_without_cards() {
        let profile = Profile::default();
        let view = ResultsView::new(&[], &profile);
        let html = render_results(&view, &profile, 2);
        assert!(html.contains(EMPTY_TITLE));
        assert!(html.contains("We couldn&#x27;t find any scholarships"));
        assert!(html.contains(">Modify Search</button>"));
        assert!(!html.contains(r#"class="card result""#));
    }

    #[test]
    fn relevance_shown_only_on_scored_card() {
        let profile = Profile::default();
        let results = vec![
            result("First", "https://a.example/1", None),
            result("Second", "https://b.example/2", Some(0.87)),
            result("Third", "https://c.example/3", None),
        ];
        let view = ResultsView::new(&results, &profile);
        let badges: Vec<&str> = view.cards().iter().map(|c| c.badge.as_str()).collect();
        assert_eq!(badges, ["Scholarship", "Relevance: 87%", "Scholarship"]);

        let html = render_results(&view, &profile, 2);
        assert_eq!(html.matches(r#"class="card result""#).count(), 3);
        assert_eq!(html.matches("87%").count(), 1);
        assert!(!html.contains(EMPTY_TITLE));
    }

    #[test]
    fn cards_keep_input_order_and_link_twice() {
        let profile = Profile::default();
        let results = vec![
            result("Alpha", "https://www.buddy4study.com/a", Some(0.5)),
            result("Beta", "https://nsp.gov.in/b", Some(0.4)),
        ];
        let view = ResultsView::new(&results, &profile);
        let html = render_results(&view, &profile, 2);
        let alpha = html.find("Alpha").expect("alpha rendered");
        let beta = html.find("Beta").expect("beta rendered");
        assert!(alpha < beta);
        assert_eq!(
            html.matches(r#"href="https://www.buddy4study.com/a""#).count(),
            2
        );
        assert_eq!(
            html.matches(r#"target="_blank" rel="noopener noreferrer""#).count(),
            4
        );
        assert!(html.contains(">buddy4study.com</a>"));
    }

    #[test]
    fn result_text_is_escaped() {
        let profile = Profile::default();
        let results = vec![result("<script>", "https://x.example/", None)];
        let html = render_results(&ResultsView::new(&results, &profile), &profile, 2);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn back_form_carries_profile() {
        let profile = Profile {
            gpa: "8.8".into(),
            ..Default::default()
        };
        let html = render_results(&ResultsView::new(&[], &profile), &profile, 2);
        assert!(html.contains(r#"name="gpa" value="8.8""#));
        assert!(html.contains(r#"name="wizardStep" value="2""#));
        assert!(html.contains(r#"value="back""#));
    }

    #[test]
    fn text_rendering_lists_cards() {
        let profile = Profile::default();
        let results = vec![result("Alpha", "https://www.buddy4study.com/a", Some(0.9))];
        let text = ResultsView::new(&results, &profile).to_string();
        assert!(text.starts_with("Search Summary\n"));
        assert!(text.contains("1. Alpha (buddy4study.com)"));
        assert!(text.contains("[Relevance: 90%]"));
        assert!(text.contains("Apply: https://www.buddy4study.com/a"));

        let empty = ResultsView::new(&[], &profile).to_string();
        assert!(empty.contains(EMPTY_TITLE));
    }
}
