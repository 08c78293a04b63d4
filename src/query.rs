//! Natural-language search query built from a [`Profile`].
//!
//! The query is prose for a web search provider, not a structured query
//! language, so values are substituted verbatim, without trimming or
//! escaping.

use crate::profile::{Profile, ProfileField};

/// Text substituted when `field` is empty.
pub fn placeholder(field: ProfileField) -> &'static str {
    match field {
        ProfileField::Gender => "all",
        ProfileField::Location => "any location",
        ProfileField::FieldOfStudy => "any field",
        ProfileField::AcademicPerformance
        | ProfileField::Caste
        | ProfileField::Religion
        | ProfileField::InstitutionType => "any",
        _ => "not specified",
    }
}

/// Value of `field` as entered, or its placeholder when blank.
fn value_or_placeholder(profile: &Profile, field: ProfileField) -> &str {
    if profile.is_filled(field) {
        profile.get(field)
    } else {
        placeholder(field)
    }
}

/// Build the provider query for `profile`.
///
/// Deterministic: the same profile always yields the same string.
///
/// # Examples
///
/// ```
/// use chatra_shayak::profile::Profile;
/// use chatra_shayak::query::build_search_query;
///
/// let profile = Profile {
///     gender: "Female".into(),
///     location: "Kerala".into(),
///     ..Default::default()
/// };
/// let query = build_search_query(&profile);
/// assert!(query.starts_with("Find scholarships for Female students in Kerala"));
/// ```
pub fn build_search_query(profile: &Profile) -> String {
    let v = |field| value_or_placeholder(profile, field);

    let mut query = format!(
        "Find scholarships for {} students in {} studying {} with {} academic performance. \
         Family background: income {}, occupation {}, caste {}, religion {}. \
         Looking for scholarships in {} institutions. \
         Additional details: Age {}, GPA {}, Disability status: {}",
        v(ProfileField::Gender),
        v(ProfileField::Location),
        v(ProfileField::FieldOfStudy),
        v(ProfileField::AcademicPerformance),
        v(ProfileField::FamilyIncome),
        v(ProfileField::FamilyOccupation),
        v(ProfileField::Caste),
        v(ProfileField::Religion),
        v(ProfileField::InstitutionType),
        v(ProfileField::Age),
        v(ProfileField::Gpa),
        v(ProfileField::Disability),
    );

    let extras: Vec<String> = ProfileField::EXTRAS
        .into_iter()
        .filter(|field| profile.is_filled(*field))
        .map(|field| format!("{} {}", field.label(), profile.get(field)))
        .collect();
    if !extras.is_empty() {
        query.push_str(". Other details: ");
        query.push_str(&extras.join("; "));
    }

    query
}
