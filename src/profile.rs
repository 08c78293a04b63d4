//! Student profile collected by the form wizard.
//!
//! Every value is a string as typed or selected by the student. Field
//! metadata (wire name, label, owning step, options) lives on
//! [`ProfileField`] so the wizard, query builder, and renderers share it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender options.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female", "Other", "Prefer not to say"];

/// Caste category options.
pub const CASTE_OPTIONS: &[&str] = &["General", "OBC", "SC", "ST", "Other"];

/// Religion options.
pub const RELIGION_OPTIONS: &[&str] = &[
    "Hindu",
    "Muslim",
    "Christian",
    "Sikh",
    "Buddhist",
    "Jain",
    "Other",
];

/// Annual family income ranges.
pub const INCOME_OPTIONS: &[&str] = &[
    "Below 1 Lakh",
    "1-3 Lakhs",
    "3-6 Lakhs",
    "6-10 Lakhs",
    "Above 10 Lakhs",
];

/// Academic performance levels.
pub const PERFORMANCE_OPTIONS: &[&str] = &["Excellent", "Good", "Average", "Below Average"];

/// Fields of study.
pub const FIELD_OF_STUDY_OPTIONS: &[&str] = &[
    "Engineering",
    "Medicine",
    "Arts",
    "Commerce",
    "Science",
    "Law",
    "Management",
    "Other",
];

/// Institution types.
pub const INSTITUTION_OPTIONS: &[&str] = &["Government", "State", "Local", "Private", "Any"];

/// States and union territories.
pub const LOCATION_OPTIONS: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Other",
];

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text with a placeholder hint.
    Text(&'static str),
    /// One of a fixed list, with a prompt shown while nothing is selected.
    Select {
        /// Prompt shown before a choice is made.
        prompt: &'static str,
        /// Available choices.
        options: &'static [&'static str],
    },
}

/// Every field of a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Age,
    Gender,
    Caste,
    Religion,
    FamilyIncome,
    FamilyOccupation,
    AcademicPerformance,
    Location,
    Gpa,
    FieldOfStudy,
    InstitutionType,
    Disability,
    Extracurricular,
    Residence,
    Career,
    Community,
    Language,
    Talents,
}

impl ProfileField {
    /// Every field in declaration order.
    pub const ALL: [ProfileField; 18] = [
        Self::Age,
        Self::Gender,
        Self::Caste,
        Self::Religion,
        Self::FamilyIncome,
        Self::FamilyOccupation,
        Self::AcademicPerformance,
        Self::Location,
        Self::Gpa,
        Self::FieldOfStudy,
        Self::InstitutionType,
        Self::Disability,
        Self::Extracurricular,
        Self::Residence,
        Self::Career,
        Self::Community,
        Self::Language,
        Self::Talents,
    ];

    /// Fields with no input on either wizard step.
    pub const EXTRAS: [ProfileField; 6] = [
        Self::Extracurricular,
        Self::Residence,
        Self::Career,
        Self::Community,
        Self::Language,
        Self::Talents,
    ];

    /// Wire name, as used in JSON and form bodies.
    pub fn name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Caste => "caste",
            Self::Religion => "religion",
            Self::FamilyIncome => "familyIncome",
            Self::FamilyOccupation => "familyOccupation",
            Self::AcademicPerformance => "academicPerformance",
            Self::Location => "location",
            Self::Gpa => "gpa",
            Self::FieldOfStudy => "fieldOfStudy",
            Self::InstitutionType => "institutionType",
            Self::Disability => "disability",
            Self::Extracurricular => "extracurricular",
            Self::Residence => "residence",
            Self::Career => "career",
            Self::Community => "community",
            Self::Language => "language",
            Self::Talents => "talents",
        }
    }

    /// Parse a wire name.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == raw)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Caste => "Caste",
            Self::Religion => "Religion",
            Self::FamilyIncome => "Annual Family Income",
            Self::FamilyOccupation => "Family Occupation",
            Self::AcademicPerformance => "Academic Performance",
            Self::Location => "Location (State/UT)",
            Self::Gpa => "GPA/Percentage",
            Self::FieldOfStudy => "Field of Study",
            Self::InstitutionType => "Institution Type",
            Self::Disability => "Disability",
            Self::Extracurricular => "Extracurricular",
            Self::Residence => "Residence",
            Self::Career => "Career",
            Self::Community => "Community",
            Self::Language => "Language",
            Self::Talents => "Talents",
        }
    }

    /// Whether final submission requires a value.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Self::Age
                | Self::Gender
                | Self::Caste
                | Self::Religion
                | Self::FamilyIncome
                | Self::AcademicPerformance
                | Self::Location
                | Self::Gpa
                | Self::FieldOfStudy
                | Self::InstitutionType
        )
    }

    /// Message attached when a required field is empty on submit.
    pub fn required_message(self) -> String {
        match self {
            Self::FamilyIncome => "Family income is required".to_owned(),
            Self::AcademicPerformance => "Academic performance is required".to_owned(),
            Self::FieldOfStudy => "Field of study is required".to_owned(),
            Self::InstitutionType => "Institution type is required".to_owned(),
            Self::Gpa => "GPA is required".to_owned(),
            Self::Location => "Location is required".to_owned(),
            other => format!("{} is required", other.label()),
        }
    }

    /// How the field is entered, or `None` for fields with no input.
    pub fn input(self) -> Option<InputKind> {
        match self {
            Self::Age => Some(InputKind::Text("Enter your age")),
            Self::Gender => select("Select gender", GENDER_OPTIONS),
            Self::Caste => select("Select caste", CASTE_OPTIONS),
            Self::Religion => select("Select religion", RELIGION_OPTIONS),
            Self::FamilyIncome => select("Select income range", INCOME_OPTIONS),
            Self::FamilyOccupation => Some(InputKind::Text("E.g., Farming, Business, Service")),
            Self::AcademicPerformance => select("Select performance level", PERFORMANCE_OPTIONS),
            Self::Gpa => Some(InputKind::Text("Enter your GPA or percentage")),
            Self::FieldOfStudy => select("Select field", FIELD_OF_STUDY_OPTIONS),
            Self::InstitutionType => select("Select institution type", INSTITUTION_OPTIONS),
            Self::Location => select("Select your state", LOCATION_OPTIONS),
            _ => None,
        }
    }
}

fn select(prompt: &'static str, options: &'static [&'static str]) -> Option<InputKind> {
    Some(InputKind::Select { prompt, options })
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A student's demographic and academic profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub age: String,
    pub gender: String,
    pub caste: String,
    pub religion: String,
    pub family_income: String,
    pub family_occupation: String,
    pub academic_performance: String,
    pub location: String,
    pub gpa: String,
    pub field_of_study: String,
    pub institution_type: String,
    pub disability: String,
    pub extracurricular: String,
    pub residence: String,
    pub career: String,
    pub community: String,
    pub language: String,
    pub talents: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: String::new(),
            gender: String::new(),
            caste: String::new(),
            religion: String::new(),
            family_income: String::new(),
            family_occupation: String::new(),
            academic_performance: String::new(),
            location: String::new(),
            gpa: String::new(),
            field_of_study: String::new(),
            institution_type: String::new(),
            disability: "None".to_owned(),
            extracurricular: String::new(),
            residence: String::new(),
            career: String::new(),
            community: String::new(),
            language: String::new(),
            talents: String::new(),
        }
    }
}

impl Profile {
    /// Value of `field`.
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Age => &self.age,
            ProfileField::Gender => &self.gender,
            ProfileField::Caste => &self.caste,
            ProfileField::Religion => &self.religion,
            ProfileField::FamilyIncome => &self.family_income,
            ProfileField::FamilyOccupation => &self.family_occupation,
            ProfileField::AcademicPerformance => &self.academic_performance,
            ProfileField::Location => &self.location,
            ProfileField::Gpa => &self.gpa,
            ProfileField::FieldOfStudy => &self.field_of_study,
            ProfileField::InstitutionType => &self.institution_type,
            ProfileField::Disability => &self.disability,
            ProfileField::Extracurricular => &self.extracurricular,
            ProfileField::Residence => &self.residence,
            ProfileField::Career => &self.career,
            ProfileField::Community => &self.community,
            ProfileField::Language => &self.language,
            ProfileField::Talents => &self.talents,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Age => &mut self.age,
            ProfileField::Gender => &mut self.gender,
            ProfileField::Caste => &mut self.caste,
            ProfileField::Religion => &mut self.religion,
            ProfileField::FamilyIncome => &mut self.family_income,
            ProfileField::FamilyOccupation => &mut self.family_occupation,
            ProfileField::AcademicPerformance => &mut self.academic_performance,
            ProfileField::Location => &mut self.location,
            ProfileField::Gpa => &mut self.gpa,
            ProfileField::FieldOfStudy => &mut self.field_of_study,
            ProfileField::InstitutionType => &mut self.institution_type,
            ProfileField::Disability => &mut self.disability,
            ProfileField::Extracurricular => &mut self.extracurricular,
            ProfileField::Residence => &mut self.residence,
            ProfileField::Career => &mut self.career,
            ProfileField::Community => &mut self.community,
            ProfileField::Language => &mut self.language,
            ProfileField::Talents => &mut self.talents,
        };
        *slot = value.into();
    }

    /// Whether `field` holds a non-blank value.
    pub fn is_filled(&self, field: ProfileField) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Build a profile from `(wire name, value)` pairs, ignoring unknown names.
    ///
    /// Fields absent from `pairs` keep their defaults.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut profile = Self::default();
        for (name, value) in pairs {
            if let Some(field) = ProfileField::parse(name) {
                profile.set(field, value);
            }
        }
        profile
    }
}
