use serde::Serialize;

/// Placeholder for a personal field with no textual match.
pub const NOT_FOUND: &str = "Not found";

/// Structured personal fields recovered from one résumé's text.
///
/// List fields are never empty: no match yields `["Not found"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub degree: Vec<String>,
    pub college: Vec<String>,
}

/// One row of the shortlist table.
///
/// Serialises as Name, Email, Phone, Location, Degree, College, Skills.
/// The match count only drives ordering and is not rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Candidate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub degree: String,
    pub college: String,
    pub skills: String,
    #[serde(skip)]
    pub skill_match_count: usize,
}

impl Candidate {
    pub fn new(info: PersonalInfo, skills: &[String], skill_match_count: usize) -> Self {
        Self {
            name: info.name,
            email: info.email,
            phone: info.phone,
            location: info.location,
            degree: info.degree.join(", "),
            college: info.college.join(", "),
            skills: skills.join(", "),
            skill_match_count,
        }
    }
}
