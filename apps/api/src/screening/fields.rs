//! Field Parser — recovers personal fields from résumé text with fixed pattern rules.
//!
//! The rules are heuristics with known blind spots:
//! - Name takes the first "Capitalized Capitalized" bigram, so a section heading
//!   such as "Work Experience" wins if it precedes the real name.
//! - Location, Degree and College only recognise a closed vocabulary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::candidate::{PersonalInfo, NOT_FOUND};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]*\s[A-Z][a-z]*\b").expect("valid name pattern"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,2}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid phone pattern")
});

// `[A-Z|a-z]` also admits a literal pipe in the TLD.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("valid email pattern")
});

static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:Noida|Delhi|Bangalore|Mumbai|India|Uttar Pradesh|Russia|Moscow|Ghaziabad|Indore|other locations)",
    )
    .expect("valid location pattern")
});

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(B\.?Tech|M\.?Tech|BCA|MCA|BSc|Bachelors|Masters|Higher Secondary)\b")
        .expect("valid degree pattern")
});

static COLLEGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(IIT|NIT|GLA|IMS|IGNOU|Lomonosov|other universities)\b")
        .expect("valid college pattern")
});

/// Applies every field rule independently to `text`.
///
/// Scalar fields take the first match in document order; Degree and College
/// keep every occurrence, duplicates included.
pub fn extract_personal_info(text: &str) -> PersonalInfo {
    PersonalInfo {
        name: first_match(&NAME_RE, text),
        phone: first_match(&PHONE_RE, text),
        email: first_match(&EMAIL_RE, text),
        location: first_match(&LOCATION_RE, text),
        degree: all_matches(&DEGREE_RE, text),
        college: all_matches(&COLLEGE_RE, text),
    }
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

fn all_matches(re: &Regex, text: &str) -> Vec<String> {
    let found: Vec<String> = re.find_iter(text).map(|m| m.as_str().to_string()).collect();
    if found.is_empty() {
        vec![NOT_FOUND.to_string()]
    } else {
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Rahul Verma\n\
        rahul.verma@example.com | +91 981 112 2333\n\
        Based in Noida, Uttar Pradesh\n\
        B.Tech in Computer Science, IIT Delhi\n\
        M.Tech from NIT, 2021";

    #[test]
    fn test_extracts_all_fields() {
        let info = extract_personal_info(RESUME);
        assert_eq!(info.name, "Rahul Verma");
        assert_eq!(info.email, "rahul.verma@example.com");
        assert_eq!(info.phone, "+91 981 112 2333");
        assert_eq!(info.location, "Noida");
        assert_eq!(info.degree, vec!["B.Tech", "M.Tech"]);
        assert_eq!(info.college, vec!["IIT", "NIT"]);
    }

    #[test]
    fn test_missing_fields_use_sentinel() {
        let info = extract_personal_info("nothing useful here 42");
        assert_eq!(info.name, "Not found");
        assert_eq!(info.phone, "Not found");
        assert_eq!(info.email, "Not found");
        assert_eq!(info.location, "Not found");
        assert_eq!(info.degree, vec!["Not found"]);
        assert_eq!(info.college, vec!["Not found"]);
    }

    #[test]
    fn test_empty_text_uses_sentinel() {
        let info = extract_personal_info("");
        assert_eq!(info.name, NOT_FOUND);
        assert_eq!(info.degree, vec![NOT_FOUND]);
    }

    #[test]
    fn test_name_takes_first_capitalised_bigram() {
        // Known limitation: the heading precedes the name and wins.
        let info = extract_personal_info("Curriculum Vitae\nJane Doe");
        assert_eq!(info.name, "Curriculum Vitae");
    }

    #[test]
    fn test_phone_formats() {
        for (text, expected) in [
            ("call (555) 123-4567 today", "(555) 123-4567"),
            ("tel: 555.123.4567", "555.123.4567"),
            ("mobile +1 555 123 4567", "+1 555 123 4567"),
            ("5551234567", "5551234567"),
        ] {
            assert_eq!(extract_personal_info(text).phone, expected, "input: {text}");
        }
    }

    #[test]
    fn test_email_first_match_only() {
        let info = extract_personal_info("a.b@first.org then c@second.io");
        assert_eq!(info.email, "a.b@first.org");
    }

    #[test]
    fn test_email_requires_tld() {
        assert_eq!(extract_personal_info("user@localhost").email, NOT_FOUND);
    }

    #[test]
    fn test_location_matches_inside_words() {
        // No word boundaries on the location rule.
        let info = extract_personal_info("Worked with Indian teams");
        assert_eq!(info.location, "India");
    }

    #[test]
    fn test_degree_is_case_insensitive_and_keeps_duplicates() {
        let info = extract_personal_info("btech 2018, BTech 2019, bachelors, Higher Secondary");
        assert_eq!(
            info.degree,
            vec!["btech", "BTech", "bachelors", "Higher Secondary"]
        );
    }

    #[test]
    fn test_college_is_case_sensitive() {
        let info = extract_personal_info("studied at iit, then GLA University and IGNOU");
        assert_eq!(info.college, vec!["GLA", "IGNOU"]);
    }
}
