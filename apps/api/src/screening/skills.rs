//! Skill Matcher — finds vocabulary skills in résumé text and keeps the ones
//! that approximately match a job-description token.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Placeholder skill list for a résumé with no relevant skills.
pub const NO_RELEVANT_SKILLS: &str = "No relevant skills found";

/// A skill is kept when its partial ratio against some token is strictly above this.
pub const SIMILARITY_THRESHOLD: u8 = 80;

/// Recognised skills, in scan order.
pub const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Leadership",
    "SQL",
    "TensorFlow",
    "Keras",
    "AWS",
    "Docker",
    "Kubernetes",
    "React",
    "Angular",
    "Flask",
    "Django",
    "JavaScript",
    "HTML",
    "CSS",
    "Communication",
    "Problem Solving",
    "Teamwork",
    "Agile",
    "Scrum",
];

static SKILL_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|&skill| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(skill));
            (skill, Regex::new(&pattern).expect("valid skill pattern"))
        })
        .collect()
});

static JD_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z]+\b").expect("valid word pattern"));

/// Splits a job description into lowercase alphabetic words longer than one letter.
/// Order is preserved and duplicates are kept.
pub fn job_description_tokens(job_description: &str) -> Vec<String> {
    JD_WORD_RE
        .find_iter(job_description)
        .map(|m| m.as_str())
        .filter(|word| word.len() > 1)
        .map(str::to_lowercase)
        .collect()
}

/// Vocabulary skills that occur as whole words (case-insensitive) in `text`.
pub fn find_vocabulary_skills(text: &str) -> Vec<&'static str> {
    SKILL_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(skill, _)| *skill)
        .collect()
}

/// Returns the vocabulary skills in `text` that are similar to a job-description token.
///
/// A skill is pushed once per qualifying token, so the result may repeat a
/// skill. An empty result becomes `["No relevant skills found"]`.
pub fn extract_skills(text: &str, jd_tokens: &[String]) -> Vec<String> {
    let mut matched = Vec::new();

    for skill in find_vocabulary_skills(text) {
        let skill_lower = skill.to_lowercase();
        for token in jd_tokens {
            let score = partial_ratio(&skill_lower, &token.to_lowercase());
            if score > SIMILARITY_THRESHOLD {
                trace!(skill, token = %token, score, "Skill matched job description");
                matched.push(skill.to_string());
            }
        }
    }

    if matched.is_empty() {
        vec![NO_RELEVANT_SKILLS.to_string()]
    } else {
        matched
    }
}

/// Best similarity (0–100) between the shorter string and any equally long
/// window of the longer one. Empty input scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if shorter.is_empty() {
        return 0;
    }

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        best = best.max(indel_ratio(&shorter, window));
        if best > 0.995 {
            return 100;
        }
    }

    (best * 100.0).round() as u8
}

/// `2·M / (|a| + |b|)` where M is the length of the longest common
/// subsequence. A transposed pair of letters costs one match, not two.
fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * longest_common_subsequence(a, b) as f64 / total as f64
}

fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];
    for &x in a {
        for (j, &y) in b.iter().enumerate() {
            row[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(row[j])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}
