//! Ranker — combines personal fields and skill matches per résumé, then orders
//! and truncates the batch into a shortlist.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::screening::fields::extract_personal_info;
use crate::screening::skills::{extract_skills, job_description_tokens};

/// Ranks already-extracted résumé texts against a job description.
///
/// Algorithm:
/// 1. Tokenise the job description once
/// 2. Per text: parse personal fields and relevant skills
/// 3. `skill_match_count` = skills literally present among the tokens
/// 4. Stable sort by `skill_match_count` descending (ties keep upload order)
/// 5. Keep the first `shortlist_size`
pub fn rank_candidates<T>(
    job_description: &str,
    texts: &[T],
    shortlist_size: usize,
) -> Result<Vec<Candidate>, AppError>
where
    T: AsRef<str>,
{
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Please provide a job description before submitting.".to_string(),
        ));
    }
    if shortlist_size == 0 {
        return Err(AppError::Validation(
            "Number of candidates must be at least 1".to_string(),
        ));
    }

    let jd_tokens = job_description_tokens(job_description);
    debug!(tokens = jd_tokens.len(), "Tokenised job description");

    let candidates: Vec<Candidate> = texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            let info = extract_personal_info(text);
            let skills = extract_skills(text, &jd_tokens);
            // Case-sensitive on purpose: vocabulary casing vs lowercase tokens.
            let skill_match_count = skills.iter().filter(|s| jd_tokens.contains(s)).count();
            Candidate::new(info, &skills, skill_match_count)
        })
        .collect();

    let candidates = select_shortlist(candidates, shortlist_size);

    info!(
        documents = texts.len(),
        shortlisted = candidates.len(),
        "Ranked candidates"
    );

    Ok(candidates)
}

/// Orders by `skill_match_count` descending, keeping input order among ties,
/// and keeps at most `shortlist_size` entries.
fn select_shortlist(mut candidates: Vec<Candidate>, shortlist_size: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.skill_match_count.cmp(&a.skill_match_count));
    candidates.truncate(shortlist_size);
    candidates
}
