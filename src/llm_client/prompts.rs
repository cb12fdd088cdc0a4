// Prompt constants and prompt-building utilities for the scoring call.

/// Longest job-description prefix embedded in the prompt, in characters.
pub const JOB_DESC_LIMIT: usize = 1000;
/// Longest resume-text prefix embedded in the prompt, in characters.
pub const RESUME_LIMIT: usize = 2000;

/// Scoring prompt template. Replace `{job}` and `{resume}` before sending.
/// The three-line format instruction is what the reply parser keys on.
pub const SCORING_PROMPT_TEMPLATE: &str = "Score resume 0-100% vs job:
JOB: {job}
RESUME: {resume}

Format exactly:
SCORE: XX%
STRENGTHS: bullet points
MISSING: bullet points";

/// Builds the bounded scoring prompt for one resume.
pub fn build_scoring_prompt(job_desc: &str, resume_text: &str) -> String {
    SCORING_PROMPT_TEMPLATE
        .replace("{job}", prefix(job_desc, JOB_DESC_LIMIT))
        .replace("{resume}", prefix(resume_text, RESUME_LIMIT))
}

/// First `limit` characters of `text`, sliced on a char boundary.
fn prefix(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_passes_through_untruncated() {
        assert_eq!(prefix("short", 1000), "short");
    }

    #[test]
    fn test_prefix_counts_chars_not_bytes() {
        // 4 chars, 8 bytes — a byte-indexed slice would panic or cut mid-char
        let text = "résumé!";
        assert_eq!(prefix(text, 4), "résu");
    }

    #[test]
    fn test_prefix_at_exact_length_keeps_everything() {
        assert_eq!(prefix("abcd", 4), "abcd");
    }

    #[test]
    fn test_prompt_embeds_both_bounded_sections() {
        let job = "j".repeat(1500);
        let resume = "r".repeat(2500);
        let prompt = build_scoring_prompt(&job, &resume);

        assert!(prompt.contains(&"j".repeat(1000)));
        assert!(!prompt.contains(&"j".repeat(1001)));
        assert!(prompt.contains(&"r".repeat(2000)));
        assert!(!prompt.contains(&"r".repeat(2001)));
        assert!(prompt.starts_with("Score resume 0-100% vs job:"));
        assert!(prompt.contains("SCORE: XX%"));
        assert!(prompt.contains("MISSING: bullet points"));
    }
}
