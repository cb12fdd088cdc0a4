//! Reply parser — a small tolerant grammar over the model's free-text reply.
//!
//! The scoring prompt *requests* a `SCORE:` / `STRENGTHS:` / `MISSING:` layout
//! but the model guarantees nothing. Every match here is optional and every
//! miss degrades to a default; the parser has no error path at all. Sections
//! are located by heading, sliced as spans, and cleaned line by line — a rigid
//! grammar would break on the first bullet-glyph or phrasing drift.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Entries kept per section, in source order.
pub const SECTION_CAP: usize = 3;
/// Cleaned lines at or under this many characters are noise, not content.
pub const NOISE_FLOOR: usize = 5;

/// Glyphs stripped from the edges of a bullet line before cleaning.
const BULLET_GLYPHS: &[char] = &[
    '*', '•', '‣', '▪', '▸', '▹', '►', '▬', '-', '—', '★', '☆', '✦', '✧', '●', '◉', '◎',
];

/// Structured form of one model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedReply {
    /// Raw score as the model stated it. Not clamped here — the record
    /// constructor owns the 0–100 domain.
    pub score: u32,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

fn score_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)score[:\s]*(\d+)").expect("score pattern compiles"))
}

fn strengths_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)strengths?[:\s]*").expect("strengths pattern compiles"))
}

fn missing_heading_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)missing[:\s]*").expect("missing pattern compiles"))
}

fn missing_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)missing").expect("missing token compiles"))
}

/// Parses a raw reply into score, strengths, and gaps.
pub fn parse_reply(text: &str) -> ParsedReply {
    ParsedReply {
        score: parse_score(text),
        strengths: parse_section(strengths_span(text)),
        gaps: parse_section(gaps_span(text)),
    }
}

/// First integer following a "score" token, or 0.
/// A digit run too large for `u32` is degenerate input and also yields 0.
fn parse_score(text: &str) -> u32 {
    score_re()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Span between the strengths heading and the next "missing" token, or
/// end-of-text. Empty when the heading is absent.
fn strengths_span(text: &str) -> &str {
    let Some(heading) = strengths_heading_re().find(text) else {
        return "";
    };
    let body = &text[heading.end()..];
    match missing_token_re().find(body) {
        Some(terminator) => &body[..terminator.start()],
        None => body,
    }
}

/// Span from the "missing" heading to end-of-text. There is no known
/// terminator after it, so trailing boilerplate leaks into the span; the
/// length floor in `clean_line` is the only filter.
fn gaps_span(text: &str) -> &str {
    match missing_heading_re().find(text) {
        Some(heading) => &text[heading.end()..],
        None => "",
    }
}

/// Splits a section span into cleaned entries: at most `SECTION_CAP`, each
/// longer than `NOISE_FLOOR` chars, in source order.
fn parse_section(span: &str) -> Vec<String> {
    span.lines()
        .map(clean_line)
        .filter(|line| line.chars().count() > NOISE_FLOOR)
        .take(SECTION_CAP)
        .collect()
}

/// Strips bullet glyphs from the edges, collapses internal whitespace, and
/// trims residual `:`, `;`, `-`, and spaces.
fn clean_line(line: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    let ws = WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern compiles"));

    let stripped = line.trim().trim_matches(|c| BULLET_GLYPHS.contains(&c));
    let collapsed = ws.replace_all(stripped, " ");
    collapsed
        .trim_matches(|c: char| matches!(c, ' ' | ':' | ';' | '-'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line_parses() {
        assert_eq!(parse_reply("SCORE: 73%").score, 73);
    }

    #[test]
    fn test_score_is_case_insensitive() {
        assert_eq!(parse_reply("score: 42%").score, 42);
        assert_eq!(parse_reply("Score 42").score, 42);
    }

    #[test]
    fn test_no_score_token_defaults_to_zero() {
        assert_eq!(parse_reply("the model rambled about the weather").score, 0);
    }

    #[test]
    fn test_first_integer_after_score_wins() {
        assert_eq!(parse_reply("SCORE: 60% maybe 90%").score, 60);
    }

    #[test]
    fn test_out_of_range_score_passes_through_raw() {
        // The parser does not clamp; the record constructor does.
        assert_eq!(parse_reply("SCORE: 150%").score, 150);
    }

    #[test]
    fn test_overflowing_digit_run_defaults_to_zero() {
        assert_eq!(parse_reply("SCORE: 99999999999999999999%").score, 0);
    }

    #[test]
    fn test_expected_format_parses_fully() {
        let reply = "SCORE: 85%\nSTRENGTHS:\n- Python expert\n- Built REST APIs\nMISSING:\n- No cloud experience";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.score, 85);
        assert_eq!(parsed.strengths, vec!["Python expert", "Built REST APIs"]);
        assert_eq!(parsed.gaps, vec!["No cloud experience"]);
    }

    #[test]
    fn test_canonical_empty_reply_yields_defaults() {
        let parsed = parse_reply("SCORE: 0%\nSTRENGTHS:\nMISSING:");
        assert_eq!(parsed, ParsedReply::default());
    }

    #[test]
    fn test_sections_cap_at_three_entries_in_order() {
        let reply = "STRENGTHS:\n- first strength\n- second strength\n- third strength\n- fourth strength\nMISSING:";
        let parsed = parse_reply(reply);
        assert_eq!(
            parsed.strengths,
            vec!["first strength", "second strength", "third strength"]
        );
    }

    #[test]
    fn test_short_lines_are_discarded_as_noise() {
        let reply = "STRENGTHS:\n- ok\n- SQL\n- solid API design background\nMISSING:";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.strengths, vec!["solid API design background"]);
    }

    #[test]
    fn test_noise_floor_is_strictly_greater_than_five() {
        // exactly 5 chars cleaned → dropped; 6 chars → kept
        let parsed = parse_reply("STRENGTHS:\n- abcde\n- abcdef\nMISSING:");
        assert_eq!(parsed.strengths, vec!["abcdef"]);
    }

    #[test]
    fn test_bullet_glyph_variants_are_stripped() {
        let reply = "STRENGTHS:\n• Kubernetes operations\n★ CI/CD pipelines\n▸ Terraform modules\nMISSING:";
        let parsed = parse_reply(reply);
        assert_eq!(
            parsed.strengths,
            vec!["Kubernetes operations", "CI/CD pipelines", "Terraform modules"]
        );
    }

    #[test]
    fn test_internal_whitespace_collapses() {
        let parsed = parse_reply("STRENGTHS:\n-  strong    Rust   background\nMISSING:");
        assert_eq!(parsed.strengths, vec!["strong Rust background"]);
    }

    #[test]
    fn test_residual_punctuation_trimmed() {
        let parsed = parse_reply("STRENGTHS:\n- leadership experience: \nMISSING:");
        assert_eq!(parsed.strengths, vec!["leadership experience"]);
    }

    #[test]
    fn test_strength_singular_heading_matches() {
        let parsed = parse_reply("STRENGTH: deep systems knowledge\nMISSING:");
        assert_eq!(parsed.strengths, vec!["deep systems knowledge"]);
    }

    #[test]
    fn test_lowercase_headings_match() {
        let parsed = parse_reply("score: 50\nstrengths:\n- embedded firmware\nmissing:\n- web frontend work");
        assert_eq!(parsed.score, 50);
        assert_eq!(parsed.strengths, vec!["embedded firmware"]);
        assert_eq!(parsed.gaps, vec!["web frontend work"]);
    }

    #[test]
    fn test_missing_strengths_section_yields_empty_list() {
        let parsed = parse_reply("SCORE: 40%\nMISSING:\n- everything relevant");
        assert!(parsed.strengths.is_empty());
        assert_eq!(parsed.gaps, vec!["everything relevant"]);
    }

    #[test]
    fn test_missing_gaps_section_yields_empty_list() {
        let parsed = parse_reply("SCORE: 95%\nSTRENGTHS:\n- basically everything");
        assert_eq!(parsed.strengths, vec!["basically everything"]);
        assert!(parsed.gaps.is_empty());
    }

    #[test]
    fn test_gaps_capture_runs_to_end_of_text() {
        // No terminator after MISSING — trailing boilerplate leaks in if it
        // survives the length floor. Pinned, not fixed.
        let reply = "MISSING:\n- no Docker experience\nOverall a promising candidate.";
        let parsed = parse_reply(reply);
        assert_eq!(
            parsed.gaps,
            vec!["no Docker experience", "Overall a promising candidate."]
        );
    }

    #[test]
    fn test_strengths_stop_at_missing_heading() {
        let reply = "STRENGTHS:\n- strong SQL skills\nMISSING:\n- no Go experience";
        let parsed = parse_reply(reply);
        assert_eq!(parsed.strengths, vec!["strong SQL skills"]);
        assert_eq!(parsed.gaps, vec!["no Go experience"]);
    }

    #[test]
    fn test_empty_input_yields_all_defaults() {
        assert_eq!(parse_reply(""), ParsedReply::default());
    }
}
