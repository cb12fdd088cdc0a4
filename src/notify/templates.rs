// Decision email templates. Replace `{score}` before sending.

/// Scores at or above this are shortlisted; everything below gets the
/// rejection template.
pub const SHORTLIST_THRESHOLD: u32 = 80;

pub const SHORTLIST_SUBJECT: &str = "Shortlisted - Next Steps | ABC Technologies";

pub const SHORTLIST_BODY: &str = "Dear Candidate,

Thank you for applying to ABC Technologies.

We are pleased to inform you that your profile has been shortlisted for the position based on our initial evaluation (Match Score: {score}%).

Instructions:
1. You will receive a call from our recruitment team within 48 hours to schedule your interview
2. Please ensure you are available next week for the interview process
3. Prepare to discuss your relevant experience and technical skills

We look forward to speaking with you soon.

Best regards,
Hiring Team
ABC Technologies";

pub const REJECTION_SUBJECT: &str = "Application Update | ABC Technologies";

pub const REJECTION_BODY: &str = "Dear Candidate,

Thank you for your application to ABC Technologies.

After careful review of your profile against our current requirements, we have determined it is not a strong match at this time (Match Score: {score}%).

Instructions:
1. Please consider other suitable positions on our careers page
2. Update your profile and reapply when you gain relevant experience
3. We encourage you to continue building skills in required technologies

We wish you success in your career search.

Best regards,
Hiring Team
ABC Technologies";

/// Subject and rendered body for the given score.
pub fn decision_message(score: u32) -> (&'static str, String) {
    let (subject, body) = if score >= SHORTLIST_THRESHOLD {
        (SHORTLIST_SUBJECT, SHORTLIST_BODY)
    } else {
        (REJECTION_SUBJECT, REJECTION_BODY)
    };
    (subject, body.replace("{score}", &score.to_string()))
}
