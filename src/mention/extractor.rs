//! Extraction of the user question following a trigger mention.

use regex::Regex;

/// The literal trigger token. Matching is case-sensitive: `@Claude` is not
/// a mention.
pub const TRIGGER_TOKEN: &str = "@claude";

/// Pattern matching the trigger token followed by at least one whitespace
/// character, capturing everything after the whitespace run to the end of
/// the text. The `(?s)` flag lets the capture span newlines.
const TRIGGER_PATTERN: &str = r"(?s)@claude\s+(.*)";

/// Extract the question text following the first trigger mention.
///
/// Returns `None` when the text contains no mention. Returns `Some("")`
/// when the token is followed by whitespace but no further content: an
/// empty question is still a mention and the pipeline proceeds with it.
///
/// # Example
///
/// ```
/// use claude_responder::mention::extract_question;
///
/// let question = extract_question("@claude   explain X\nand Y");
/// assert_eq!(question.as_deref(), Some("explain X\nand Y"));
///
/// assert_eq!(extract_question("no mention here"), None);
/// assert_eq!(extract_question("@claude"), None);
/// ```
pub fn extract_question(raw_text: &str) -> Option<String> {
    let pattern = Regex::new(TRIGGER_PATTERN).expect("Invalid regex for trigger mention");

    pattern
        .captures(raw_text)
        .and_then(|captures| captures.get(1))
        .map(|question| question.as_str().trim().to_string())
}
