//! Outline generation: the 15 topic titles a new course starts from.

use crate::generation::prompts::{OUTLINE_PROMPT_TEMPLATE, OUTLINE_SYSTEM};
use crate::llm_client::{Completion, LlmError};

/// Every outline has exactly this many topics; the course service refuses
/// to persist anything else.
pub const OUTLINE_TOPIC_COUNT: usize = 15;

/// Characters stripped from both ends of each returned line: bullet and
/// dash decoration plus whitespace.
const LINE_DECORATION: &[char] = &['-', '•', '\t', ' '];

/// Fills the outline prompt template.
pub(crate) fn build_outline_prompt(course_title: &str, wishes: &str) -> String {
    OUTLINE_PROMPT_TEMPLATE
        .replace("{title}", course_title)
        .replace("{wishes}", wishes)
}

/// Asks the completion backend for a course outline and post-processes the
/// raw text into topic titles. Makes exactly one completion call.
pub async fn generate_outline(
    llm: &dyn Completion,
    course_title: &str,
    wishes: &str,
) -> Result<Vec<String>, LlmError> {
    let prompt = build_outline_prompt(course_title, wishes);
    let text = llm.complete(OUTLINE_SYSTEM, &prompt).await?;
    Ok(parse_outline_lines(&text))
}

/// Splits raw completion text into topic titles: drop blank lines, strip
/// bullet/dash decoration from both ends of each remaining line, keep at
/// most the first [`OUTLINE_TOPIC_COUNT`] entries.
///
/// Never pads a short result and never retries; the caller decides what a
/// wrong count means. Duplicate titles are not filtered here either, the
/// per-course unique constraint catches them at insert time.
pub fn parse_outline_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches(LINE_DECORATION).to_string())
        .take(OUTLINE_TOPIC_COUNT)
        .collect()
}
