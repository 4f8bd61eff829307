//! Lesson generation: long-form Markdown content for a single topic.

use crate::generation::prompts::{CONTENT_PROMPT_TEMPLATE, CONTENT_SYSTEM};
use crate::llm_client::{Completion, LlmError};

/// Fills the lesson prompt template. The course title and wishes travel
/// with every topic so lessons stay consistent with the course as a whole.
pub(crate) fn build_content_prompt(course_title: &str, wishes: &str, topic_title: &str) -> String {
    CONTENT_PROMPT_TEMPLATE
        .replace("{course_title}", course_title)
        .replace("{wishes}", wishes)
        .replace("{topic_title}", topic_title)
}

/// Asks the completion backend for the lesson text of one topic. Makes
/// exactly one completion call and returns the trimmed text verbatim; an
/// empty generation is a valid result, not an error.
pub async fn generate_content(
    llm: &dyn Completion,
    course_title: &str,
    wishes: &str,
    topic_title: &str,
) -> Result<String, LlmError> {
    let prompt = build_content_prompt(course_title, wishes, topic_title);
    let text = llm.complete(CONTENT_SYSTEM, &prompt).await?;
    Ok(text.trim().to_string())
}
