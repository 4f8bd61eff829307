//! Course orchestration: outline creation and on-demand lesson generation.
//!
//! This layer owns the ordering guarantees. The outline count gate runs
//! before any row is written, and the ownership gate runs before any lesson
//! is generated or revealed.

use tracing::info;
use uuid::Uuid;

use crate::courses::store::CurriculumStore;
use crate::errors::AppError;
use crate::generation::content::generate_content;
use crate::generation::outline::{generate_outline, OUTLINE_TOPIC_COUNT};
use crate::llm_client::Completion;
use crate::models::{Course, Topic};

/// A freshly created course with its stored topics, in outline order.
#[derive(Debug)]
pub struct CourseOutline {
    pub course: Course,
    pub topics: Vec<Topic>,
}

/// Lesson text for one topic plus the course context it belongs to.
#[derive(Debug)]
pub struct TopicContent {
    pub course_id: Uuid,
    pub course_title: String,
    pub topic_id: Uuid,
    pub content: String,
}

/// Creates a course: generates the outline, rejects a wrong topic count
/// before anything is written, then persists course and topics atomically.
pub async fn create_outline(
    store: &dyn CurriculumStore,
    llm: &dyn Completion,
    owner_id: Uuid,
    title: &str,
    wishes: &str,
) -> Result<CourseOutline, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::Validation(
            "course title cannot be empty".to_string(),
        ));
    }

    let titles = generate_outline(llm, title, wishes).await?;
    if titles.len() != OUTLINE_TOPIC_COUNT {
        return Err(AppError::GenerationIncomplete {
            got: titles.len(),
            expected: OUTLINE_TOPIC_COUNT,
        });
    }

    let (course, topics) = store
        .create_course_with_topics(owner_id, title, wishes, &titles)
        .await?;

    info!(
        "Created course {} with {} topics for user {}",
        course.id,
        topics.len(),
        owner_id
    );

    Ok(CourseOutline { course, topics })
}

/// Returns lesson content for a topic, generating and storing it on the
/// first request. Stored non-blank content short-circuits without a
/// completion call and is returned exactly as stored.
pub async fn generate_topic_content(
    store: &dyn CurriculumStore,
    llm: &dyn Completion,
    user_id: Uuid,
    topic_id: Uuid,
) -> Result<TopicContent, AppError> {
    let topic = store
        .find_topic(topic_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Topic not found".to_string()))?;

    let course = owned_course(store.find_course(topic.course_id).await?, user_id)?;

    if let Some(existing) = stored_content(topic.content.as_deref()) {
        return Ok(TopicContent {
            course_id: course.id,
            course_title: course.title,
            topic_id: topic.id,
            content: existing.to_string(),
        });
    }

    let content = generate_content(llm, &course.title, &course.wishes, &topic.title).await?;
    let updated = store.set_topic_content(topic.id, &content).await?;

    info!(
        "Generated lesson for topic {} ({} chars)",
        updated.id,
        content.len()
    );

    Ok(TopicContent {
        course_id: course.id,
        course_title: course.title,
        topic_id: updated.id,
        content: updated.content.unwrap_or_default(),
    })
}

/// Lists the user's courses, oldest first.
pub async fn list_owned_courses(
    store: &dyn CurriculumStore,
    user_id: Uuid,
) -> Result<Vec<Course>, AppError> {
    Ok(store.list_courses_by_owner(user_id).await?)
}

/// Lists a course's topics in outline order, gated on ownership.
pub async fn list_topics(
    store: &dyn CurriculumStore,
    user_id: Uuid,
    course_id: Uuid,
) -> Result<Vec<Topic>, AppError> {
    owned_course(store.find_course(course_id).await?, user_id)?;
    Ok(store.list_topics_by_course(course_id).await?)
}

/// Resolves the ownership gate. A missing course and a foreign course both
/// come back Forbidden, so probing course ids reveals nothing.
fn owned_course(course: Option<Course>, user_id: Uuid) -> Result<Course, AppError> {
    match course {
        Some(course) if course.owner_id == user_id => Ok(course),
        _ => Err(AppError::Forbidden),
    }
}

/// Stored lesson text counts only when it has visible characters; NULL,
/// empty, and whitespace-only all mean "not generated yet".
fn stored_content(content: Option<&str>) -> Option<&str> {
    content.filter(|text| !text.trim().is_empty())
}
