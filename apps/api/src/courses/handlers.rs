//! Axum handlers and wire types for the course API.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::courses::service;
use crate::errors::AppError;
use crate::models::Topic;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CourseCreateRequest {
    pub title: String,
    pub wishes: String,
}

/// One topic as the API presents it. `content` stays null until generated.
#[derive(Debug, Serialize)]
pub struct TopicOut {
    pub id: Uuid,
    pub title: String,
    pub content: Option<String>,
}

impl From<Topic> for TopicOut {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            content: topic.content,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseOutlineResponse {
    pub course_id: Uuid,
    pub topics: Vec<TopicOut>,
}

#[derive(Debug, Serialize)]
pub struct TopicContentResponse {
    pub course_title: String,
    pub course_id: Uuid,
    pub topic_id: Uuid,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct CourseOut {
    pub id: Uuid,
    pub title: String,
}

/// POST /courses/outline
pub async fn handle_create_outline(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CourseCreateRequest>,
) -> Result<Json<CourseOutlineResponse>, AppError> {
    let outline = service::create_outline(
        &state.db,
        state.llm.as_ref(),
        user.user_id,
        &payload.title,
        &payload.wishes,
    )
    .await?;

    Ok(Json(CourseOutlineResponse {
        course_id: outline.course.id,
        topics: outline.topics.into_iter().map(TopicOut::from).collect(),
    }))
}

/// POST /courses/topics/:topic_id/generate
pub async fn handle_generate_topic_content(
    State(state): State<AppState>,
    user: AuthUser,
    Path(topic_id): Path<Uuid>,
) -> Result<Json<TopicContentResponse>, AppError> {
    let generated =
        service::generate_topic_content(&state.db, state.llm.as_ref(), user.user_id, topic_id)
            .await?;

    Ok(Json(TopicContentResponse {
        course_title: generated.course_title,
        course_id: generated.course_id,
        topic_id: generated.topic_id,
        content: generated.content,
    }))
}

/// GET /courses/mine
pub async fn handle_list_my_courses(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<CourseOut>>, AppError> {
    let courses = service::list_owned_courses(&state.db, user.user_id).await?;

    Ok(Json(
        courses
            .into_iter()
            .map(|course| CourseOut {
                id: course.id,
                title: course.title,
            })
            .collect(),
    ))
}

/// GET /courses/:course_id/topics
pub async fn handle_list_course_topics(
    State(state): State<AppState>,
    user: AuthUser,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<TopicOut>>, AppError> {
    let topics = service::list_topics(&state.db, user.user_id, course_id).await?;
    Ok(Json(topics.into_iter().map(TopicOut::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_create_request_deserialization() {
        let payload = r#"{"title": "Rust", "wishes": "lots of exercises"}"#;
        let parsed: CourseCreateRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.title, "Rust");
        assert_eq!(parsed.wishes, "lots of exercises");
    }

    #[test]
    fn test_topic_out_serializes_null_content() {
        let out = TopicOut {
            id: Uuid::new_v4(),
            title: "Ownership".to_string(),
            content: None,
        };
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["title"], "Ownership");
        assert!(json["content"].is_null());
    }

    #[test]
    fn test_outline_response_preserves_topic_order() {
        let response = CourseOutlineResponse {
            course_id: Uuid::new_v4(),
            topics: vec![
                TopicOut {
                    id: Uuid::new_v4(),
                    title: "First".to_string(),
                    content: None,
                },
                TopicOut {
                    id: Uuid::new_v4(),
                    title: "Second".to_string(),
                    content: None,
                },
            ],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["topics"][0]["title"], "First");
        assert_eq!(json["topics"][1]["title"], "Second");
    }

    #[test]
    fn test_topic_out_from_row_keeps_content() {
        let topic = Topic {
            id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            position: 3,
            title: "Lifetimes".to_string(),
            content: Some("lesson text".to_string()),
            created_at: chrono::Utc::now(),
        };

        let out = TopicOut::from(topic);
        assert_eq!(out.title, "Lifetimes");
        assert_eq!(out.content.as_deref(), Some("lesson text"));
    }
}
