use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A course owned by one user. `wishes` holds the free-text preferences the
/// outline and every lesson of this course are generated from.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub wishes: String,
    pub created_at: DateTime<Utc>,
}

/// One topic of a course outline.
///
/// `position` is the zero-based slot in the generated outline; listing
/// endpoints order by it. `content` stays NULL until the lesson text is
/// generated on demand.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Topic {
    pub id: Uuid,
    pub course_id: Uuid,
    pub position: i32,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
}
