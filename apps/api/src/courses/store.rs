//! Persistence for courses and their topics.
//!
//! The service layer is written against [`CurriculumStore`]; the [`PgPool`]
//! implementation is the production backend and tests substitute an
//! in-memory one. Methods return plain `sqlx::Error`; mapping to
//! HTTP-facing errors happens in the service layer.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Course, Topic};

/// Column lists shared across queries to avoid repetition.
const COURSE_COLUMNS: &str = "id, owner_id, title, wishes, created_at";
const TOPIC_COLUMNS: &str = "id, course_id, position, title, content, created_at";

/// Storage operations for courses and their topics.
#[async_trait]
pub trait CurriculumStore: Send + Sync {
    /// Inserts a course and all of its topics in one transaction.
    ///
    /// Topic positions are assigned from the slice order, so the stored
    /// outline reads back exactly as generated. Nothing persists if any
    /// insert fails; in particular a duplicate title inside the outline
    /// rolls everything back.
    async fn create_course_with_topics(
        &self,
        owner_id: Uuid,
        title: &str,
        wishes: &str,
        topic_titles: &[String],
    ) -> Result<(Course, Vec<Topic>), sqlx::Error>;

    /// Find a course by id.
    async fn find_course(&self, course_id: Uuid) -> Result<Option<Course>, sqlx::Error>;

    /// Find a topic by id.
    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<Topic>, sqlx::Error>;

    /// List a user's courses, oldest first.
    async fn list_courses_by_owner(&self, owner_id: Uuid) -> Result<Vec<Course>, sqlx::Error>;

    /// List a course's topics in outline order.
    async fn list_topics_by_course(&self, course_id: Uuid) -> Result<Vec<Topic>, sqlx::Error>;

    /// Store generated lesson text on a topic, returning the updated row.
    async fn set_topic_content(&self, topic_id: Uuid, content: &str) -> Result<Topic, sqlx::Error>;
}

#[async_trait]
impl CurriculumStore for PgPool {
    async fn create_course_with_topics(
        &self,
        owner_id: Uuid,
        title: &str,
        wishes: &str,
        topic_titles: &[String],
    ) -> Result<(Course, Vec<Topic>), sqlx::Error> {
        let mut tx = self.begin().await?;

        let course_query = format!(
            "INSERT INTO courses (id, owner_id, title, wishes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COURSE_COLUMNS}"
        );
        let course = sqlx::query_as::<_, Course>(&course_query)
            .bind(Uuid::new_v4())
            .bind(owner_id)
            .bind(title)
            .bind(wishes)
            .fetch_one(&mut *tx)
            .await?;

        let topic_query = format!(
            "INSERT INTO topics (id, course_id, position, title)
             VALUES ($1, $2, $3, $4)
             RETURNING {TOPIC_COLUMNS}"
        );
        let mut topics = Vec::with_capacity(topic_titles.len());
        for (position, topic_title) in topic_titles.iter().enumerate() {
            let topic = sqlx::query_as::<_, Topic>(&topic_query)
                .bind(Uuid::new_v4())
                .bind(course.id)
                .bind(position as i32)
                .bind(topic_title)
                .fetch_one(&mut *tx)
                .await?;
            topics.push(topic);
        }

        tx.commit().await?;
        Ok((course, topics))
    }

    async fn find_course(&self, course_id: Uuid) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(course_id)
            .fetch_optional(self)
            .await
    }

    async fn find_topic(&self, topic_id: Uuid) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(topic_id)
            .fetch_optional(self)
            .await
    }

    async fn list_courses_by_owner(&self, owner_id: Uuid) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE owner_id = $1 ORDER BY created_at"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(owner_id)
            .fetch_all(self)
            .await
    }

    async fn list_topics_by_course(&self, course_id: Uuid) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "SELECT {TOPIC_COLUMNS} FROM topics WHERE course_id = $1 ORDER BY position"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(course_id)
            .fetch_all(self)
            .await
    }

    async fn set_topic_content(&self, topic_id: Uuid, content: &str) -> Result<Topic, sqlx::Error> {
        let query = format!(
            "UPDATE topics SET content = $2 WHERE id = $1 RETURNING {TOPIC_COLUMNS}"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(topic_id)
            .bind(content)
            .fetch_one(self)
            .await
    }
}
