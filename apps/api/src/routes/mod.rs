pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::courses::handlers as courses;
use crate::identity::handlers as identity;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Identity
        .route("/auth/register", post(identity::handle_register))
        .route("/auth/login", post(identity::handle_login))
        // Courses (everything below requires a bearer token)
        .route("/courses/outline", post(courses::handle_create_outline))
        .route(
            "/courses/topics/:topic_id/generate",
            post(courses::handle_generate_topic_content),
        )
        .route("/courses/mine", get(courses::handle_list_my_courses))
        .route(
            "/courses/:course_id/topics",
            get(courses::handle_list_course_topics),
        )
        .with_state(state)
}
