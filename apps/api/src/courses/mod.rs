// Courses and their topics: persistence, orchestration, and the HTTP
// surface. Generation itself lives in the generation module; this one
// decides when to call it and what to persist.

pub mod handlers;
pub mod service;
pub mod store;
