// Database row types, one file per aggregate.

pub mod course;
pub mod user;

pub use course::{Course, Topic};
pub use user::User;
