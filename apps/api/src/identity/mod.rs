// Account registration and login: validation, storage, and the HTTP surface.
// Token and password primitives live in the auth module.

pub mod handlers;
pub mod store;
