// Authentication primitives: password hashing, access tokens, and the
// handler-side extractor. Identity storage lives in identity::store.

pub mod extractor;
pub mod jwt;
pub mod password;
