mod owner_auth;

pub use owner_auth::*;
