//! Authentication helpers

mod session;

pub use session::AuthHelper;
