pub mod common;
pub mod role;
pub mod user;
