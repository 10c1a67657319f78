pub mod auth;
pub mod printing;
pub mod users;
