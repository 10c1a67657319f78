pub mod auth;
pub mod pages;
pub mod printing;
pub mod users;
