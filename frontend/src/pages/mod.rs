pub mod about;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod plants;
