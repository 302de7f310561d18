pub mod audit;
pub mod auth;
pub mod config;
pub mod core;
pub mod jobs;
pub mod meetings;
pub mod notify;
pub mod shared;
pub mod slots;
pub mod tests;
