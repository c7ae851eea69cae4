pub mod backend;
pub mod config;
pub mod models;
pub mod roles;
