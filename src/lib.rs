pub mod api;
pub mod config;
pub mod credentials;
pub mod db;
pub mod models;
pub mod validation;
