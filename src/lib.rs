pub mod common;
pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod services;
