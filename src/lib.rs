pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod hire;
pub mod models;
pub mod notify;

pub use db::create_pool;
