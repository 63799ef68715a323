pub mod achievement;
pub mod app;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod leaderboard;
pub mod queries_handlers;
pub mod repository;
pub mod services;
pub mod submission;
pub mod test_utils;
