/*
 * Responsibility
 * - crate surface: the auth gate layers, the account store seam and the demo router
 * - main.rs only boots app::run()
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
