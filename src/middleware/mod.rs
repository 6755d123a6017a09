/*
 * Responsibility
 * - public middleware interface (re-export)
 * - auth gate layers and HTTP-level layers
 */
pub mod auth;
pub mod http;
