pub mod app;
pub mod build;
pub mod config;
pub mod cors;
pub mod http;
pub mod routes;
pub mod state;
pub mod token;
