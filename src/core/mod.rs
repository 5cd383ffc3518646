pub mod app;
pub mod config;
pub mod gateway;
pub mod keyring;
pub mod news;
