pub mod app;
pub mod bindings;
pub mod channel;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod surface;
