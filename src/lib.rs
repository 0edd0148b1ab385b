pub mod actions;
pub mod airline_api;
pub mod airline_search;
pub mod app_restart;
pub mod common;
pub mod launcher;
pub mod logging;
pub mod notify;
pub mod plugin;
pub mod plugins;
pub mod settings;
pub mod toast_log;
