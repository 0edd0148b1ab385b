pub mod airlines;
pub mod reopen_app;
