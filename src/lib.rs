pub mod catalog;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod store;
pub mod ui;
pub mod view;
