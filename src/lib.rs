//! Immersive disaster data stories: load a table of disaster events once,
//! filter it by year range and type, and draw four charts plus a preview.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod stories;
pub mod ui;
