// Library exports for the fitpulse CLI
// This allows testing of internal modules

pub mod commands;
pub mod config;
pub mod storage;
pub mod ui;
