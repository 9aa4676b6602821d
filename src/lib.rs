pub mod cli;
pub mod component;
pub mod config;
pub mod embedded_ui;
pub mod generator;
pub mod llm;
pub mod main_module;
pub mod render;
pub mod shared;
pub mod web_server;
