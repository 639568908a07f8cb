pub mod commands;
pub mod environment;
mod render;
mod storage;
