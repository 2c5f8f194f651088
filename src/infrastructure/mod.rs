// src/infrastructure/mod.rs
pub mod database;
pub mod repositories;
pub mod resources;
pub mod time;
pub mod util;
