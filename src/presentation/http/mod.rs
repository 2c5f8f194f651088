// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod matcher;
pub mod openapi;
pub mod routes;
pub mod state;
