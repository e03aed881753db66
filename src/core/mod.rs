//! Shared configuration and parameter models

pub mod config;
pub mod models;
