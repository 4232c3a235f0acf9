pub mod config;
pub mod genesis;
pub mod registry;
