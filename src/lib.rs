pub mod cli;
pub mod config;
pub mod content;
pub mod models;
pub mod services;


pub use config::Config;
pub use content::Collection;
