pub mod config;
pub mod db;
pub mod error;
pub mod generator;

pub use config::{Config, GeneratorConfig};
pub use db::{PasswordStore, ReusedPassword, SqlitePool};
pub use error::MintError;
pub use generator::{CharsetOptions, GenerationResult, PasswordGenerator, PasswordStyle, Strength};
