pub mod author;
pub mod config;
pub mod db;
pub mod password;
pub mod telemetry;
pub mod token;

pub use author::{Author, AuthorError, AuthorResult};
