pub mod message;
pub mod persona;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::CoachError;
pub type Result<T> = std::result::Result<T, CoachError>;
