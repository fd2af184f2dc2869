//! Configuration management for the circle-rs tools.
//!
//! # Usage
//!
//! ```rust
//! use circle_config::CircleConfig;
//!
//! let config = CircleConfig::from_toml(
//!     r#"
//!     [api]
//!     url = "https://circleci.example.com/api/v1.1"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.api_url(), "https://circleci.example.com/api/v1.1");
//! ```

pub mod circle_config;
pub mod error;
pub mod prelude;

pub use circle_config::{ApiConfig, CircleConfig, SingletonConfig};
