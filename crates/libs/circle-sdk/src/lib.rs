//! Higher level CircleCI workflows.
//!
//! # Usage
//!
//! Make the builds of a project run one at a time by calling the build
//! singleton early in a CircleCI job:
//!
//! ```rust,no_run
//! use circle_api::{Api, Project};
//! use circle_sdk::{BUILD_URL_ENV, BuildSingleton};
//!
//! let api = Api::new(std::env::var("CIRCLE_TOKEN").unwrap()).unwrap();
//! let current_build = std::env::var(BUILD_URL_ENV).ok();
//!
//! BuildSingleton::new(&api, current_build)
//!     .wait(&Project::new("acme", "widgets"))
//!     .unwrap();
//! ```

pub mod error;
pub mod prelude;
pub mod running;
pub mod singleton;

pub use error::Error;
pub use running::{BuildSummary, RunningBuilds};
pub use singleton::{
    BUILD_URL_ENV, BuildSingleton, PROJECT_BUILD_LIMIT, Pause, SLEEP_INTERVAL, SingletonReport,
    ThreadSleep,
};
