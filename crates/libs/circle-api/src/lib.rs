//! Blocking client for the CircleCI v1.1 REST API.
//!
//! Each method maps to exactly one HTTP endpoint and returns the decoded
//! JSON body. Enumerated arguments (verbs, status filters, key types) are
//! validated before any request is sent.
//!
//! # Usage
//!
//! ```rust,no_run
//! use circle_api::{Api, Page, Project, StatusFilter};
//!
//! let api = Api::new(std::env::var("CIRCLE_TOKEN").unwrap()).unwrap();
//! let project = Project::new("acme", "widgets");
//!
//! let running = api
//!     .get_project_build_summary(&project, Page::limit(100), Some(StatusFilter::Running), None)
//!     .unwrap();
//! println!("{running:#}");
//! ```

pub mod artifacts;
pub mod builds;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod experimental;
pub mod prelude;
pub mod project;
pub mod settings;

pub use builds::TriggerBuild;
pub use client::{Api, DEFAULT_URL};
pub use endpoint::{Endpoint, Page, Verb};
pub use error::{Error, ErrorKind};
pub use experimental::Experimental;
pub use project::{KeyType, Project, StatusFilter, VcsType};
