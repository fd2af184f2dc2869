//! Operations against undocumented parts of the CircleCI API.
//!
//! These are not supported by CircleCI and may change at any moment.

use serde_json::Value;

use crate::{Api, endpoint::Endpoint, prelude::*, project::Project};

/// Undocumented operations layered on top of an [`Api`].
///
/// ```rust,no_run
/// use circle_api::{Api, Project};
///
/// let api = Api::new("my-token").unwrap();
/// let build = api
///     .experimental()
///     .retry_no_cache(&Project::new("acme", "widgets"), 42)
///     .unwrap();
/// assert_eq!(build["no_dependency_cache"], true);
/// ```
pub struct Experimental<'a> {
    api: &'a Api,
}

impl<'a> Experimental<'a> {
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Retries a build without restoring its dependency cache.
    pub fn retry_no_cache(&self, project: &Project, build_num: u64) -> Result<Value> {
        let endpoint =
            Endpoint::post(project.path_to(format!("{build_num}/retry"))).query("no-cache", true);
        self.api.execute(&endpoint)
    }
}

impl Api {
    /// Access to [`Experimental`] operations.
    pub fn experimental(&self) -> Experimental<'_> {
        Experimental::new(self)
    }
}
