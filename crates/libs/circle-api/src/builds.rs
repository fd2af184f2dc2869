//! Build endpoints.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::{
    Api,
    endpoint::{Endpoint, Page},
    prelude::*,
    project::{Project, StatusFilter},
};

/// Branch built by [`Api::trigger_build`] when none is given.
pub const DEFAULT_BRANCH: &str = "master";

/// Options for [`Api::trigger_build`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TriggerBuild {
    /// Branch to build, [`DEFAULT_BRANCH`] when unset.
    #[serde(skip)]
    pub branch: Option<String>,
    /// Specific revision to build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Tag to build. Mutually exclusive with `revision` on the remote side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Number of containers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<u32>,
    /// Extra environment passed to the build, e.g. `CIRCLE_JOB`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub build_parameters: BTreeMap<String, String>,
}

impl TriggerBuild {
    pub fn branch(branch: impl Into<String>) -> Self {
        Self {
            branch: Some(branch.into()),
            ..Default::default()
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.build_parameters.insert(name.into(), value.into());
        self
    }
}

impl Api {
    /// Build summary for each of the last builds of a project.
    ///
    /// With `branch` set the listing is scoped to that branch through the
    /// path (`project/.../tree/{branch}`).
    pub fn get_project_build_summary(
        &self,
        project: &Project,
        page: Page,
        status_filter: Option<StatusFilter>,
        branch: Option<&str>,
    ) -> Result<Value> {
        let path = match branch {
            Some(branch) => project.path_to(format!("tree/{branch}")),
            None => project.path(),
        };
        let endpoint = Endpoint::get(path)
            .query("limit", page.limit)
            .query("offset", page.offset)
            .query_opt("filter", status_filter);
        self.execute(&endpoint)
    }

    /// Build summary for each of the last builds across every followed project.
    pub fn get_recent_builds(&self, page: Page) -> Result<Value> {
        let endpoint = Endpoint::get("recent-builds")
            .query("limit", page.limit)
            .query("offset", page.offset);
        self.execute(&endpoint)
    }

    /// Full details for a single build.
    pub fn get_build_info(&self, project: &Project, build_num: u64) -> Result<Value> {
        self.execute(&Endpoint::get(project.path_to(build_num)))
    }

    /// Retries a build, returns a summary of the new build.
    pub fn retry_build(&self, project: &Project, build_num: u64) -> Result<Value> {
        self.execute(&Endpoint::post(project.path_to(format!("{build_num}/retry"))))
    }

    /// Cancels a build, returns a summary of the build.
    pub fn cancel_build(&self, project: &Project, build_num: u64) -> Result<Value> {
        self.execute(&Endpoint::post(project.path_to(format!("{build_num}/cancel"))))
    }

    /// Adds the calling user to the SSH users of a running build.
    pub fn add_ssh_user(&self, project: &Project, build_num: u64) -> Result<Value> {
        self.execute(&Endpoint::post(
            project.path_to(format!("{build_num}/ssh-users")),
        ))
    }

    /// Triggers a new build.
    pub fn trigger_build(&self, project: &Project, options: &TriggerBuild) -> Result<Value> {
        let branch = options.branch.as_deref().unwrap_or(DEFAULT_BRANCH);
        let endpoint = Endpoint::post(project.path_to(format!("tree/{branch}"))).json(options)?;
        self.execute(&endpoint)
    }

    /// Test metadata collected for a build.
    pub fn get_test_metadata(&self, project: &Project, build_num: u64) -> Result<Value> {
        self.execute(&Endpoint::get(project.path_to(format!("{build_num}/tests"))))
    }
}
