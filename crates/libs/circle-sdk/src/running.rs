//! Source of running builds for a project.

use circle_api::{Api, Page, Project, StatusFilter};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The part of a build summary the SDK cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub build_url: String,
}

/// Lists the builds of a project that are currently running.
pub trait RunningBuilds {
    /// Returns up to `limit` build URLs, freshly queried on every call.
    fn running_builds(&self, project: &Project, limit: u32) -> Result<Vec<String>>;
}

impl RunningBuilds for Api {
    fn running_builds(&self, project: &Project, limit: u32) -> Result<Vec<String>> {
        let summary = self.get_project_build_summary(
            project,
            Page::limit(limit),
            Some(StatusFilter::Running),
            None,
        )?;
        let builds: Vec<BuildSummary> = serde_json::from_value(summary)?;
        Ok(builds.into_iter().map(|build| build.build_url).collect())
    }
}

impl<T: RunningBuilds + ?Sized> RunningBuilds for &T {
    fn running_builds(&self, project: &Project, limit: u32) -> Result<Vec<String>> {
        (**self).running_builds(project, limit)
    }
}
