//! Command handlers.

use std::path::PathBuf;

use circle_api::{Api, Page, Project, StatusFilter};
use circle_config::CircleConfig;
use circle_sdk::{BUILD_URL_ENV, BuildSingleton};
use serde_json::Value;
use tracing::info;

use crate::{cli::ProjectArgs, prelude::*};

/// Resolves the project from the command line, then the config file.
pub fn resolve_project(args: ProjectArgs, config: &CircleConfig) -> Result<Project> {
    let fallback = config.project.as_ref();
    let username = args
        .username
        .or_else(|| fallback.map(|p| p.username.clone()))
        .ok_or(Error::ProjectMissing)?;
    let project = args
        .project
        .or_else(|| fallback.map(|p| p.project.clone()))
        .ok_or(Error::ProjectMissing)?;
    let vcs_type = args
        .vcs_type
        .or_else(|| fallback.map(|p| p.vcs_type))
        .unwrap_or_default();
    Ok(Project::with_vcs(vcs_type, username, project))
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Blocks until the other running builds of `project` are done.
pub fn handle_singleton(api: &Api, config: &CircleConfig, project: &Project) -> Result<()> {
    let current_build = std::env::var(BUILD_URL_ENV).ok();

    let mut singleton = BuildSingleton::new(api, current_build);
    if let Some(interval) = config.singleton.interval() {
        singleton = singleton.with_interval(interval);
    }
    if let Some(limit) = config.singleton.limit {
        singleton = singleton.with_limit(limit);
    }

    info!("Waiting for running builds of {}", project);
    let report = singleton.wait(project)?;
    info!("Done after {}", report);
    Ok(())
}

pub fn handle_me(api: &Api) -> Result<()> {
    print_json(&api.get_user_info()?)
}

pub fn handle_projects(api: &Api) -> Result<()> {
    print_json(&api.get_projects()?)
}

pub fn handle_builds(
    api: &Api,
    project: &Project,
    branch: Option<String>,
    filter: Option<String>,
    page: Page,
) -> Result<()> {
    let filter = StatusFilter::parse_opt(filter.as_deref())?;
    print_json(&api.get_project_build_summary(project, page, filter, branch.as_deref())?)
}

pub fn handle_artifacts(api: &Api, project: &Project, build_num: u64) -> Result<()> {
    print_json(&api.get_artifacts(project, build_num)?)
}

pub fn handle_retry(api: &Api, project: &Project, build_num: u64, no_cache: bool) -> Result<()> {
    let build = if no_cache {
        api.experimental().retry_no_cache(project, build_num)?
    } else {
        api.retry_build(project, build_num)?
    };
    print_json(&build)
}

pub fn handle_download(
    api: &Api,
    url: &str,
    dest_dir: Option<PathBuf>,
    file_name: Option<String>,
) -> Result<()> {
    let path = api.download_artifact(url, dest_dir.as_deref(), file_name.as_deref())?;
    println!("{}", path.display());
    Ok(())
}
