//! circlecli
//!
//! Thin command line front end over `circle-api` and `circle-sdk`. It is the
//! only place that reads the process environment:
//!
//! - `CIRCLE_TOKEN`: API token, unless `--token` is given
//! - `CIRCLE_BUILD_URL`: the executing build, excluded by `singleton`
//!
//! Run `singleton` early in a CircleCI job to make the builds of a project
//! execute one at a time:
//!
//! ```yaml
//! - run:
//!     name: Build Singleton
//!     command: circlecli singleton --username acme --project widgets
//! ```

mod cli;
mod commands;
mod error;
mod prelude;

use circle_api::{Api, Page};
use circle_config::CircleConfig;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{
    handle_artifacts, handle_builds, handle_download, handle_me, handle_projects, handle_retry,
    handle_singleton, resolve_project,
};
use crate::prelude::*;

const TOKEN_ENV: &str = "CIRCLE_TOKEN";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "circlecli=info,circle_sdk=info,circle_api=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let result = run(cli);

    if let Err(ref e) = result {
        tracing::error!("Error: {}", e);
    }

    result
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CircleConfig::from_file(path)?,
        None => CircleConfig::default(),
    };
    let token = config.token(cli.token, std::env::var(TOKEN_ENV).ok())?;
    let url = cli.url.as_deref().unwrap_or(config.api_url());
    let api = Api::with_url(token, url)?;

    match cli.command {
        Commands::Singleton { project } => {
            let project = resolve_project(project, &config)?;
            handle_singleton(&api, &config, &project)
        }
        Commands::Me => handle_me(&api),
        Commands::Projects => handle_projects(&api),
        Commands::Builds {
            project,
            branch,
            filter,
            limit,
            offset,
        } => {
            let project = resolve_project(project, &config)?;
            handle_builds(&api, &project, branch, filter, Page::new(limit, offset))
        }
        Commands::Artifacts { project, build_num } => {
            let project = resolve_project(project, &config)?;
            handle_artifacts(&api, &project, build_num)
        }
        Commands::Retry {
            project,
            build_num,
            no_cache,
        } => {
            let project = resolve_project(project, &config)?;
            handle_retry(&api, &project, build_num, no_cache)
        }
        Commands::Download {
            url,
            dest_dir,
            file_name,
        } => handle_download(&api, &url, dest_dir, file_name),
    }
}
