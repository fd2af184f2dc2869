//! Command-line interface for circlecli.

use circle_api::VcsType;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for circlecli.
#[derive(Parser)]
#[command(name = "circlecli")]
#[command(about = "circlecli - Query CircleCI and run builds one at a time")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CircleCI API token (can also be set via CIRCLE_TOKEN environment variable)
    #[arg(short, long)]
    pub token: Option<String>,

    /// API base url, for CircleCI server installations
    #[arg(short, long)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Block until no other build of the project is running
    Singleton {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Show the signed in user
    Me,

    /// List followed projects
    Projects,

    /// List the last builds of a project
    Builds {
        #[command(flatten)]
        project: ProjectArgs,

        /// Only list builds of this branch
        #[arg(long)]
        branch: Option<String>,

        /// completed, successful, failed or running
        #[arg(long)]
        filter: Option<String>,

        /// Maximum number of builds
        #[arg(long, default_value_t = 30)]
        limit: u32,

        /// Number of builds to skip
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// List the artifacts of a build
    Artifacts {
        #[command(flatten)]
        project: ProjectArgs,

        /// Build number
        #[arg(long)]
        build_num: u64,
    },

    /// Retry a build
    Retry {
        #[command(flatten)]
        project: ProjectArgs,

        /// Build number
        #[arg(long)]
        build_num: u64,

        /// Skip the dependency cache (undocumented API)
        #[arg(long)]
        no_cache: bool,
    },

    /// Download an artifact
    Download {
        /// Artifact url, as listed by `artifacts`
        #[arg(long)]
        url: String,

        /// Destination directory, the current directory by default
        #[arg(long)]
        dest_dir: Option<PathBuf>,

        /// Destination file name, the last url segment by default
        #[arg(long)]
        file_name: Option<String>,
    },
}

/// Project selection, falling back to the `[project]` config section.
#[derive(Args)]
pub struct ProjectArgs {
    /// Org or user name
    #[arg(long)]
    pub username: Option<String>,

    /// Case sensitive repository name
    #[arg(long)]
    pub project: Option<String>,

    /// github or bitbucket
    #[arg(long)]
    pub vcs_type: Option<VcsType>,
}
