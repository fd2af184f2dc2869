#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] circle_api::Error),

    #[error(transparent)]
    Sdk(#[from] circle_sdk::Error),

    #[error(transparent)]
    Config(#[from] circle_config::error::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Project is missing. Use --username and --project or add a [project] section to the config file")]
    ProjectMissing,
}
