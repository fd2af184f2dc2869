//! Project identifiers and enumerated call options.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Source control host a project lives on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VcsType {
    #[default]
    Github,
    Bitbucket,
}

impl VcsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsType::Github => "github",
            VcsType::Bitbucket => "bitbucket",
        }
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VcsType {
    type Err = String;

    fn from_str(value: &str) -> core::result::Result<Self, Self::Err> {
        match value {
            "github" => Ok(VcsType::Github),
            "bitbucket" => Ok(VcsType::Bitbucket),
            _ => Err(format!("{value} is not a vcs type, use github or bitbucket")),
        }
    }
}

/// A followed project: `(vcs type, org or user name, repository name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub vcs_type: VcsType,
    pub username: String,
    #[serde(rename = "name")]
    pub project: String,
}

impl Project {
    /// A GitHub project.
    pub fn new(username: impl Into<String>, project: impl Into<String>) -> Self {
        Self::with_vcs(VcsType::Github, username, project)
    }

    pub fn with_vcs(
        vcs_type: VcsType,
        username: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            vcs_type,
            username: username.into(),
            project: project.into(),
        }
    }

    /// `project/{vcs}/{username}/{project}`
    pub fn path(&self) -> String {
        format!("project/{}/{}/{}", self.vcs_type, self.username, self.project)
    }

    /// `project/{vcs}/{username}/{project}/{suffix}`
    pub fn path_to(&self, suffix: impl fmt::Display) -> String {
        format!("{}/{suffix}", self.path())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.username, self.project)
    }
}

/// Restricts which builds a listing returns. "Unset" is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Completed,
    Successful,
    Failed,
    Running,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::Completed,
        StatusFilter::Successful,
        StatusFilter::Failed,
        StatusFilter::Running,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Completed => "completed",
            StatusFilter::Successful => "successful",
            StatusFilter::Failed => "failed",
            StatusFilter::Running => "running",
        }
    }

    /// Parses an optional filter, where `None` means unset.
    pub fn parse_opt(value: Option<&str>) -> Result<Option<Self>> {
        value.map(str::parse::<StatusFilter>).transpose()
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        StatusFilter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == value)
            .ok_or_else(|| Error::invalid_filter(value, &StatusFilter::ALL))
    }
}

/// Checkout key flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyType {
    DeployKey,
    GithubUserKey,
}

impl KeyType {
    pub const ALL: [KeyType; 2] = [KeyType::DeployKey, KeyType::GithubUserKey];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::DeployKey => "deploy-key",
            KeyType::GithubUserKey => "github-user-key",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        KeyType::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| Error::bad_key(value, &KeyType::ALL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn project_paths() {
        let project = Project::new("acme", "widgets");
        assert_eq!(project.path(), "project/github/acme/widgets");
        assert_eq!(project.path_to(42), "project/github/acme/widgets/42");

        let project = Project::with_vcs(VcsType::Bitbucket, "acme", "widgets");
        assert_eq!(project.path_to("envvar"), "project/bitbucket/acme/widgets/envvar");
    }

    #[test]
    fn status_filter_accepts_known_values() {
        for value in ["completed", "successful", "failed", "running"] {
            let filter: StatusFilter = value.parse().unwrap();
            assert_eq!(filter.as_str(), value);
        }
        assert_eq!(StatusFilter::parse_opt(None).unwrap(), None);
    }

    #[test]
    fn status_filter_rejects_unknown_values() {
        for value in ["dummy", "Running", "queued", ""] {
            let err = value.parse::<StatusFilter>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFilter);
            assert_eq!(err.argument(), Some(value));
            let message = err.to_string();
            for allowed in ["None", "completed", "successful", "failed", "running"] {
                assert!(message.contains(allowed), "{message} misses {allowed}");
            }
        }
    }

    #[test]
    fn key_type_validation() {
        assert_eq!("deploy-key".parse::<KeyType>().unwrap(), KeyType::DeployKey);
        assert_eq!(
            "github-user-key".parse::<KeyType>().unwrap(),
            KeyType::GithubUserKey
        );

        let err = "bad".parse::<KeyType>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadKey);
        assert_eq!(err.argument(), Some("bad"));
        assert!(err.to_string().contains("deploy-key"));
        assert!(err.to_string().contains("github-user-key"));
    }

    #[test]
    fn vcs_type_parsing() {
        assert_eq!("bitbucket".parse::<VcsType>().unwrap(), VcsType::Bitbucket);
        assert!("gitlab".parse::<VcsType>().is_err());
        assert_eq!(VcsType::default().to_string(), "github");
    }
}
