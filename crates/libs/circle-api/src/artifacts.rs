//! Artifact listing and download.

use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    Api,
    client::check_status,
    endpoint::Endpoint,
    prelude::*,
    project::{Project, StatusFilter},
};

/// Size of the buffer used to stream artifacts to disk.
pub const CHUNK_SIZE: usize = 1024;

/// Query parameter carrying the credential on artifact downloads.
const TOKEN_PARAM: &str = "circle-token";

impl Api {
    /// Artifacts produced by a build.
    pub fn get_artifacts(&self, project: &Project, build_num: u64) -> Result<Value> {
        self.execute(&Endpoint::get(
            project.path_to(format!("{build_num}/artifacts")),
        ))
    }

    /// Artifacts of the latest build of a project.
    ///
    /// `status_filter` defaults to [`StatusFilter::Completed`]. When the
    /// project has no artifacts the service may answer 404 instead of an
    /// empty list; that surfaces as an error, check it with
    /// [`Error::is_not_found`].
    pub fn get_latest_artifact(
        &self,
        project: &Project,
        branch: Option<&str>,
        status_filter: Option<StatusFilter>,
    ) -> Result<Value> {
        let endpoint = Endpoint::get(project.path_to("latest/artifacts"))
            .query_opt("branch", branch)
            .query(
                "filter",
                status_filter.unwrap_or(StatusFilter::Completed),
            );
        self.execute(&endpoint)
    }

    /// Downloads an artifact to disk and returns the written path.
    ///
    /// `dest_dir` defaults to the current directory and `file_name` to the
    /// last segment of the artifact URL. The artifact host may differ from
    /// the API host, so the credential travels as a query parameter.
    pub fn download_artifact(
        &self,
        url: &str,
        dest_dir: Option<&Path>,
        file_name: Option<&str>,
    ) -> Result<PathBuf> {
        let mut request_url = Url::parse(url).map_err(|_| Error::InvalidUrl(url.to_string()))?;

        let dest_dir = match dest_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let file_name = match file_name {
            Some(name) => name.to_string(),
            None => artifact_file_name(&request_url)
                .ok_or_else(|| Error::InvalidUrl(url.to_string()))?,
        };
        let path = dest_dir.join(file_name);

        request_url
            .query_pairs_mut()
            .append_pair(TOKEN_PARAM, self.token());

        debug!("Downloading {} to {}", url, path.display());
        let response = self
            .client
            .get(request_url)
            .send()
            .map_err(reqwest::Error::without_url)?;
        let response = check_status(response, url)?;

        let written = stream_to_file(response, &path)?;
        info!("Downloaded {} ({} bytes)", path.display(), written);
        Ok(path)
    }
}

/// Last non-empty path segment of an artifact URL.
fn artifact_file_name(url: &Url) -> Option<String> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

/// Writes `reader` to `path`. A partially written file is removed on error.
fn stream_to_file<R: Read>(reader: R, path: &Path) -> Result<usize> {
    let mut file = File::create(path)?;
    match copy_chunks(reader, &mut file) {
        Ok(written) => Ok(written),
        Err(e) => {
            drop(file);
            if let Err(remove) = fs::remove_file(path) {
                warn!("Failed to remove {}: {}", path.display(), remove);
            }
            Err(e)
        }
    }
}

fn copy_chunks<R: Read>(mut reader: R, file: &mut File) -> Result<usize> {
    let mut buffer = [0; CHUNK_SIZE];
    let mut written = 0;
    loop {
        match reader.read(&mut buffer).map_err(body_error)? {
            0 => break, // EOF
            n => {
                file.write_all(&buffer[..n])?;
                written += n;
            }
        }
    }
    file.flush()?;
    Ok(written)
}

/// Response bodies report failures as `io::Error` wrapping the request
/// error, which still holds the tokenized URL.
fn body_error(err: io::Error) -> Error {
    if !err.get_ref().is_some_and(|inner| inner.is::<reqwest::Error>()) {
        return Error::IO(err);
    }
    let kind = err.kind();
    match err.into_inner().map(|inner| inner.downcast::<reqwest::Error>()) {
        Some(Ok(e)) => Error::Http((*e).without_url()),
        Some(Err(other)) => Error::IO(io::Error::new(kind, other)),
        None => Error::IO(kind.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_last_url_segment() {
        let url = Url::parse("https://circleci.com/gh/acme/widgets/7/artifacts/0/report.xml")
            .unwrap();
        assert_eq!(artifact_file_name(&url).as_deref(), Some("report.xml"));

        let url = Url::parse("https://example.com/artifacts/coverage/").unwrap();
        assert_eq!(artifact_file_name(&url).as_deref(), Some("coverage"));

        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(artifact_file_name(&url), None);
    }

    #[test]
    fn streams_more_than_one_chunk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        let data = vec![7u8; CHUNK_SIZE * 3 + 17];

        let written = stream_to_file(data.as_slice(), &path).unwrap();

        assert_eq!(written, data.len());
        assert_eq!(std::fs::read(&path).unwrap(), data);
    }

    /// Yields one chunk, then fails.
    struct BrokenReader {
        sent: bool,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.sent {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            self.sent = true;
            buf[..4].copy_from_slice(b"part");
            Ok(4)
        }
    }

    #[test]
    fn failed_stream_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.bin");

        let err = stream_to_file(BrokenReader { sent: false }, &path).unwrap_err();

        assert!(matches!(err, Error::IO(ref e) if e.kind() == io::ErrorKind::ConnectionReset));
        assert!(!path.exists());
    }
}
