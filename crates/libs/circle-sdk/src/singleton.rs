//! Run the builds of a project one at a time.
//!
//! [`BuildSingleton::wait`] polls the running builds of a project, leaves
//! out the build executing the caller, and blocks until nothing else is
//! running. There is no timeout and no cancellation: callers needing
//! either must bound the call from the outside.

use std::{fmt, thread, time::Duration};

use circle_api::Project;
use tracing::{debug, info, warn};

use crate::{prelude::*, running::RunningBuilds};

/// Time between two polls.
pub const SLEEP_INTERVAL: Duration = Duration::from_secs(15);

/// Maximum number of running builds fetched per poll.
pub const PROJECT_BUILD_LIMIT: u32 = 100;

/// Environment variable CircleCI sets to the URL of the executing build.
pub const BUILD_URL_ENV: &str = "CIRCLE_BUILD_URL";

/// Blocks the calling thread between polls.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

/// [`Pause`] backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// What a completed [`BuildSingleton::wait`] did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SingletonReport {
    /// Running build queries issued.
    pub polls: usize,
    /// Pauses between queries.
    pub pauses: usize,
}

impl fmt::Display for SingletonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} poll(s), {} pause(s)", self.polls, self.pauses)
    }
}

/// Serializes the builds of a project.
pub struct BuildSingleton<S, P = ThreadSleep> {
    source: S,
    pause: P,
    /// URL of the build executing this process, when known.
    current_build: Option<String>,
    interval: Duration,
    limit: u32,
}

impl<S: RunningBuilds> BuildSingleton<S> {
    /// Creates a singleton that sleeps [`SLEEP_INTERVAL`] between polls.
    ///
    /// `current_build` is normally the value of [`BUILD_URL_ENV`]. When it
    /// is `None` every running build counts, including the caller's own.
    pub fn new(source: S, current_build: Option<String>) -> Self {
        Self {
            source,
            pause: ThreadSleep,
            current_build,
            interval: SLEEP_INTERVAL,
            limit: PROJECT_BUILD_LIMIT,
        }
    }
}

impl<S: RunningBuilds, P: Pause> BuildSingleton<S, P> {
    /// Replaces the way the singleton waits between polls.
    pub fn with_pause<Q: Pause>(self, pause: Q) -> BuildSingleton<S, Q> {
        BuildSingleton {
            source: self.source,
            pause,
            current_build: self.current_build,
            interval: self.interval,
            limit: self.limit,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Running builds of `project` other than the current one.
    pub fn other_builds(&self, project: &Project) -> Result<Vec<String>> {
        let mut builds = self.source.running_builds(project, self.limit)?;

        match &self.current_build {
            Some(current) => {
                let before = builds.len();
                builds.retain(|build| build != current);
                if builds.len() == before {
                    debug!("{} is not among the running builds of {}", current, project);
                }
            }
            None => warn!(
                "{} was not found. You may be running this outside of a CircleCI build.",
                BUILD_URL_ENV
            ),
        }

        if !builds.is_empty() {
            info!("{:?}", builds);
        }
        Ok(builds)
    }

    /// Blocks until no other build of `project` is running.
    ///
    /// Every poll issues a fresh query. API failures end the wait and are
    /// returned; builds still running are not an error.
    pub fn wait(&mut self, project: &Project) -> Result<SingletonReport> {
        let mut report = SingletonReport::default();
        loop {
            let builds = self.other_builds(project)?;
            report.polls += 1;
            if builds.is_empty() {
                break;
            }
            info!(
                "found running builds, sleeping for {} seconds.",
                self.interval.as_secs()
            );
            self.pause.pause(self.interval);
            report.pauses += 1;
        }
        info!("no running builds found, beginning execution.");
        Ok(report)
    }
}
