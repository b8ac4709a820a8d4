//! High-level image operations.
//!
//! [`Thumbs`] combines the argument builders with a [`CommandRunner`]. Each
//! method issues exactly one tool invocation and awaits it; the service keeps
//! no mutable state, so it can be shared freely between tasks.

use super::arguments::{
    display_command, dominant_color_args, gif_args, scaled_args, thumbnail_args,
};
use super::backend::{CommandRunner, ToolError, ToolOutput};
use super::color::{Rgb, parse_pixel_output};
use super::params::{GifParams, ScaleOptions, ThumbnailOptions};
use super::process_runner::ProcessRunner;
use crate::config::ThumbsConfig;
use std::ffi::{OsStr, OsString};
use std::fs::{File, FileTimes};
#[cfg(not(unix))]
use std::fs::OpenOptions;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Thumbnail, scaling, animation and color operations backed by the tool
/// named in a [`ThumbsConfig`].
#[derive(Debug, Clone)]
pub struct Thumbs<R = ProcessRunner> {
    config: ThumbsConfig,
    runner: R,
}

impl Thumbs<ProcessRunner> {
    /// Service that spawns real processes.
    pub fn new(config: ThumbsConfig) -> Self {
        Self::with_runner(config, ProcessRunner::new())
    }
}

impl Default for Thumbs<ProcessRunner> {
    fn default() -> Self {
        Self::new(ThumbsConfig::default())
    }
}

impl<R: CommandRunner> Thumbs<R> {
    pub fn with_runner(config: ThumbsConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &ThumbsConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run the tool once; returns the rendered command line with its output.
    async fn invoke(
        &self,
        args: Vec<OsString>,
        timeout: Option<Duration>,
    ) -> Result<(String, ToolOutput)> {
        let program = OsStr::new(&self.config.convert_command);
        let timeout = timeout.unwrap_or_else(|| self.config.timeout());
        let command = display_command(program, &args);
        debug!(%command, ?timeout, "Command");
        let output = self.runner.run(program, &args, timeout).await?;
        Ok((command, output))
    }

    /// Generate a thumbnail of exactly `width` x `height`.
    ///
    /// The first frame of `source` is resized to cover the box, center-cropped,
    /// stripped of its virtual canvas, oriented and written to `destination`.
    pub async fn generate_thumbnail(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        options: &ThumbnailOptions,
    ) -> Result<()> {
        let (source, destination) = (source.as_ref(), destination.as_ref());
        debug!(
            source = %source.display(),
            destination = %destination.display(),
            ?options,
            "Generating thumbnail"
        );
        let args = thumbnail_args(source, destination, options);
        self.invoke(args, options.timeout).await?;
        Ok(())
    }

    /// Generate a PNG that fits inside `width` x `height`, keeping proportions.
    pub async fn generate_scaled(
        &self,
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        options: &ScaleOptions,
    ) -> Result<()> {
        let (source, destination) = (source.as_ref(), destination.as_ref());
        debug!(
            source = %source.display(),
            destination = %destination.display(),
            ?options,
            "Generating scaled image"
        );
        let args = scaled_args(source, destination, options);
        self.invoke(args, options.timeout).await?;
        Ok(())
    }

    /// Assemble an endlessly looping GIF from the first frame of each source.
    ///
    /// When `params.timestamp` is set, the destination's access and
    /// modification times are set to it after the tool succeeds.
    pub async fn make_gif(&self, params: &GifParams) -> Result<()> {
        debug!(
            frames = params.sources.len(),
            destination = %params.destination.display(),
            delay = params.delay,
            timestamp = ?params.timestamp,
            "Generating GIF animation"
        );
        if params.sources.is_empty() {
            return Err(ToolError::NoFrames);
        }

        self.invoke(gif_args(params), params.timeout).await?;

        match params.timestamp {
            Some(timestamp) => {
                debug!(destination = %params.destination.display(), "Setting date+time");
                set_file_times(&params.destination, timestamp).await
            }
            None => Ok(()),
        }
    }

    /// Average the whole first frame of `source` down to one pixel.
    ///
    /// Output that cannot be parsed is logged and reported as `Ok(None)`;
    /// only a failing tool is an error.
    pub async fn dominant_color(&self, source: impl AsRef<Path>) -> Result<Option<Rgb>> {
        let source = source.as_ref();
        debug!(source = %source.display(), "Determining dominant color");

        let (command, output) = self.invoke(dominant_color_args(source), None).await?;

        let color = parse_pixel_output(&output.stdout);
        if color.is_none() {
            warn!(%command, stdout = %output.stdout, "Unexpected color result");
        }
        Ok(color)
    }
}

async fn set_file_times(path: &Path, time: SystemTime) -> Result<()> {
    let target = path.to_path_buf();
    let result = tokio::task::spawn_blocking(move || {
        let file = open_for_times(&target)?;
        file.set_times(FileTimes::new().set_accessed(time).set_modified(time))
    })
    .await
    .unwrap_or_else(|join_err| Err(std::io::Error::other(join_err)));

    result.map_err(|source| ToolError::Timestamp {
        path: path.to_path_buf(),
        source,
    })
}

/// Unix only needs ownership to change times, so a read-only file works.
#[cfg(unix)]
fn open_for_times(path: &Path) -> std::io::Result<File> {
    File::open(path)
}

/// Windows needs write-attribute access on the handle.
#[cfg(not(unix))]
fn open_for_times(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).open(path)
}
