//! Parameter types for tool invocations.
//!
//! These structs describe *what* to produce, not *how* the command line looks.
//! They are the interface between callers of [`Thumbs`](super::Thumbs) and the
//! [`arguments`](super::arguments) module, which turns them into an argv.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 90). Clamped on construction.
//! - [`Orientation`] — Automatic EXIF orientation or a forced rotation, never both.
//! - [`ThumbnailOptions`] — Box size, quality, orientation for a cropped-to-fill thumbnail.
//! - [`ScaleOptions`] — Bounding box, quality, orientation for an aspect-preserving resize.
//! - [`GifParams`] — Ordered frames, destination, delay and optional timestamp for an animation.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

/// Thumbnail edge used when no size is given.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// How the output is rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Read the embedded orientation tag and rotate accordingly.
    #[default]
    Auto,
    /// Rotate by a fixed number of degrees, ignoring embedded metadata.
    Rotate(i32),
}

impl Orientation {
    /// Map an `auto_rotate` flag plus forced degrees onto an [`Orientation`].
    ///
    /// The degrees are only used when `auto_rotate` is false.
    pub fn from_flags(auto_rotate: bool, rotate_degrees: i32) -> Self {
        if auto_rotate {
            Self::Auto
        } else {
            Self::Rotate(rotate_degrees)
        }
    }
}

/// Options for a thumbnail that exactly fills `width` x `height`.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailOptions {
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
    pub orientation: Orientation,
    /// Overrides the configured timeout for this call.
    pub timeout: Option<Duration>,
}

impl ThumbnailOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            quality: Quality::default(),
            orientation: Orientation::default(),
            timeout: None,
        }
    }

    /// Square thumbnail of `size` x `size`.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self::square(DEFAULT_THUMBNAIL_SIZE)
    }
}

/// Options for an image scaled to fit inside `width` x `height`.
///
/// There is no `Default`: both bounds must be chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleOptions {
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
    pub orientation: Orientation,
    pub timeout: Option<Duration>,
}

impl ScaleOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            quality: Quality::default(),
            orientation: Orientation::default(),
            timeout: None,
        }
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Parameters for assembling an animated GIF.
#[derive(Debug, Clone, PartialEq)]
pub struct GifParams {
    /// Frames, in output order. Only the first frame of each file is used.
    pub sources: Vec<PathBuf>,
    pub destination: PathBuf,
    /// Delay between frames in hundredths of a second.
    pub delay: u32,
    /// Access and modification time stamped onto the destination afterwards.
    pub timestamp: Option<SystemTime>,
    pub timeout: Option<Duration>,
}

impl GifParams {
    pub fn new(
        sources: impl IntoIterator<Item = impl Into<PathBuf>>,
        destination: impl Into<PathBuf>,
        delay: u32,
    ) -> Self {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            destination: destination.into(),
            delay,
            timestamp: None,
            timeout: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
