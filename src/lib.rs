//! # Magick Thumbs
//!
//! Thumbnails, scaled copies, GIF animations and dominant colors, produced by
//! the ImageMagick `convert` tool running as a subprocess.
//!
//! ```no_run
//! use magick_thumbs::{ThumbnailOptions, Thumbs, ThumbsConfig};
//!
//! # async fn demo() -> Result<(), magick_thumbs::ToolError> {
//! let thumbs = Thumbs::new(ThumbsConfig::default());
//! thumbs
//!     .generate_thumbnail("photo.jpg", "thumb.jpg", &ThumbnailOptions::square(256))
//!     .await?;
//! if let Some(color) = thumbs.dominant_color("photo.jpg").await? {
//!     println!("dominant color {color}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | [`ThumbsConfig`]: tool binary and default timeout, TOML loading |
//! | [`imaging`] | Argument building, process execution, color parsing, the [`Thumbs`] service |
//!
//! # Design Decisions
//!
//! ## No Shell
//!
//! Every invocation is a program plus a discrete argument vector passed to
//! `tokio::process::Command`. No shell parses the line, so metacharacters in
//! file names (`;`, backticks, `$(...)`) are inert. Relative paths are also
//! anchored with `./` so ImageMagick cannot mistake them for options or coder
//! prefixes.
//!
//! ## Explicit Configuration
//!
//! The tool path and default timeout live in a [`ThumbsConfig`] owned by each
//! [`Thumbs`] value. There is no global setting to race on; switching tools
//! means constructing another service.
//!
//! ## One Process Per Call
//!
//! Each operation spawns exactly one child and awaits it under a wall-clock
//! budget (20 s unless configured or overridden per call). On expiry the child
//! is killed and the call fails with [`ToolError::Timeout`]. There are no
//! retries, no queues and no locks; concurrent calls are independent.
//!
//! ## Tolerant Color Parsing
//!
//! [`Thumbs::dominant_color`] returns `Ok(None)` when the tool succeeds but
//! prints something that is not an `(r,g,b)` tuple. The event is logged at
//! `warn` level through `tracing`; callers treat a missing color as a normal
//! outcome.

pub mod config;
pub mod imaging;

pub use config::{ConfigError, ThumbsConfig, load_config};
pub use imaging::{
    CommandRunner, GifParams, Orientation, ProcessRunner, Quality, Rgb, ScaleOptions,
    ThumbnailOptions, Thumbs, ToolError, ToolOutput,
};
