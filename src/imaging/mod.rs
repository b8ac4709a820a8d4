//! Image operations delegated to the ImageMagick command-line tool.
//!
//! | Operation | Tool flags |
//! |---|---|
//! | **Thumbnail** | `-thumbnail WxH^ -gravity center -crop WxH+0+0 +repage` |
//! | **Scaled** | `-resize WxH`, written through the `png:` coder |
//! | **GIF** | `-delay D <frames...> -loop 0` |
//! | **Dominant color** | `-scale 1x1! -format srgb(%[fx:...],...) info:-` |
//!
//! The module is split into:
//! - **Arguments**: Pure functions building the argv for each operation (unit testable)
//! - **Parameters**: Data structures describing each request
//! - **Color**: [`Rgb`] and the tolerant pixel-output parser
//! - **Backend**: [`CommandRunner`] trait + [`ProcessRunner`]
//! - **Operations**: The [`Thumbs`] service combining arguments + runner

pub mod arguments;
pub mod backend;
pub mod color;
pub mod operations;
mod params;
pub mod process_runner;

pub use backend::{CommandRunner, ToolError, ToolOutput};
pub use color::{Rgb, parse_pixel_output};
pub use operations::Thumbs;
pub use params::{
    DEFAULT_THUMBNAIL_SIZE, GifParams, Orientation, Quality, ScaleOptions, ThumbnailOptions,
};
pub use process_runner::ProcessRunner;
