//! Argument vectors for the external tool.
//!
//! All functions here are pure and testable without spawning anything. The
//! returned vectors are handed straight to the process API, so no shell ever
//! parses them and paths need no quoting.

use super::params::{GifParams, Orientation, ScaleOptions, ThumbnailOptions};
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

/// Anchor a relative path with `./`.
///
/// ImageMagick treats a leading `-` as an option and `name:` as a coder
/// prefix (`msl:`, `ephemeral:`, ...). Anchoring keeps both inside a plain
/// filename. Absolute paths and paths already starting with `.`/`..` are
/// returned unchanged.
pub fn anchor_path(path: &Path) -> PathBuf {
    match path.components().next() {
        Some(Component::Normal(_)) => Path::new(".").join(path),
        _ => path.to_path_buf(),
    }
}

/// `<path>[0]`: only the first frame/page of the source is read.
pub fn first_frame(path: &Path) -> OsString {
    let mut arg = anchor_path(path).into_os_string();
    arg.push("[0]");
    arg
}

/// Destination with a coder prefix that forces the output format.
fn forced_format(format: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(format);
    arg.push(":");
    arg.push(anchor_path(path));
    arg
}

fn orientation_args(orientation: Orientation) -> Vec<OsString> {
    match orientation {
        Orientation::Auto => vec!["-auto-orient".into()],
        Orientation::Rotate(degrees) => vec!["-rotate".into(), degrees.to_string().into()],
    }
}

/// Resize to fill `width` x `height`, center-crop the overflow, drop the
/// virtual canvas, orient, then write.
pub fn thumbnail_args(
    source: &Path,
    destination: &Path,
    options: &ThumbnailOptions,
) -> Vec<OsString> {
    let (w, h) = (options.width, options.height);
    let mut args: Vec<OsString> = vec![
        first_frame(source),
        "-quality".into(),
        options.quality.value().to_string().into(),
        "-thumbnail".into(),
        format!("{w}x{h}^").into(),
        "-gravity".into(),
        "center".into(),
        "-crop".into(),
        format!("{w}x{h}+0+0").into(),
        "+repage".into(),
    ];
    args.extend(orientation_args(options.orientation));
    args.push(anchor_path(destination).into_os_string());
    args
}

/// Fit inside `width` x `height` keeping the aspect ratio, always as PNG.
pub fn scaled_args(source: &Path, destination: &Path, options: &ScaleOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        first_frame(source),
        "-quality".into(),
        options.quality.value().to_string().into(),
        "-resize".into(),
        format!("{}x{}", options.width, options.height).into(),
    ];
    args.extend(orientation_args(options.orientation));
    args.push(forced_format("png", destination));
    args
}

/// Every source's first frame in order, looping forever.
pub fn gif_args(params: &GifParams) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-delay".into(), params.delay.to_string().into()];
    args.extend(params.sources.iter().map(|source| first_frame(source)));
    args.push("-loop".into());
    args.push("0".into());
    args.push(anchor_path(&params.destination).into_os_string());
    args
}

/// Prints the single pixel as `srgb(r,g,b)` with 0-255 integers.
///
/// `%[pixel:u]` would print a color name (`red`, `white`) for exact matches
/// and percentages for high-depth sources, so each channel is formatted
/// through `fx` instead.
pub const PIXEL_FORMAT: &str =
    "srgb(%[fx:int(255*r+.5)],%[fx:int(255*g+.5)],%[fx:int(255*b+.5)])";

/// Average the whole image into one pixel and print it to stdout.
pub fn dominant_color_args(source: &Path) -> Vec<OsString> {
    vec![
        first_frame(source),
        "-scale".into(),
        "1x1!".into(),
        "-format".into(),
        PIXEL_FORMAT.into(),
        "info:-".into(),
    ]
}

/// Render a command line for log output. Not meant to be re-parsed.
pub fn display_command(program: &OsStr, args: &[OsString]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(OsString::as_os_str))
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::params::Quality;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    // =========================================================================
    // Path handling
    // =========================================================================

    #[test]
    fn anchor_leaves_absolute_paths_alone() {
        assert_eq!(anchor_path(Path::new("/tmp/a.jpg")), Path::new("/tmp/a.jpg"));
    }

    #[test]
    fn anchor_prefixes_relative_paths() {
        assert_eq!(anchor_path(Path::new("a.jpg")), Path::new("./a.jpg"));
        assert_eq!(anchor_path(Path::new("-rf")), Path::new("./-rf"));
        assert_eq!(anchor_path(Path::new("msl:evil")), Path::new("./msl:evil"));
    }

    #[test]
    fn anchor_keeps_dot_relative_paths() {
        assert_eq!(anchor_path(Path::new("./a.jpg")), Path::new("./a.jpg"));
        assert_eq!(anchor_path(Path::new("../a.jpg")), Path::new("../a.jpg"));
    }

    #[test]
    fn first_frame_appends_index() {
        assert_eq!(first_frame(Path::new("/p/x.tif")), "/p/x.tif[0]");
    }

    #[test]
    fn metacharacters_stay_in_one_argument() {
        let nasty = Path::new("/tmp/a; rm -rf / `id` $(x).jpg");
        let args = dominant_color_args(nasty);
        assert_eq!(args[0], "/tmp/a; rm -rf / `id` $(x).jpg[0]");
        assert_eq!(args.len(), 6);
    }

    // =========================================================================
    // Per-operation argument shapes
    // =========================================================================

    #[test]
    fn thumbnail_default_arguments() {
        let args = thumbnail_args(
            Path::new("/in.jpg"),
            Path::new("/out.jpg"),
            &ThumbnailOptions::default(),
        );
        assert_eq!(
            strings(&args),
            [
                "/in.jpg[0]",
                "-quality",
                "90",
                "-thumbnail",
                "256x256^",
                "-gravity",
                "center",
                "-crop",
                "256x256+0+0",
                "+repage",
                "-auto-orient",
                "/out.jpg",
            ]
        );
    }

    #[test]
    fn thumbnail_forced_rotation_replaces_auto_orient() {
        let opts = ThumbnailOptions::new(400, 300)
            .with_quality(Quality::new(75))
            .with_orientation(Orientation::Rotate(90));
        let args = strings(&thumbnail_args(
            Path::new("/in.jpg"),
            Path::new("/out.jpg"),
            &opts,
        ));

        assert!(args.contains(&"400x300^".to_string()));
        assert!(args.contains(&"400x300+0+0".to_string()));
        assert!(args.contains(&"75".to_string()));
        assert!(!args.contains(&"-auto-orient".to_string()));
        let rotate = args.iter().position(|a| a == "-rotate").unwrap();
        assert_eq!(args[rotate + 1], "90");
    }

    #[test]
    fn scaled_forces_png_output() {
        let args = scaled_args(
            Path::new("/in.jpg"),
            Path::new("/out.jpg"),
            &ScaleOptions::new(800, 600),
        );
        assert_eq!(
            strings(&args),
            [
                "/in.jpg[0]",
                "-quality",
                "90",
                "-resize",
                "800x600",
                "-auto-orient",
                "png:/out.jpg",
            ]
        );
    }

    #[test]
    fn scaled_relative_destination_is_anchored_after_prefix() {
        let args = scaled_args(
            Path::new("in.jpg"),
            Path::new("-"),
            &ScaleOptions::new(10, 10),
        );
        assert_eq!(args.last().unwrap(), "png:./-");
    }

    #[test]
    fn gif_lists_frames_in_order() {
        let params = GifParams::new(["/c.jpg", "/a.jpg", "/b.jpg"], "/anim.gif", 40);
        assert_eq!(
            strings(&gif_args(&params)),
            [
                "-delay",
                "40",
                "/c.jpg[0]",
                "/a.jpg[0]",
                "/b.jpg[0]",
                "-loop",
                "0",
                "/anim.gif",
            ]
        );
    }

    #[test]
    fn dominant_color_arguments() {
        assert_eq!(
            strings(&dominant_color_args(Path::new("/in.png"))),
            [
                "/in.png[0]",
                "-scale",
                "1x1!",
                "-format",
                "srgb(%[fx:int(255*r+.5)],%[fx:int(255*g+.5)],%[fx:int(255*b+.5)])",
                "info:-"
            ]
        );
    }

    #[test]
    fn pixel_format_never_asks_for_color_names() {
        assert!(!PIXEL_FORMAT.contains("pixel:"));
        assert!(PIXEL_FORMAT.starts_with("srgb("));
        assert!(PIXEL_FORMAT.ends_with(')'));
        assert_eq!(PIXEL_FORMAT.matches("%[fx:int(255*").count(), 3);
    }

    #[test]
    fn display_command_joins_program_and_args() {
        let args = vec![OsString::from("/a.jpg[0]"), OsString::from("info:-")];
        assert_eq!(
            display_command(OsStr::new("convert"), &args),
            "convert /a.jpg[0] info:-"
        );
    }
}
