//! Dominant color value and the parser for the tool's pixel output.

use std::fmt;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse output such as `srgb(12,34,56)` into an [`Rgb`].
///
/// Takes the text between the first `(` and the last `)` and expects exactly
/// three comma-separated components. Each component is read leniently:
/// surrounding whitespace is ignored and only the leading digits count, so
/// `254.7` reads as 254. Components outside 0..=255 or without any leading
/// digit make the whole parse fail.
///
/// Returns `None` for anything that does not have that shape.
pub fn parse_pixel_output(output: &str) -> Option<Rgb> {
    let open = output.find('(')?;
    let close = output.rfind(')')?;
    let inner = output.get(open + 1..close)?;

    let components: Vec<&str> = inner.split(',').collect();
    let [r, g, b] = components.as_slice() else {
        return None;
    };

    Some(Rgb {
        r: parse_component(r)?,
        g: parse_component(g)?,
        b: parse_component(b)?,
    })
}

fn parse_component(text: &str) -> Option<u8> {
    let text = text.trim();
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text, |end| &text[..end]);
    digits.parse().ok()
}
