//! Placeholder SVG generation from positional path segments.

use percent_encoding::percent_decode_str;
use quick_xml::escape::escape;

/// MIME type of the generated document.
pub const CONTENT_TYPE: &str = "image/svg+xml";

/// Placeholders never change for a given path, so they are cacheable for a year.
pub const CACHE_CONTROL: &str = "public, max-age=31536000";

const DEFAULT_WIDTH: &str = "150";
const DEFAULT_HEIGHT: &str = "150";
const DEFAULT_BACKGROUND: &str = "3b82f6";
const DEFAULT_FOREGROUND: &str = "ffffff";
const DEFAULT_LABEL: &str = "IMG";

/// Parameters of a placeholder image.
///
/// Values are kept verbatim: width and height are not checked to be numeric,
/// colors are hex strings without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Declared width.
    pub width: String,
    /// Declared height.
    pub height: String,
    /// Background color, hex without `#`.
    pub background: String,
    /// Label color, hex without `#`.
    pub foreground: String,
    /// Centered label.
    pub label: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl Placeholder {
    /// Build from ordered segments `width/height/background/foreground/label`.
    ///
    /// Missing or empty segments take their default; anything past the fifth is ignored.
    #[must_use]
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> Self {
        let pick = |i: usize, default: &str| {
            segments
                .get(i)
                .map(|s| s.as_ref().trim())
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            width: pick(0, DEFAULT_WIDTH),
            height: pick(1, DEFAULT_HEIGHT),
            background: pick(2, DEFAULT_BACKGROUND),
            foreground: pick(3, DEFAULT_FOREGROUND),
            label: pick(4, DEFAULT_LABEL),
        }
    }

    /// Build from a raw `/`-separated path tail such as `300/200/ff0000/000000/Hello`.
    ///
    /// Each segment is percent-decoded after the split, so `a%2Fb` stays one segment.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.strip_prefix('/').unwrap_or(path);
        let segments: Vec<String> = path
            .split('/')
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();
        Self::from_segments(&segments)
    }

    /// Render the SVG document.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            concat!(
                r#"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">"#,
                "\n",
                r##"  <rect width="100%" height="100%" fill="#{bg}"/>"##,
                "\n",
                r##"  <text x="50%" y="50%" font-family="Arial, sans-serif" font-size="14" fill="#{fg}" text-anchor="middle" dy=".3em">{label}</text>"##,
                "\n",
                "</svg>",
            ),
            w = escape(self.width.as_str()),
            h = escape(self.height.as_str()),
            bg = escape(self.background.as_str()),
            fg = escape(self.foreground.as_str()),
            label = escape(self.label.as_str()),
        )
    }
}
