//! Deterministic SVG placeholder images.

use std::str::FromStr;

pub const DEFAULT_SIZE: u32 = 400;
pub const CONTENT_TYPE: &str = "image/svg+xml";
pub const CACHE_CONTROL: &str = "public, max-age=31536000";

const SCREENSHOT_SUFFIXES: [&str; 4] = [".com", ".org", ".net", ".io"];

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PlaceholderKind {
    Avatar,
    CompanyLogo,
    Screenshot,
    #[strum(disabled)]
    Other,
}

impl PlaceholderKind {
    pub fn parse(kind: &str) -> Self {
        Self::from_str(kind).unwrap_or(Self::Other)
    }

    pub fn background(&self) -> &'static str {
        match self {
            PlaceholderKind::Avatar => "#3b82f6",
            PlaceholderKind::CompanyLogo => "#1f2937",
            PlaceholderKind::Screenshot => "#f3f4f6",
            PlaceholderKind::Other => "#e5e7eb",
        }
    }

    /// Text drawn in the middle of the image.
    pub fn label(&self, identifier: Option<&str>) -> String {
        let identifier = identifier.filter(|i| !i.is_empty());
        match (self, identifier) {
            (PlaceholderKind::Avatar, Some(id)) => id
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
            (PlaceholderKind::Avatar, None) => "A".to_string(),
            (PlaceholderKind::CompanyLogo, Some(id)) => {
                id.split('-').next().unwrap_or_default().to_uppercase()
            }
            (PlaceholderKind::CompanyLogo, None) => "LOGO".to_string(),
            (PlaceholderKind::Screenshot, Some(id)) => SCREENSHOT_SUFFIXES
                .iter()
                .find_map(|suffix| id.strip_suffix(suffix))
                .unwrap_or(id)
                .to_uppercase(),
            (PlaceholderKind::Screenshot, None) => "SITE".to_string(),
            (PlaceholderKind::Other, _) => "Image".to_string(),
        }
    }
}

/// A rendered placeholder: dimensions, colour and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub width: u32,
    pub height: u32,
    pub text: String,
}

impl Placeholder {
    /// Avatars are square, everything else is 60% as tall as it is wide.
    /// A missing, zero or unparseable size falls back to [`DEFAULT_SIZE`].
    pub fn new(kind: &str, identifier: Option<&str>, size: Option<&str>) -> Self {
        let kind = PlaceholderKind::parse(kind);
        let width = size.and_then(parse_size).unwrap_or(DEFAULT_SIZE);
        let height = match kind {
            PlaceholderKind::Avatar => width,
            _ => (u64::from(width) * 3 / 5) as u32,
        };

        Self {
            kind,
            width,
            height,
            text: kind.label(identifier),
        }
    }

    pub fn font_size(&self) -> f64 {
        f64::from(self.width.min(self.height)) / 8.0
    }

    pub fn to_svg(&self) -> String {
        format!(
            concat!(
                "<svg width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
                "  <rect width=\"100%\" height=\"100%\" fill=\"{fill}\"/>\n",
                "  <text x=\"50%\" y=\"50%\" text-anchor=\"middle\" dominant-baseline=\"middle\" ",
                "fill=\"white\" font-family=\"Arial, sans-serif\" font-size=\"{font_size}\" ",
                "font-weight=\"bold\">{text}</text>\n",
                "</svg>\n"
            ),
            width = self.width,
            height = self.height,
            fill = self.kind.background(),
            font_size = self.font_size(),
            text = escape_xml(&self.text),
        )
    }
}

/// Leading digits only, so `"200px"` reads as 200.
fn parse_size(size: &str) -> Option<u32> {
    let digits: String = size
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().filter(|&n| n > 0)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar() {
        let placeholder = Placeholder::new("avatar", Some("bob"), Some("200"));
        assert_eq!(placeholder.width, 200);
        assert_eq!(placeholder.height, 200);
        assert_eq!(placeholder.text, "B");

        let svg = placeholder.to_svg();
        assert!(svg.contains("width=\"200\" height=\"200\""));
        assert!(svg.contains("fill=\"#3b82f6\""));
        assert!(svg.contains("font-size=\"25\""));
        assert!(svg.contains(">B</text>"));
    }

    #[test]
    fn test_company_logo_defaults() {
        let placeholder = Placeholder::new("company-logo", Some("tech-corp"), None);
        assert_eq!(placeholder.width, 400);
        assert_eq!(placeholder.height, 240);
        assert_eq!(placeholder.text, "TECH");

        let svg = placeholder.to_svg();
        assert!(svg.contains("fill=\"#1f2937\""));
        assert!(svg.contains("font-size=\"30\""));
        assert!(svg.contains(">TECH</text>"));
    }

    #[test]
    fn test_screenshot_strips_tld() {
        assert_eq!(
            Placeholder::new("screenshot", Some("example.io"), None).text,
            "EXAMPLE"
        );
        assert_eq!(
            Placeholder::new("screenshot", Some("example.dev"), None).text,
            "EXAMPLE.DEV"
        );
        assert_eq!(Placeholder::new("screenshot", None, None).text, "SITE");
    }

    #[test]
    fn test_unknown_kind() {
        let placeholder = Placeholder::new("banner", Some("x"), Some("100"));
        assert_eq!(placeholder.kind, PlaceholderKind::Other);
        assert_eq!(placeholder.text, "Image");
        assert_eq!(placeholder.height, 60);
        assert!(placeholder.to_svg().contains("fill=\"#e5e7eb\""));
    }

    #[test]
    fn test_defaults_without_identifier() {
        assert_eq!(Placeholder::new("avatar", None, None).text, "A");
        assert_eq!(Placeholder::new("company-logo", None, None).text, "LOGO");
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!(Placeholder::new("avatar", None, Some("150px")).width, 150);
        assert_eq!(Placeholder::new("avatar", None, Some("huge")).width, DEFAULT_SIZE);
        assert_eq!(Placeholder::new("avatar", None, Some("0")).width, DEFAULT_SIZE);
        assert_eq!(Placeholder::new("company-logo", None, Some("333")).height, 199);
    }

    #[test]
    fn test_label_is_escaped() {
        let svg = Placeholder::new("company-logo", Some("<script>"), None).to_svg();
        assert!(svg.contains("&lt;SCRIPT&gt;"));
        assert!(!svg.contains("<SCRIPT>"));
    }
}
