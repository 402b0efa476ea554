use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Symbol(pub String);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub display_name: String,
    pub symbol: Symbol,
}

/// Companies offered by the picker, in display order.
///
/// Rows are addressed by index, so this is a plain ordered list rather than
/// a map keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
}

impl CompanyDirectory {
    #[must_use]
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            companies: entries
                .iter()
                .map(|(name, symbol)| Company {
                    display_name: (*name).to_string(),
                    symbol: Symbol::from(*symbol),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Company> {
        self.companies.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }
}

impl Default for CompanyDirectory {
    fn default() -> Self {
        Self::new(&[
            ("Apple", "AAPL"),
            ("Microsoft", "MSFT"),
            ("Google", "GOOG"),
            ("Amazon", "AMZN"),
            ("Facebook", "FB"),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub company_name: String,
    pub symbol: String,
    pub price: f64,
    pub change: f64,
}

impl Quote {
    #[must_use]
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.change)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeDirection {
    Up,
    Down,
    #[default]
    Flat,
}

impl ChangeDirection {
    #[must_use]
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

/// Renders a number the way price labels show it: shortest round-trip
/// digits, keeping a trailing `.0` on integral values.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}

#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{} $", format_number(price))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Unknown,
}

impl ImageFormat {
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(PNG_SIGNATURE) {
            Self::Png
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Self::Jpeg
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Self::Gif
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Unknown => "image",
        }
    }
}

const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub dimensions: Option<(u32, u32)>,
}

impl LogoImage {
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let format = ImageFormat::sniff(&bytes);
        let dimensions = match format {
            ImageFormat::Png => png_dimensions(&bytes),
            _ => None,
        };
        Self {
            bytes,
            format,
            dimensions,
        }
    }

    #[must_use]
    pub fn size_label(&self) -> String {
        let len = self.bytes.len();
        if len < 1024 {
            format!("{len} B")
        } else {
            format!("{:.1} KiB", len as f64 / 1024.0)
        }
    }
}

// IHDR is always the first chunk: signature(8) + length(4) + "IHDR"(4) + width(4) + height(4)
fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.get(12..16)? != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes.get(16..20)?.try_into().ok()?);
    let height = u32::from_be_bytes(bytes.get(20..24)?.try_into().ok()?);
    Some((width, height))
}

#[cfg(test)]
pub(crate) fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = PNG_SIGNATURE.to_vec();
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes
}
