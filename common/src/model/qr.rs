use serde::{Deserialize, Serialize};

/// Governs how the dark modules of a QR code are painted.
///
/// Styling changes presentation only: every variant is rendered from the
/// same module matrix, so a scanner always decodes the same payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrStyle {
    /// Plain filled squares, rendered exactly as encoded.
    #[default]
    Standard,
    /// Rounded-corner squares.
    Rounded,
    /// Filled circles inscribed in the module cell.
    Dot,
    /// Squares retained only inside a centered circular mask. Meant to be
    /// combined with a circular border.
    Circular,
    /// Plain filled squares (alias kept for template compatibility).
    Square,
}

impl QrStyle {
    /// Parses a style name, falling back to `Standard` for anything
    /// unrecognized rather than failing the render.
    pub fn parse(value: &str) -> QrStyle {
        match value.to_ascii_lowercase().as_str() {
            "rounded" => QrStyle::Rounded,
            "dot" => QrStyle::Dot,
            "circular" => QrStyle::Circular,
            "square" => QrStyle::Square,
            _ => QrStyle::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QrStyle::Standard => "standard",
            QrStyle::Rounded => "rounded",
            QrStyle::Dot => "dot",
            QrStyle::Circular => "circular",
            QrStyle::Square => "square",
        }
    }
}

/// Shape of the optional border stroke drawn behind the modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrBorderShape {
    #[default]
    Rectangle,
    Rounded,
    Circle,
}

impl QrBorderShape {
    pub fn parse(value: &str) -> QrBorderShape {
        match value.to_ascii_lowercase().as_str() {
            "rounded" => QrBorderShape::Rounded,
            "circle" => QrBorderShape::Circle,
            _ => QrBorderShape::Rectangle,
        }
    }
}

/// Optional border around the code, drawn before the modules so the
/// modules layer on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrBorder {
    pub shape: QrBorderShape,
    /// Stroke color as a `#RRGGBB` hex string.
    pub color: String,
    /// Stroke width in pixels.
    pub width: u32,
}

/// Value object describing one QR render request.
///
/// `size` is the edge length of the produced square image and must be
/// greater than zero. Invalid hex colors fall back to black on white.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrStyleOptions {
    pub style: QrStyle,
    pub size: u32,
    pub dark: String,
    pub light: String,
    pub border: Option<QrBorder>,
}

impl Default for QrStyleOptions {
    fn default() -> Self {
        QrStyleOptions {
            style: QrStyle::Standard,
            size: 256,
            dark: "#000000".to_string(),
            light: "#FFFFFF".to_string(),
            border: None,
        }
    }
}

impl QrStyleOptions {
    /// Rejects geometrically impossible renders before any encoding work.
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("QR size must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_style_falls_back_to_standard() {
        assert_eq!(QrStyle::parse("hexagonal"), QrStyle::Standard);
        assert_eq!(QrStyle::parse(""), QrStyle::Standard);
        assert_eq!(QrStyle::parse("DOT"), QrStyle::Dot);
    }

    #[test]
    fn zero_size_is_invalid() {
        let options = QrStyleOptions {
            size: 0,
            ..QrStyleOptions::default()
        };
        assert!(options.validate().is_err());
        assert!(QrStyleOptions::default().validate().is_ok());
    }
}
