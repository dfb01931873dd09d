use std::io::Cursor;

use base64::Engine;
use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};

use crate::error::QrResult;
use crate::matrix::EcLevel;

// Shape
//------------------------------------------------------------------------------

/// How a single dark module is drawn. A closed set dispatched through one
/// geometry function; not an open plugin surface.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    #[default]
    Square,
    Circle,
    Diamond,
    Rounded,
}

// Gradient
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientAxis {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// Two-stop linear gradient. When configured it overrides both the base and
/// finder colors for every dark cell.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub axis: GradientAxis,
}

impl Gradient {
    pub fn new(from: impl Into<String>, to: impl Into<String>, axis: GradientAxis) -> Self {
        Self { from: from.into(), to: to.into(), axis }
    }
}

// Logo
//------------------------------------------------------------------------------

/// Centered square overlay drawn on top of the modules. Choosing a size small
/// enough to stay within the symbol's error correction budget is the caller's
/// responsibility.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Logo {
    /// Value for the SVG image `href`: a URL or a data URI.
    pub href: String,
    /// Side length in pixels.
    pub size: f32,
}

impl Logo {
    pub const DEFAULT_SIZE: f32 = 40.0;

    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into(), size: Self::DEFAULT_SIZE }
    }

    pub fn with_size(href: impl Into<String>, size: f32) -> Self {
        Self { href: href.into(), size }
    }

    /// Embeds a decoded image directly into the drawing as a base64 PNG data
    /// URI, so the output document has no external references.
    pub fn from_image(img: &DynamicImage, size: f32) -> QrResult<Self> {
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&png);
        Ok(Self { href: format!("data:image/png;base64,{encoded}"), size })
    }
}

// Render style
//------------------------------------------------------------------------------

/// Complete per-symbol presentation configuration. Immutable during one
/// render; changing any field other than `ec_level` must not trigger
/// re-encoding of the module matrix.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrStyle {
    /// Overall drawing side length in pixels.
    pub size: f32,
    /// Base foreground color for dark modules.
    pub color: String,
    pub background_color: String,
    pub ec_level: EcLevel,
    pub shape: Shape,
    /// Corner radius for [`Shape::Rounded`]; ignored by other shapes.
    pub corner_radius: f32,
    /// Overrides `color` for modules inside the three finder zones.
    pub finder_color: Option<String>,
    /// Corner radius applied to finder-zone modules of rect-drawn shapes.
    pub finder_radius: f32,
    pub gradient: Option<Gradient>,
    pub logo: Option<Logo>,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            size: 200.0,
            color: "black".into(),
            background_color: "white".into(),
            ec_level: EcLevel::M,
            shape: Shape::Square,
            corner_radius: 4.0,
            finder_color: None,
            finder_radius: 0.0,
            gradient: None,
            logo: None,
        }
    }
}

impl QrStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&mut self, size: f32) -> &mut Self {
        self.size = size;
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.color = color.into();
        self
    }

    pub fn background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.background_color = color.into();
        self
    }

    pub fn ec_level(&mut self, level: EcLevel) -> &mut Self {
        self.ec_level = level;
        self
    }

    pub fn shape(&mut self, shape: Shape) -> &mut Self {
        self.shape = shape;
        self
    }

    pub fn corner_radius(&mut self, radius: f32) -> &mut Self {
        self.corner_radius = radius;
        self
    }

    pub fn finder_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.finder_color = Some(color.into());
        self
    }

    pub fn finder_radius(&mut self, radius: f32) -> &mut Self {
        self.finder_radius = radius;
        self
    }

    pub fn gradient(&mut self, gradient: Gradient) -> &mut Self {
        self.gradient = Some(gradient);
        self
    }

    pub fn logo(&mut self, logo: Logo) -> &mut Self {
        self.logo = Some(logo);
        self
    }
}

#[cfg(test)]
mod style_tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_surface() {
        let style = QrStyle::default();
        assert_eq!(style.size, 200.0);
        assert_eq!(style.color, "black");
        assert_eq!(style.background_color, "white");
        assert_eq!(style.ec_level, EcLevel::M);
        assert_eq!(style.shape, Shape::Square);
        assert_eq!(style.corner_radius, 4.0);
        assert_eq!(style.finder_radius, 0.0);
        assert!(style.finder_color.is_none());
        assert!(style.gradient.is_none());
        assert!(style.logo.is_none());
    }

    #[test]
    fn test_builder_setters_chain() {
        let mut style = QrStyle::new();
        style
            .size(320.0)
            .shape(Shape::Rounded)
            .corner_radius(6.0)
            .finder_color("#1a73e8")
            .gradient(Gradient::new("#ff0000", "#0000ff", GradientAxis::Horizontal));
        assert_eq!(style.size, 320.0);
        assert_eq!(style.shape, Shape::Rounded);
        assert_eq!(style.finder_color.as_deref(), Some("#1a73e8"));
        assert_eq!(style.gradient.as_ref().unwrap().axis, GradientAxis::Horizontal);
    }

    #[test]
    fn test_logo_from_image_yields_data_uri() {
        let img = DynamicImage::new_rgba8(4, 4);
        let logo = Logo::from_image(&img, 32.0).unwrap();
        assert!(logo.href.starts_with("data:image/png;base64,"));
        assert_eq!(logo.size, 32.0);
    }
}
