use crate::error::QrResult;
use crate::matrix::{encode, EcLevel, ModuleMatrix};
use crate::render::render_svg;
use crate::style::{Gradient, Logo, QrStyle, Shape};

// Symbol builder
//------------------------------------------------------------------------------

/// Builds one styled symbol.
///
/// ```rust
/// use qrousel::{Shape, SymbolBuilder};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let svg = SymbolBuilder::new("https://example.com")
///     .shape(Shape::Rounded)
///     .finder_color("#1a73e8")
///     .build()?
///     .to_svg();
/// # Ok(())
/// # }
/// ```
pub struct SymbolBuilder<'a> {
    text: &'a str,
    style: QrStyle,
}

impl<'a> SymbolBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, style: QrStyle::default() }
    }

    pub fn style(&mut self, style: QrStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn size(&mut self, size: f32) -> &mut Self {
        self.style.size = size;
        self
    }

    pub fn color(&mut self, color: impl Into<String>) -> &mut Self {
        self.style.color = color.into();
        self
    }

    pub fn background_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.style.background_color = color.into();
        self
    }

    pub fn ec_level(&mut self, level: EcLevel) -> &mut Self {
        self.style.ec_level = level;
        self
    }

    pub fn shape(&mut self, shape: Shape) -> &mut Self {
        self.style.shape = shape;
        self
    }

    pub fn corner_radius(&mut self, radius: f32) -> &mut Self {
        self.style.corner_radius = radius;
        self
    }

    pub fn finder_color(&mut self, color: impl Into<String>) -> &mut Self {
        self.style.finder_color = Some(color.into());
        self
    }

    pub fn finder_radius(&mut self, radius: f32) -> &mut Self {
        self.style.finder_radius = radius;
        self
    }

    pub fn gradient(&mut self, gradient: Gradient) -> &mut Self {
        self.style.gradient = Some(gradient);
        self
    }

    pub fn logo(&mut self, logo: Logo) -> &mut Self {
        self.style.logo = Some(logo);
        self
    }

    /// Encodes the text and pairs the matrix with the configured style.
    /// Encoding failure propagates; no level upgrade is attempted.
    pub fn build(&self) -> QrResult<QrSymbol> {
        let matrix = encode(self.text, self.style.ec_level)?;
        Ok(QrSymbol { matrix, style: self.style.clone() })
    }
}

// Symbol
//------------------------------------------------------------------------------

/// One encoded symbol and its presentation, ready to render any number of
/// times. The matrix is owned and never regenerated by style edits.
#[derive(Debug, Clone)]
pub struct QrSymbol {
    matrix: ModuleMatrix,
    style: QrStyle,
}

impl QrSymbol {
    pub fn matrix(&self) -> &ModuleMatrix {
        &self.matrix
    }

    pub fn style(&self) -> &QrStyle {
        &self.style
    }

    pub fn to_svg(&self) -> String {
        render_svg(&self.matrix, &self.style)
    }
}

#[cfg(test)]
mod symbol_tests {
    use super::*;

    #[test]
    fn test_build_then_render() {
        let symbol = SymbolBuilder::new("HELLO").ec_level(EcLevel::Q).build().unwrap();
        let svg = symbol.to_svg();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_style_edits_do_not_touch_matrix() {
        let a = SymbolBuilder::new("HELLO").build().unwrap();
        let b = SymbolBuilder::new("HELLO").color("#222").shape(Shape::Circle).build().unwrap();
        assert_eq!(a.matrix(), b.matrix());
    }
}
