use std::fmt::Write;

use crate::cell::{cell_fill, cell_shape, CellShape};
use crate::matrix::ModuleMatrix;
use crate::style::{GradientAxis, QrStyle};

// SVG renderer
//------------------------------------------------------------------------------

/// Renders one styled symbol to a complete SVG document.
///
/// Output is fully determined by (matrix, style): no clocks, no randomness,
/// so identical inputs produce byte-identical markup. Draw order is
/// background, gradient definition, dark modules row-major, then the logo
/// overlay.
pub fn render_svg(matrix: &ModuleMatrix, style: &QrStyle) -> String {
    let n = matrix.width();
    let cell_size = style.size / n as f32;

    let mut svg = svg_open(style);
    if let Some(gradient) = &style.gradient {
        let (x2, y2) = match gradient.axis {
            GradientAxis::Horizontal => ("100%", "0%"),
            GradientAxis::Vertical => ("0%", "100%"),
        };
        svg += "\t<defs>\n";
        let _ = writeln!(
            svg,
            "\t\t<linearGradient id=\"grad\" x1=\"0%\" y1=\"0%\" x2=\"{x2}\" y2=\"{y2}\">"
        );
        let _ = writeln!(svg, "\t\t\t<stop offset=\"0%\" stop-color=\"{}\"/>", gradient.from);
        let _ = writeln!(svg, "\t\t\t<stop offset=\"100%\" stop-color=\"{}\"/>", gradient.to);
        svg += "\t\t</linearGradient>\n\t</defs>\n";
    }

    for r in 0..n {
        for c in 0..n {
            if !matrix.get(r, c) {
                continue;
            }
            let finder = matrix.in_finder_zone(r, c);
            let fill = cell_fill(finder, style);
            match cell_shape(r, c, cell_size, finder, style) {
                CellShape::Rect { x, y, size, radius } => {
                    let _ = write!(
                        svg,
                        "\t<rect x=\"{x}\" y=\"{y}\" width=\"{size}\" height=\"{size}\""
                    );
                    if radius > 0.0 {
                        let _ = write!(svg, " rx=\"{radius}\" ry=\"{radius}\"");
                    }
                    let _ = writeln!(svg, " fill=\"{fill}\"/>");
                }
                CellShape::Circle { cx, cy, r } => {
                    let _ = writeln!(
                        svg,
                        "\t<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\"/>"
                    );
                }
                CellShape::Diamond { points } => {
                    let [(ax, ay), (bx, by), (cx, cy), (dx, dy)] = points;
                    let _ = writeln!(
                        svg,
                        "\t<polygon points=\"{ax},{ay} {bx},{by} {cx},{cy} {dx},{dy}\" fill=\"{fill}\"/>"
                    );
                }
            }
        }
    }

    if let Some(logo) = &style.logo {
        let offset = (style.size - logo.size) / 2.0;
        let _ = writeln!(
            svg,
            "\t<image href=\"{}\" x=\"{offset}\" y=\"{offset}\" width=\"{size}\" height=\"{size}\" preserveAspectRatio=\"xMidYMid slice\"/>",
            logo.href,
            size = logo.size,
        );
    }

    svg += "</svg>\n";
    tracing::debug!(width = n, bytes = svg.len(), "rendered symbol");
    svg
}

/// Background-only document for when no matrix is available yet (encoding
/// pending or failed). Renders nothing rather than a partial symbol.
pub fn placeholder_svg(style: &QrStyle) -> String {
    let mut svg = svg_open(style);
    svg += "</svg>\n";
    svg
}

fn svg_open(style: &QrStyle) -> String {
    let mut svg = String::new();
    svg += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" stroke=\"none\">",
        size = style.size,
    );
    let _ = writeln!(
        svg,
        "\t<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        style.background_color
    );
    svg
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::matrix::{encode, EcLevel};
    use crate::style::{Gradient, GradientAxis, Logo, Shape};

    fn matrix() -> crate::matrix::ModuleMatrix {
        encode("https://example.com", EcLevel::M).unwrap()
    }

    #[test]
    fn test_render_is_deterministic() {
        let matrix = matrix();
        let mut style = QrStyle::default();
        style.shape(Shape::Rounded).finder_color("#336699");
        assert_eq!(render_svg(&matrix, &style), render_svg(&matrix, &style));
    }

    #[test]
    fn test_background_precedes_cells() {
        let svg = render_svg(&matrix(), &QrStyle::default());
        let background = svg.find("fill=\"white\"").unwrap();
        let first_cell = svg.find("fill=\"black\"").unwrap();
        assert!(background < first_cell);
    }

    #[test]
    fn test_emits_one_shape_per_dark_module() {
        let matrix = matrix();
        let svg = render_svg(&matrix, &QrStyle::default());
        let rects = svg.matches("<rect").count();
        // One rect per dark module plus the background.
        assert_eq!(rects, matrix.count_dark_modules() + 1);
    }

    #[test]
    fn test_gradient_defined_once_and_referenced_everywhere() {
        let matrix = matrix();
        let mut style = QrStyle::default();
        style
            .finder_color("red")
            .gradient(Gradient::new("#ff0000", "#0000ff", GradientAxis::Horizontal));
        let svg = render_svg(&matrix, &style);
        assert_eq!(svg.matches("<linearGradient").count(), 1);
        assert_eq!(svg.matches("url(#grad)").count(), matrix.count_dark_modules());
        assert!(!svg.contains("fill=\"red\""), "gradient must override finder color");
        assert!(svg.contains("x2=\"100%\""));
    }

    #[test]
    fn test_vertical_gradient_axis() {
        let mut style = QrStyle::default();
        style.gradient(Gradient::new("#000", "#fff", GradientAxis::Vertical));
        let svg = render_svg(&matrix(), &style);
        assert!(svg.contains("x2=\"0%\" y2=\"100%\""));
    }

    #[test]
    fn test_logo_is_last_and_centered() {
        let mut style = QrStyle::default();
        style.logo(Logo::with_size("https://example.com/logo.png", 40.0));
        let svg = render_svg(&matrix(), &style);
        let image = svg.find("<image").unwrap();
        let last_cell = svg.rfind("<rect").unwrap();
        assert!(image > last_cell);
        assert!(svg.contains("x=\"80\" y=\"80\""));
    }

    #[test]
    fn test_circle_style_emits_circles() {
        let matrix = matrix();
        let mut style = QrStyle::default();
        style.shape(Shape::Circle);
        let svg = render_svg(&matrix, &style);
        assert_eq!(svg.matches("<circle").count(), matrix.count_dark_modules());
    }

    #[test]
    fn test_placeholder_is_background_only() {
        let svg = placeholder_svg(&QrStyle::default());
        assert!(svg.contains("fill=\"white\""));
        assert!(!svg.contains("fill=\"black\""));
        assert!(svg.ends_with("</svg>\n"));
    }
}
