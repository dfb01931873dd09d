use std::fmt::Write;

use serde::{Deserialize, Serialize};

// Pagination
//------------------------------------------------------------------------------

/// Which built-in indicators to draw.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationKind {
    #[default]
    Dot,
    Fraction,
    Both,
}

/// Where the indicator row sits relative to the symbol row.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

/// Built-in indicator configuration. A custom renderer on the carousel
/// bypasses all of this except `position`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub kind: PaginationKind,
    pub position: PaginationPosition,
    pub show_dots: bool,
    pub dot_size: f32,
    pub dot_color: String,
    pub active_dot_color: String,
    pub text_color: String,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            kind: PaginationKind::Dot,
            position: PaginationPosition::Bottom,
            show_dots: true,
            dot_size: 8.0,
            dot_color: "#ccc".into(),
            active_dot_color: "#000".into(),
            text_color: "#333".into(),
        }
    }
}

/// Display-only projection handed to pagination renderers.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PageView {
    pub index: usize,
    pub total: usize,
}

/// Pluggable pagination renderer; receives the projection, returns markup.
pub type PaginationRenderer = Box<dyn Fn(PageView) -> String>;

const DOT_GAP: f32 = 6.0;
const FRACTION_FONT_SIZE: f32 = 14.0;
// Estimated advance per glyph of the fraction label, used to size the
// document so the label is never clipped.
const FRACTION_CHAR_ADVANCE: f32 = 8.4;

/// Built-in renderer: a row of dots with the current one highlighted, and/or
/// a "current/total" fraction label. The document is sized to hold whatever
/// it draws, so neither indicator is ever clipped.
pub fn render_pagination(view: PageView, config: &Pagination) -> String {
    let mut out = String::new();
    let dots = config.show_dots
        && matches!(config.kind, PaginationKind::Dot | PaginationKind::Both)
        && view.total > 0;
    let fraction = matches!(config.kind, PaginationKind::Fraction | PaginationKind::Both)
        && view.total > 0;

    let label = format!("{}/{}", view.index + 1, view.total);
    let row_width = if dots {
        view.total as f32 * config.dot_size + (view.total - 1) as f32 * DOT_GAP
    } else {
        0.0
    };
    let label_width =
        if fraction { label.len() as f32 * FRACTION_CHAR_ADVANCE } else { 0.0 };
    let gap = if dots && fraction { DOT_GAP } else { 0.0 };
    let width = row_width + gap + label_width;
    let height = config.dot_size.max(FRACTION_FONT_SIZE);
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{width}\" height=\"{height}\">"
    );

    if dots {
        let r = config.dot_size / 2.0;
        for i in 0..view.total {
            let cx = i as f32 * (config.dot_size + DOT_GAP) + r;
            let fill = if i == view.index { &config.active_dot_color } else { &config.dot_color };
            let _ = writeln!(out, "\t<circle cx=\"{cx}\" cy=\"{r}\" r=\"{r}\" fill=\"{fill}\"/>");
        }
    }

    if fraction {
        let _ = writeln!(
            out,
            "\t<text x=\"{x}\" y=\"{y}\" font-size=\"{FRACTION_FONT_SIZE}\" fill=\"{color}\">{label}</text>",
            x = row_width + gap,
            y = FRACTION_FONT_SIZE,
            color = config.text_color,
        );
    }

    out += "</svg>\n";
    out
}

#[cfg(test)]
mod pagination_tests {
    use super::*;

    #[test]
    fn test_one_dot_per_item_with_active_highlight() {
        let config = Pagination::default();
        let svg = render_pagination(PageView { index: 1, total: 3 }, &config);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("fill=\"#000\"").count(), 1);
        assert_eq!(svg.matches("fill=\"#ccc\"").count(), 2);
    }

    #[test]
    fn test_fraction_is_one_based() {
        let mut config = Pagination::default();
        config.kind = PaginationKind::Fraction;
        let svg = render_pagination(PageView { index: 0, total: 4 }, &config);
        assert!(svg.contains(">1/4</text>"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_both_renders_dots_and_fraction() {
        let mut config = Pagination::default();
        config.kind = PaginationKind::Both;
        let svg = render_pagination(PageView { index: 2, total: 3 }, &config);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(">3/3</text>"));
    }

    // First `name="..."` value after `from` in the markup.
    fn attr(svg: &str, from: &str, name: &str) -> f32 {
        let tail = &svg[svg.find(from).unwrap()..];
        let value = tail.split(&format!("{name}=\"")).nth(1).unwrap();
        value.split('"').next().unwrap().parse().unwrap()
    }

    #[test]
    fn test_fraction_only_document_is_wide_enough_for_label() {
        let mut config = Pagination::default();
        config.kind = PaginationKind::Fraction;
        let svg = render_pagination(PageView { index: 0, total: 4 }, &config);
        let width = attr(&svg, "<svg", "width");
        let x = attr(&svg, "<text", "x");
        assert!(width > 0.0);
        assert!(x + 3.0 * FRACTION_CHAR_ADVANCE <= width, "label overruns document");
    }

    #[test]
    fn test_both_document_holds_dots_and_label() {
        let mut config = Pagination::default();
        config.kind = PaginationKind::Both;
        let svg = render_pagination(PageView { index: 2, total: 3 }, &config);
        let width = attr(&svg, "<svg", "width");
        let x = attr(&svg, "<text", "x");
        // Dot row spans 3 * 8 + 2 * 6 = 36; the label starts past it.
        assert_eq!(x, 42.0);
        assert!(x + 3.0 * FRACTION_CHAR_ADVANCE <= width, "label overruns document");
    }

    #[test]
    fn test_empty_carousel_emits_no_fraction() {
        let mut config = Pagination::default();
        config.kind = PaginationKind::Fraction;
        let svg = render_pagination(PageView { index: 0, total: 0 }, &config);
        assert!(!svg.contains("<text"));
        assert!(!svg.contains("1/0"));
    }

    #[test]
    fn test_show_dots_toggle_suppresses_dots() {
        let mut config = Pagination::default();
        config.show_dots = false;
        let svg = render_pagination(PageView { index: 0, total: 3 }, &config);
        assert!(!svg.contains("<circle"));
    }
}
