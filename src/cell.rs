use crate::style::{QrStyle, Shape};

// Finder zone
//------------------------------------------------------------------------------

/// True iff module (r, c) of an n-wide symbol lies in one of the three fixed
/// 7x7 finder pattern corners (top-left, top-right, bottom-left).
///
/// Purely positional: the test never looks at the module's color, so a light
/// module inside a corner still classifies as finder-zone geometry. Grids
/// narrower than a single finder pattern have no zones at all.
pub fn in_finder_zone(r: usize, c: usize, n: usize) -> bool {
    n >= 7 && ((r < 7 && c < 7) || (r < 7 && c >= n - 7) || (r >= n - 7 && c < 7))
}

// Cell geometry
//------------------------------------------------------------------------------

/// Drawable geometry for one dark module, in drawing coordinates.
#[derive(Debug, PartialEq, Clone)]
pub enum CellShape {
    Rect { x: f32, y: f32, size: f32, radius: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
    Diamond { points: [(f32, f32); 4] },
}

/// Maps a module position to its drawable shape. `cell_size` is the uniform
/// pitch, overall size / matrix width; cells share exact edges so the grid
/// stays contiguous without snapping.
pub fn cell_shape(r: usize, c: usize, cell_size: f32, finder: bool, style: &QrStyle) -> CellShape {
    let x = c as f32 * cell_size;
    let y = r as f32 * cell_size;
    let half = cell_size / 2.0;

    match style.shape {
        Shape::Circle => CellShape::Circle { cx: x + half, cy: y + half, r: half },
        Shape::Diamond => CellShape::Diamond {
            points: [
                (x + half, y),
                (x + cell_size, y + half),
                (x + half, y + cell_size),
                (x, y + half),
            ],
        },
        Shape::Square | Shape::Rounded => {
            let radius = if finder {
                style.finder_radius
            } else if style.shape == Shape::Rounded {
                style.corner_radius
            } else {
                0.0
            };
            CellShape::Rect { x, y, size: cell_size, radius }
        }
    }
}

/// Resolves the fill for a dark module. A configured gradient wins
/// unconditionally; otherwise finder-zone modules take the finder override
/// when present, and everything else takes the base color.
pub fn cell_fill<'a>(finder: bool, style: &'a QrStyle) -> &'a str {
    if style.gradient.is_some() {
        "url(#grad)"
    } else if finder {
        style.finder_color.as_deref().unwrap_or(&style.color)
    } else {
        &style.color
    }
}
