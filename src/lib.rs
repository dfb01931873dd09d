//! # qrousel
//!
//! Styled QR code rendering to SVG, plus a paginated carousel state machine
//! for browsing multiple codes. Symbol construction (version selection, bit
//! packing, Reed-Solomon error correction) is delegated to the `qrcode`
//! crate; this crate turns the resulting module matrix into a decorated
//! vector drawing and drives the carousel's index and transition animations.
//!
//! ## Features
//!
//! - **Module shapes**: square, circle, diamond and rounded-square modules
//! - **Finder styling**: distinct color and corner radius for the three 7x7
//!   finder pattern corners
//! - **Gradients**: a single two-stop linear gradient shared by all dark
//!   modules, horizontal or vertical
//! - **Logo overlay**: centered image, by URL or embedded as a PNG data URI
//! - **Carousel**: slide/fade/scale transitions with easing, dot and
//!   fraction pagination, arrow state, index-change notification
//!
//! ## Quick Start
//!
//! ### One styled symbol
//!
//! ```rust
//! use qrousel::{Shape, SymbolBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svg = SymbolBuilder::new("https://example.com")
//!     .size(256.0)
//!     .shape(Shape::Rounded)
//!     .corner_radius(3.0)
//!     .finder_color("#1a73e8")
//!     .build()?
//!     .to_svg();
//! assert!(svg.contains("<rect"));
//! # Ok(())
//! # }
//! ```
//!
//! ### A carousel of symbols
//!
//! ```rust
//! use qrousel::{Carousel, CarouselConfig, CarouselItem, QrStyle};
//!
//! let mut carousel = Carousel::new(
//!     vec![CarouselItem::new("wifi:A"), CarouselItem::new("wifi:B")],
//!     QrStyle::default(),
//!     CarouselConfig::default(),
//! );
//! carousel.on_change(|index| println!("now showing {index}"));
//!
//! carousel.forward();            // starts the outbound animation
//! carousel.tick(150.0);          // host frame clock: index swaps, callback fires
//! carousel.tick(150.0);          // inbound animation done, idle again
//! let svg = carousel.current_svg().unwrap();
//! let dots = carousel.pagination_svg();
//! ```
//!
//! ## Rendering model
//!
//! A drawing is fully determined by (matrix, style): background rectangle,
//! optional gradient definition, one shape per dark module in row-major
//! order, optional centered logo. Light modules draw nothing; the background
//! shows through. Rendering twice with the same inputs yields byte-identical
//! markup.
//!
//! Matrices are re-encoded only when (text, error correction level) changes;
//! color, shape, gradient and logo edits reuse the cached grid.

pub mod carousel;
pub mod cell;
pub mod error;
pub mod matrix;
pub mod render;
pub mod style;
pub mod symbol;

pub use carousel::{
    Carousel, CarouselConfig, CarouselItem, Easing, PageView, Pagination, PaginationKind,
    PaginationPosition, Phase, Transition, Visual,
};
pub use error::{Error, QrResult};
pub use matrix::{encode, EcLevel, MatrixCache, ModuleMatrix};
pub use render::{placeholder_svg, render_svg};
pub use style::{Gradient, GradientAxis, Logo, QrStyle, Shape};
pub use symbol::{QrSymbol, SymbolBuilder};
