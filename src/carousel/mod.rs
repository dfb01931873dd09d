pub mod animation;
pub mod pagination;

pub use animation::{Easing, Transition, Visual, DEFAULT_DURATION, SLIDE_DISTANCE};
pub use pagination::{PageView, Pagination, PaginationKind, PaginationPosition};

use serde::{Deserialize, Serialize};

use crate::matrix::MatrixCache;
use crate::render::{placeholder_svg, render_svg};
use crate::style::QrStyle;

use self::pagination::PaginationRenderer;

// Items & configuration
//------------------------------------------------------------------------------

/// One entry in the carousel: the text to encode plus an optional style that
/// replaces the shared one for this entry only.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CarouselItem {
    pub text: String,
    #[serde(default)]
    pub style: Option<QrStyle>,
}

impl CarouselItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: None }
    }

    pub fn styled(text: impl Into<String>, style: QrStyle) -> Self {
        Self { text: text.into(), style: Some(style) }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub initial_index: usize,
    pub transition: Transition,
    /// Duration of each phase (out, then in) in host time-units.
    pub duration: f32,
    pub easing: Easing,
    pub show_arrows: bool,
    pub arrow_size: f32,
    pub pagination: Pagination,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            initial_index: 0,
            transition: Transition::Slide,
            duration: DEFAULT_DURATION,
            easing: Easing::Ease,
            show_arrows: true,
            arrow_size: 24.0,
            pagination: Pagination::default(),
        }
    }
}

// State machine
//------------------------------------------------------------------------------

/// Animation phase. Anything other than `Idle` means a transition is in
/// flight and further navigation requests are rejected.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    Idle,
    AnimatingOut,
    AnimatingIn,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    target: usize,
    dir: f32,
    phase: Phase,
    elapsed: f32,
}

/// Paginated, animated viewer over an ordered list of symbols.
///
/// All state lives in the instance; the host drives time by calling
/// [`tick`](Carousel::tick) from its frame scheduler and applies the sampled
/// [`Visual`] to the drawing of the current symbol.
///
/// ```rust
/// use qrousel::{Carousel, CarouselConfig, CarouselItem, Transition};
///
/// let mut config = CarouselConfig::default();
/// config.transition = Transition::None;
/// let mut carousel = Carousel::new(
///     vec![CarouselItem::new("A"), CarouselItem::new("B")],
///     Default::default(),
///     config,
/// );
/// carousel.forward();
/// assert_eq!(carousel.index(), 1);
/// ```
pub struct Carousel {
    items: Vec<CarouselItem>,
    style: QrStyle,
    config: CarouselConfig,
    index: usize,
    in_flight: Option<InFlight>,
    cache: MatrixCache,
    on_change: Option<Box<dyn FnMut(usize)>>,
    render_pagination: Option<PaginationRenderer>,
}

impl Carousel {
    /// `style` is shared by every item without its own override. The initial
    /// index is clamped into bounds.
    pub fn new(items: Vec<CarouselItem>, style: QrStyle, config: CarouselConfig) -> Self {
        let index = if items.is_empty() {
            0
        } else {
            config.initial_index.min(items.len() - 1)
        };
        Self {
            items,
            style,
            config,
            index,
            in_flight: None,
            cache: MatrixCache::new(),
            on_change: None,
            render_pagination: None,
        }
    }

    /// Called with the new index exactly once per completed navigation,
    /// after the outbound phase and before the inbound one.
    pub fn on_change(&mut self, callback: impl FnMut(usize) + 'static) -> &mut Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Replaces the built-in dot/fraction indicator.
    pub fn pagination_renderer(
        &mut self,
        renderer: impl Fn(PageView) -> String + 'static,
    ) -> &mut Self {
        self.render_pagination = Some(Box::new(renderer));
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.in_flight.map_or(Phase::Idle, |t| t.phase)
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    // Navigation
    //--------------------------------------------------------------------------

    /// Requests the next symbol. Returns whether the request was accepted;
    /// rejected at the last index or while a transition is in flight.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.items.len() {
            return false;
        }
        self.request(self.index + 1, 1.0)
    }

    /// Requests the previous symbol; rejected at index 0 or mid-transition.
    pub fn back(&mut self) -> bool {
        if self.index == 0 || self.items.is_empty() {
            return false;
        }
        self.request(self.index - 1, -1.0)
    }

    /// Requests an arbitrary in-bounds index; direction follows the sign of
    /// the jump. Jumping to the current index is a no-op.
    pub fn jump(&mut self, target: usize) -> bool {
        if target >= self.items.len() || target == self.index {
            return false;
        }
        let dir = if target > self.index { 1.0 } else { -1.0 };
        self.request(target, dir)
    }

    fn request(&mut self, target: usize, dir: f32) -> bool {
        if self.in_flight.is_some() {
            tracing::debug!(to = target, "navigation rejected: transition in flight");
            return false;
        }
        if self.config.transition == Transition::None {
            self.commit(target);
            return true;
        }
        self.in_flight =
            Some(InFlight { target, dir, phase: Phase::AnimatingOut, elapsed: 0.0 });
        true
    }

    // Swap the visible item and notify. Exactly once per accepted request.
    fn commit(&mut self, target: usize) {
        self.index = target;
        if let Some(callback) = self.on_change.as_mut() {
            callback(target);
        }
    }

    // Animation clock
    //--------------------------------------------------------------------------

    /// Advances the transition clock by `dt` host time-units. The index swap
    /// and change notification happen on the tick that completes the
    /// outbound phase; the transition ends on the tick that completes the
    /// inbound phase.
    pub fn tick(&mut self, dt: f32) {
        let Some(mut flight) = self.in_flight else {
            return;
        };
        flight.elapsed += dt;
        if flight.elapsed < self.config.duration {
            self.in_flight = Some(flight);
            return;
        }
        match flight.phase {
            Phase::AnimatingOut => {
                flight.phase = Phase::AnimatingIn;
                flight.elapsed = 0.0;
                self.in_flight = Some(flight);
                self.commit(flight.target);
            }
            Phase::AnimatingIn => {
                self.in_flight = None;
            }
            Phase::Idle => unreachable!("idle transitions are never stored"),
        }
    }

    /// Samples the transform for the current frame.
    pub fn visual(&self) -> Visual {
        let Some(flight) = self.in_flight else {
            return Visual::IDLE;
        };
        // A non-positive duration means each phase is already over; never
        // divide by it.
        let p = if self.config.duration > 0.0 {
            self.config.easing.apply(flight.elapsed / self.config.duration)
        } else {
            1.0
        };
        match flight.phase {
            Phase::AnimatingOut => Visual::outbound(self.config.transition, flight.dir, p),
            Phase::AnimatingIn => Visual::inbound(self.config.transition, flight.dir, p),
            Phase::Idle => Visual::IDLE,
        }
    }

    // Rendering
    //--------------------------------------------------------------------------

    /// Renders the currently visible symbol through the matrix cache, so
    /// style-only differences between frames never re-encode. An item whose
    /// text the encoder rejects yields the background-only placeholder;
    /// sibling items are unaffected. `None` only when the list is empty.
    pub fn current_svg(&mut self) -> Option<String> {
        let item = self.items.get(self.index)?;
        let text = item.text.clone();
        let style = item.style.as_ref().unwrap_or(&self.style).clone();
        match self.cache.get_or_encode(&text, style.ec_level) {
            Ok(matrix) => Some(render_svg(matrix, &style)),
            Err(err) => {
                tracing::warn!(index = self.index, %err, "symbol encoding failed");
                Some(placeholder_svg(&style))
            }
        }
    }

    /// Indicator markup for the current page, from the custom renderer when
    /// set, else the built-in dot/fraction renderer.
    pub fn pagination_svg(&self) -> String {
        let view = self.page_view();
        match &self.render_pagination {
            Some(renderer) => renderer(view),
            None => pagination::render_pagination(view, &self.config.pagination),
        }
    }

    /// Display-only projection for external pagination renderers.
    pub fn page_view(&self) -> PageView {
        PageView { index: self.index, total: self.items.len() }
    }

    /// (back enabled, forward enabled) for the host's arrow buttons; both
    /// disabled when arrows are configured off.
    pub fn arrows(&self) -> (bool, bool) {
        if !self.config.show_arrows {
            return (false, false);
        }
        (self.index > 0, self.index + 1 < self.items.len())
    }
}
