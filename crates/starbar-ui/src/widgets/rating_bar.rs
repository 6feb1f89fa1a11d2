use std::fmt;
use std::rc::Rc;

use starbar_engine::coords::{Rect, Vec2};
use starbar_engine::paint::{Color, ColorFilter};

use crate::assets::{AssetCache, AssetError, AssetProvider, FillLevel, StarSources};
use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, PointerAction, UiEvent};
use crate::host::{Host, NoopHost};
use crate::painter::Painter;
use crate::widget::Widget;

// ── RatingConfig ──────────────────────────────────────────────────────────

/// Construction-time settings for a [`RatingBar`].
///
/// Sizes are in pixels. Out-of-range values are accepted as given: a zero
/// step size or star count produces a degenerate widget, not a panic.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingConfig {
    /// Number of stars, nominally at least 1.
    pub star_count: u32,
    /// Initial rating.
    pub rating: f32,
    /// Quantization applied to pointer-derived ratings, in `(0, 1]`.
    pub step_size: f32,
    /// When set, pointer input never changes the rating.
    pub is_indicator: bool,
    pub star_size: f32,
    pub star_spacing: f32,
    pub star_color: Color,
}

impl RatingConfig {
    pub const DEFAULT_STAR_SIZE_DP: f32 = 24.0;
    pub const DEFAULT_STAR_SPACING_DP: f32 = 4.0;

    /// Defaults with the dp sizes converted at `density`.
    pub fn with_density(density: f32) -> Self {
        let ctx = LayoutCtx::new(density);
        Self {
            star_count: 5,
            rating: 0.0,
            step_size: 0.25,
            is_indicator: false,
            star_size: ctx.dp(Self::DEFAULT_STAR_SIZE_DP),
            star_spacing: ctx.dp(Self::DEFAULT_STAR_SPACING_DP),
            star_color: Color::BLACK,
        }
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

// ── RatingBar ─────────────────────────────────────────────────────────────

/// A row of stars showing a rating, settable by pointer drag.
///
/// The rating is turned into one [`FillLevel`] per star at quarter-star
/// granularity when painting. Pointer positions are quantized by the
/// configured step size when setting.
///
/// # Example
/// ```rust,ignore
/// let provider = SvgAssetProvider::builtin();
/// let bar = RatingBar::new(RatingConfig::with_density(2.0), &provider)?
///     .color(Color::rgb(255, 180, 0))
///     .on_rating_changed(|r| println!("rating: {r:.2}"));
/// ```
pub struct RatingBar {
    star_count: u32,
    rating: f32,
    step_size: f32,
    is_indicator: bool,
    star_size: f32,
    star_spacing: f32,
    star_color: Color,
    /// Tint shared by every star, rebuilt when the color changes.
    filter: ColorFilter,
    sources: StarSources,
    cache: AssetCache,
    host: Rc<dyn Host>,
    on_rating_changed: Option<Box<dyn FnMut(f32)>>,
}

impl RatingBar {
    /// Builds a rating bar, fetching every star image from `provider`.
    ///
    /// Fails if the provider cannot supply any of the five levels.
    pub fn new(config: RatingConfig, provider: &dyn AssetProvider) -> Result<Self, AssetError> {
        let sources = StarSources::load(provider)?;
        let cache = AssetCache::build(&sources, config.star_size);
        Ok(Self {
            star_count: config.star_count,
            rating: config.rating,
            step_size: config.step_size,
            is_indicator: config.is_indicator,
            star_size: config.star_size,
            star_spacing: config.star_spacing,
            star_color: config.star_color,
            filter: ColorFilter::tint(config.star_color),
            sources,
            cache,
            host: Rc::new(NoopHost),
            on_rating_changed: None,
        })
    }

    // ── builder ───────────────────────────────────────────────────────────

    /// Attaches the host that receives redraw / layout / click requests.
    pub fn host(mut self, host: Rc<dyn Host>) -> Self {
        self.host = host;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.set_star_color(color);
        self
    }

    pub fn indicator(mut self, flag: bool) -> Self {
        self.set_indicator(flag);
        self
    }

    pub fn on_rating_changed(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.set_rating_changed_listener(f);
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn rating(&self) -> f32 {
        self.rating
    }

    #[inline]
    pub fn star_count(&self) -> u32 {
        self.star_count
    }

    #[inline]
    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    #[inline]
    pub fn is_indicator(&self) -> bool {
        self.is_indicator
    }

    #[inline]
    pub fn star_size(&self) -> f32 {
        self.star_size
    }

    #[inline]
    pub fn star_spacing(&self) -> f32 {
        self.star_spacing
    }

    #[inline]
    pub fn star_color(&self) -> Color {
        self.star_color
    }

    /// Footprint from configuration alone: stars side by side with spacing
    /// between them, one star tall.
    pub fn natural_size(&self) -> Vec2 {
        let n = self.star_count as f32;
        let width = n * self.star_size + (n - 1.0) * self.star_spacing;
        Vec2::new(width.max(0.0), self.star_size)
    }

    /// Visual state of the star at `index` for the current rating.
    #[inline]
    pub fn fill_level_for(&self, index: u32) -> FillLevel {
        FillLevel::from_diff(self.rating - index as f32)
    }

    /// Rating selected by a pointer at `x`, relative to the widget's left edge.
    ///
    /// Only the upper bound is clamped; positions left of the widget give
    /// negative ratings, which paint as all-empty.
    pub fn rating_at(&self, x: f32) -> f32 {
        let full_star_width = self.star_size + self.star_spacing;
        let raw = x / full_star_width;
        let quantized = (raw / self.step_size).floor() * self.step_size;
        quantized.min(self.star_count as f32)
    }

    // ── input ─────────────────────────────────────────────────────────────

    /// Applies one pointer event at `x` (widget-local). Returns whether it
    /// was handled; `false` asks the host for its default handling.
    pub fn handle_pointer(&mut self, action: PointerAction, x: f32) -> bool {
        if self.is_indicator {
            return false;
        }
        match action {
            PointerAction::Down | PointerAction::Move => {
                let rating = self.rating_at(x);
                log::trace!("pointer {action:?} at x={x} -> rating {rating}");
                self.set_rating(rating);
                true
            }
            PointerAction::Up => {
                self.host.perform_click();
                true
            }
            PointerAction::Cancel | PointerAction::Hover => false,
        }
    }

    // ── mutators ──────────────────────────────────────────────────────────

    /// Stores `rating` as given, requests a redraw and notifies the listener.
    pub fn set_rating(&mut self, rating: f32) {
        self.rating = rating;
        self.host.request_redraw();
        if let Some(f) = &mut self.on_rating_changed {
            f(rating);
        }
    }

    pub fn set_indicator(&mut self, flag: bool) {
        self.is_indicator = flag;
    }

    pub fn set_star_color(&mut self, color: Color) {
        self.star_color = color;
        self.filter = ColorFilter::tint(color);
        self.host.request_redraw();
    }

    /// Changes the star edge length and rescales all artwork before returning.
    pub fn set_star_size(&mut self, size: f32) {
        self.star_size = size;
        self.cache = AssetCache::build(&self.sources, size);
        self.host.request_layout();
    }

    pub fn set_star_spacing(&mut self, spacing: f32) {
        self.star_spacing = spacing;
        self.host.request_layout();
    }

    pub fn set_star_count(&mut self, count: u32) {
        self.star_count = count;
        self.host.request_layout();
    }

    /// Replaces the single change listener.
    pub fn set_rating_changed_listener(&mut self, f: impl FnMut(f32) + 'static) {
        if self.on_rating_changed.is_some() {
            log::debug!("replacing rating listener");
        }
        self.on_rating_changed = Some(Box::new(f));
    }
}

impl fmt::Debug for RatingBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingBar")
            .field("star_count", &self.star_count)
            .field("rating", &self.rating)
            .field("step_size", &self.step_size)
            .field("is_indicator", &self.is_indicator)
            .field("star_size", &self.star_size)
            .field("star_spacing", &self.star_spacing)
            .field("star_color", &self.star_color)
            .field("has_listener", &self.on_rating_changed.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for RatingBar {
    fn measure(&self, _constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        self.natural_size()
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let stride = Vec2::new(self.star_size + self.star_spacing, 0.0);
        for i in 0..self.star_count {
            let image = self.cache.get(self.fill_level_for(i));
            painter.draw_image(image, rect.origin + stride * i as f32, self.filter);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        let (action, pos) = event.pointer();
        let x = pos.map_or(0.0, |p| rect.to_local(p).x);
        self.handle_pointer(action, x).into()
    }
}
