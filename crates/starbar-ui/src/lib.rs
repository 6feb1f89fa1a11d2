//! Starbar UI: a star rating widget on top of `starbar-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use starbar_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let provider = SvgAssetProvider::builtin();
//! let mut bar = RatingBar::new(RatingConfig::default(), &provider)?
//!     .host(scene.host())
//!     .color(Color::rgb(255, 180, 0))
//!     .on_rating_changed(|r| println!("rated {r}"));
//!
//! // In your frame callback:
//! let draw_list = scene.frame(&mut bar, viewport, &UiInput::at(mouse_pos, mouse_pressed));
//! let image = RasterRenderer::new().render(draw_list, width, height);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then hand it to
//! [`UiScene::frame`](scene::UiScene::frame) or wrap it in an
//! [`Element`](widget::Element).

pub mod assets;
pub mod constraints;
pub mod dsl;
pub mod event;
pub mod host;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything you need to build and host a rating bar.
pub mod prelude {
    pub use crate::assets::{
        AssetCache, AssetError, AssetProvider, FillLevel, MemoryAssetProvider, SvgAssetProvider,
    };
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::event::{EventResult, PointerAction, UiEvent};
    pub use crate::host::{FlagHost, Host, NoopHost};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::rating_bar::{RatingBar, RatingConfig};

    // Re-export the engine primitives everyone needs.
    pub use starbar_engine::coords::{Rect, Vec2};
    pub use starbar_engine::paint::{Color, ColorFilter};
    pub use starbar_engine::render::RasterRenderer;
    pub use starbar_engine::scene::{DrawList, ImageHandle};

    // DSL
    pub use crate::dsl::{DslBindings, DslDocument, DslError, DslLoader, ParseError};
}
