//! `.mkml` markup for declaring rating bars outside Rust code.
//!
//! # Format
//!
//! ```mkml
//! // Sizes are in dp and scaled by `DslBindings::density`.
//! RatingBar {
//!     star_count: 5
//!     rating: 2.5
//!     step_size: 0.5
//!     is_indicator: false
//!     star_size: 32
//!     star_spacing: 6
//!     star_color: #ffb400
//!     on_change: rated
//! }
//! ```
//!
//! Commas between properties are optional. Booleans are the bare
//! identifiers `true` and `false`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use starbar_ui::dsl::{DslBindings, DslLoader};
//!
//! let loader = DslLoader::new();
//! let bindings = DslBindings::new().with_density(2.0).with_host(scene.host());
//! let doc = loader.parse(include_str!("../ui/demo.mkml"))?;
//! let mut bar = loader.build_rating_bar(&doc, &bindings, &SvgAssetProvider::builtin())?;
//!
//! // Each frame:
//! let draw_list = scene.frame(&mut bar, viewport, &input);
//! for event in bindings.take_events() {
//!     if event == "rated" { println!("now {}", bar.rating()); }
//! }
//! ```

pub mod ast;
pub mod builder;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::DslDocument;
pub use builder::{DslBindings, DslLoader};
pub use error::{DslError, ParseError};
pub use parser::parse_str;
