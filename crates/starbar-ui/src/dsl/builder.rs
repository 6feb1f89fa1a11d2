use std::cell::RefCell;
use std::rc::Rc;

use crate::assets::AssetProvider;
use crate::constraints::LayoutCtx;
use crate::dsl::ast::{DslDocument, Node};
use crate::dsl::error::{DslError, ParseError};
use crate::dsl::parser::parse_str;
use crate::host::{Host, NoopHost};
use crate::widget::Element;
use crate::widgets::rating_bar::{RatingBar, RatingConfig};

// ── DslBindings ───────────────────────────────────────────────────────────

/// Runtime bindings supplied by the application when building a widget tree.
pub struct DslBindings {
    /// Physical pixels per dp; `star_size` and `star_spacing` are in dp.
    pub density: f32,
    /// Shared event queue. `on_change: name` pushes `name` here on each change.
    pub event_queue: Rc<RefCell<Vec<String>>>,
    /// Host handed to every widget built from markup.
    pub host: Rc<dyn Host>,
}

impl DslBindings {
    pub fn new() -> Self {
        Self {
            density: 1.0,
            event_queue: Rc::new(RefCell::new(Vec::new())),
            host: Rc::new(NoopHost),
        }
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_host(mut self, host: Rc<dyn Host>) -> Self {
        self.host = host;
        self
    }

    /// Drain all pending events from the queue.
    pub fn take_events(&self) -> Vec<String> {
        self.event_queue.borrow_mut().drain(..).collect()
    }
}

impl Default for DslBindings {
    fn default() -> Self {
        Self::new()
    }
}

// ── DslLoader ─────────────────────────────────────────────────────────────

/// Parses `.mkml` documents and builds widgets from them.
#[derive(Debug, Default)]
pub struct DslLoader;

impl DslLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a `.mkml` source string into a [`DslDocument`].
    pub fn parse(&self, src: &str) -> Result<DslDocument, ParseError> {
        parse_str(src)
    }

    /// Build an [`Element`] from a previously parsed document.
    pub fn build(
        &self,
        doc: &DslDocument,
        bindings: &DslBindings,
        provider: &dyn AssetProvider,
    ) -> Result<Element, DslError> {
        self.build_node(&doc.root, bindings, provider)
    }

    /// Build the document's root as a concrete [`RatingBar`], for callers
    /// that keep driving it through its setters.
    pub fn build_rating_bar(
        &self,
        doc: &DslDocument,
        bindings: &DslBindings,
        provider: &dyn AssetProvider,
    ) -> Result<RatingBar, DslError> {
        match doc.root.widget.as_str() {
            "RatingBar" => self.rating_bar(&doc.root, bindings, provider),
            other => Err(DslError::UnknownWidget(other.to_string())),
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn build_node(
        &self,
        node: &Node,
        bindings: &DslBindings,
        provider: &dyn AssetProvider,
    ) -> Result<Element, DslError> {
        match node.widget.as_str() {
            "RatingBar" => Ok(Element::new(self.rating_bar(node, bindings, provider)?)),
            other => Err(DslError::UnknownWidget(other.to_string())),
        }
    }

    // ── RatingBar ─────────────────────────────────────────────────────────

    fn rating_bar(
        &self,
        node: &Node,
        bindings: &DslBindings,
        provider: &dyn AssetProvider,
    ) -> Result<RatingBar, DslError> {
        warn_mistyped(node);
        let ctx = LayoutCtx::new(bindings.density);
        let mut config = RatingConfig::with_density(ctx.scale);
        if let Some(v) = node.prop_f32("star_count") {
            config.star_count = v.max(0.0) as u32;
        }
        if let Some(v) = node.prop_f32("rating") {
            config.rating = v;
        }
        if let Some(v) = node.prop_f32("step_size") {
            config.step_size = v;
        }
        if let Some(v) = node.prop_bool("is_indicator") {
            config.is_indicator = v;
        }
        if let Some(v) = node.prop_f32("star_size") {
            config.star_size = ctx.dp(v);
        }
        if let Some(v) = node.prop_f32("star_spacing") {
            config.star_spacing = ctx.dp(v);
        }
        if let Some(c) = node.prop_color("star_color") {
            config.star_color = c;
        }

        let mut bar = RatingBar::new(config, provider)?.host(bindings.host.clone());
        if let Some(name) = node.prop_str("on_change") {
            let queue = Rc::clone(&bindings.event_queue);
            let name = name.to_string();
            bar.set_rating_changed_listener(move |_| queue.borrow_mut().push(name.clone()));
        }
        Ok(bar)
    }
}

/// Expected value kind for every key a `RatingBar` node understands.
const RATING_BAR_KEYS: &[(&str, &str)] = &[
    ("star_count", "number"),
    ("rating", "number"),
    ("step_size", "number"),
    ("is_indicator", "true/false"),
    ("star_size", "number"),
    ("star_spacing", "number"),
    ("star_color", "color"),
    ("on_change", "identifier"),
];

fn warn_mistyped(node: &Node) {
    for prop in &node.props {
        let Some((_, expected)) = RATING_BAR_KEYS.iter().find(|(k, _)| *k == prop.key) else {
            log::warn!("{}: ignoring unknown key `{}`", node.widget, prop.key);
            continue;
        };
        let ok = match *expected {
            "number" => node.prop_f32(&prop.key).is_some(),
            "true/false" => node.prop_bool(&prop.key).is_some(),
            "color" => node.prop_color(&prop.key).is_some(),
            _ => node.prop_str(&prop.key).is_some(),
        };
        if !ok {
            log::warn!(
                "{}: `{}` expects a {expected}, got a {}; using the default",
                node.widget,
                prop.key,
                prop.value.kind()
            );
        }
    }
}
