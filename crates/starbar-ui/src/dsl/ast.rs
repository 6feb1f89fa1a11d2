use starbar_engine::paint::Color;

// ── Value ─────────────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted string: `"hello"`
    Str(String),
    /// Floating-point literal: `16.0`, `16` or `-2.5`
    Number(f32),
    /// Color literal: `#rrggbb` or `#rrggbbaa` (straight alpha)
    Color(Color),
    /// Unquoted identifier: event names, `true` / `false`
    Ident(String),
}

impl Value {
    /// Short name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Color(_) => "color",
            Value::Ident(_) => "identifier",
        }
    }
}

// ── Prop ──────────────────────────────────────────────────────────────────

/// A single `key: value` property inside a widget block.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    pub key: String,
    pub value: Value,
}

// ── Node ──────────────────────────────────────────────────────────────────

/// A widget instantiation node in the tree.
///
/// ```mkml
/// RatingBar {
///     star_count: 5
///     star_color: #ffb400
///     on_change: rated
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Widget type name: `"RatingBar"`.
    pub widget: String,
    /// Properties inside the block (`key: value` lines), in source order.
    pub props: Vec<Prop>,
}

impl Node {
    /// Look up a property value by key. The last occurrence wins.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.iter().rev().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a property as `f32` if it is a `Number`.
    pub fn prop_f32(&self, key: &str) -> Option<f32> {
        match self.prop(key)? {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a property as `&str` if it is a `Str` or `Ident`.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        match self.prop(key)? {
            Value::Str(s) | Value::Ident(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get a property as `Color` if it is a `Color`.
    pub fn prop_color(&self, key: &str) -> Option<Color> {
        match self.prop(key)? {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Get a property as `bool` if it is the identifier `true` or `false`.
    pub fn prop_bool(&self, key: &str) -> Option<bool> {
        match self.prop(key)? {
            Value::Ident(s) if s == "true" => Some(true),
            Value::Ident(s) if s == "false" => Some(false),
            _ => None,
        }
    }
}

// ── DslDocument ───────────────────────────────────────────────────────────

/// The top-level parse result for a `.mkml` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DslDocument {
    pub root: Node,
}
