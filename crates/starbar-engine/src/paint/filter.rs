use crate::paint::Color;

/// Per-pixel color transform applied when an image is drawn.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum ColorFilter {
    /// Draw the image's own colors.
    #[default]
    None,
    /// Keep the image's coverage (alpha) and replace its color with the given
    /// one. Used to tint monochrome icons.
    SrcIn(Color),
}

impl ColorFilter {
    /// Shorthand for a solid tint.
    #[inline]
    pub fn tint(color: Color) -> Self {
        ColorFilter::SrcIn(color)
    }

    /// Applies the filter to a premultiplied source pixel.
    #[inline]
    pub fn apply(self, src: Color) -> Color {
        match self {
            ColorFilter::None => src,
            ColorFilter::SrcIn(c) => Color::from_premul(c.r * src.a, c.g * src.a, c.b * src.a, c.a * src.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_passes_through() {
        let src = Color::from_straight(0.2, 0.4, 0.6, 0.8);
        assert_eq!(ColorFilter::None.apply(src), src);
    }

    #[test]
    fn src_in_keeps_coverage_and_replaces_color() {
        let red = Color::rgb(255, 0, 0);
        let src = Color::from_straight(0.1, 0.9, 0.3, 0.5);
        let out = ColorFilter::tint(red).apply(src);
        assert_eq!(out, Color::from_premul(0.5, 0.0, 0.0, 0.5));
    }

    #[test]
    fn src_in_on_transparent_stays_transparent() {
        let out = ColorFilter::tint(Color::WHITE).apply(Color::transparent());
        assert_eq!(out, Color::transparent());
    }
}
