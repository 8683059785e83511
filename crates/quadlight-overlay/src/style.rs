use quadlight_engine::paint::Color;

/// Visual configuration of the overlay.
///
/// All colors are premultiplied. `Default` is the stock editor look; hosts adjust it
/// with the `with_*` setters.
///
/// ```ignore
/// let style = OverlayStyle::default()
///     .with_marker_half_extent(6.0)
///     .with_highlight_tint(Color::from_straight(1.0, 0.8, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Tint for a textured instance under the pointer.
    pub highlight_tint: Color,
    /// Placeholder fill when the texture failed to load.
    pub error_fill: Color,
    /// Placeholder fill while the texture is pending.
    pub placeholder_fill: Color,
    /// Placeholder fill while pending and under the pointer.
    pub placeholder_highlight_fill: Color,
    /// Fill of the pointer marker.
    pub marker_fill: Color,
    /// Half the side length of the square pointer marker, in device pixels.
    pub marker_half_extent: f32,
}

impl OverlayStyle {
    pub const DEFAULT_MARKER_HALF_EXTENT: f32 = 10.0;

    pub fn with_highlight_tint(mut self, color: Color) -> Self {
        self.highlight_tint = color;
        self
    }

    pub fn with_error_fill(mut self, color: Color) -> Self {
        self.error_fill = color;
        self
    }

    pub fn with_placeholder_fills(mut self, idle: Color, highlighted: Color) -> Self {
        self.placeholder_fill = idle;
        self.placeholder_highlight_fill = highlighted;
        self
    }

    pub fn with_marker_fill(mut self, color: Color) -> Self {
        self.marker_fill = color;
        self
    }

    /// Negative or non-finite sizes fall back to the default.
    pub fn with_marker_half_extent(mut self, half_extent: f32) -> Self {
        self.marker_half_extent = if half_extent.is_finite() && half_extent >= 0.0 {
            half_extent
        } else {
            log::debug!("invalid marker half-extent {half_extent}; using default");
            Self::DEFAULT_MARKER_HALF_EXTENT
        };
        self
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            highlight_tint: Color::red(),
            error_fill: Color::from_premul(0.25, 0.0, 0.0, 0.25),
            placeholder_fill: Color::from_premul(0.0, 0.0, 0.1, 0.1),
            placeholder_highlight_fill: Color::from_premul(0.2, 0.2, 0.3, 0.3),
            marker_fill: Color::from_premul(1.0, 0.0, 0.0, 0.5),
            marker_half_extent: Self::DEFAULT_MARKER_HALF_EXTENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_marker_is_ten_pixels() {
        assert_eq!(OverlayStyle::default().marker_half_extent, 10.0);
    }

    #[test]
    fn invalid_marker_size_falls_back() {
        assert_eq!(OverlayStyle::default().with_marker_half_extent(-1.0).marker_half_extent, 10.0);
        assert_eq!(OverlayStyle::default().with_marker_half_extent(f32::INFINITY).marker_half_extent, 10.0);
        assert_eq!(OverlayStyle::default().with_marker_half_extent(4.0).marker_half_extent, 4.0);
    }
}
