//! Pure scroll-to-transform math. Every function here is a deterministic
//! mapping from (scroll position, static section constants) to visual
//! parameters; nothing reads the DOM and nothing is cached between calls.
//!
//! All derived offsets are clamped. A section's real scroll window is a few
//! hundred pixels, so the limits never bite in normal use, but a scroll
//! offset of a billion pixels must not push a layer off into space.

/// Per-section scroll threshold. Sections further down the page stay inert
/// until the viewport is near them.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionParallax {
    baseline: f64,
}

impl SectionParallax {
    pub const fn new(baseline: f64) -> Self {
        Self { baseline }
    }

    /// Scroll distance past this section's baseline, floored at zero.
    pub fn adjusted(&self, scroll_y: f64) -> f64 {
        (scroll_y.max(0.0) - self.baseline).max(0.0)
    }
}

/// A layer that drifts linearly with adjusted scroll, bounded by `limit`
/// pixels in either direction.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DriftLayer {
    coefficient: f64,
    limit: f64,
}

impl DriftLayer {
    pub const fn new(coefficient: f64, limit: f64) -> Self {
        Self { coefficient, limit }
    }

    pub fn offset(&self, adjusted: f64) -> f64 {
        (adjusted * self.coefficient).clamp(-self.limit, self.limit)
    }
}

/// A layer whose scale moves linearly with adjusted scroll between fixed
/// bounds, e.g. an image that zooms from 1.2x down to 1.0x as the section
/// scrolls into view.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScaleLayer {
    base: f64,
    coefficient: f64,
    min: f64,
    max: f64,
}

impl ScaleLayer {
    pub const fn new(base: f64, coefficient: f64, min: f64, max: f64) -> Self {
        Self {
            base,
            coefficient,
            min,
            max,
        }
    }

    pub fn scale(&self, adjusted: f64) -> f64 {
        (self.base + adjusted * self.coefficient).clamp(self.min, self.max)
    }
}

/// Normalizes a scroll window into [0, 1]: exactly 0 at or below `start`,
/// exactly 1 at or above `start + range`, linear in between.
pub fn progress(scroll_y: f64, start: f64, range: f64) -> f64 {
    ((scroll_y - start) / range).clamp(0.0, 1.0)
}

/// Opacity moving linearly with adjusted scroll, pinned to [0, 1].
pub fn fade(base: f64, adjusted: f64, coefficient: f64) -> f64 {
    (base + adjusted * coefficient).clamp(0.0, 1.0)
}

/// Maps a clamped progress ratio into an arbitrary visual range.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Small circular drift for decorative dots: scroll past the baseline swings
/// them on a sine/cosine pair scaled by per-axis radii.
pub fn orbit(adjusted: f64, frequency: f64, rx: f64, ry: f64) -> (f64, f64) {
    let angle = adjusted * frequency;
    (angle.sin() * rx, angle.cos() * ry)
}

/// The computed visual parameters for one layer, rendered into an inline CSS
/// declaration. Only the pieces a layer actually uses are emitted.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Transform {
    translate_x: Option<f64>,
    translate_y: Option<f64>,
    scale: Option<f64>,
    opacity: Option<f64>,
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: Some(x),
            translate_y: Some(y),
            ..Self::default()
        }
    }

    pub fn translate_y(y: f64) -> Self {
        Self {
            translate_y: Some(y),
            ..Self::default()
        }
    }

    pub fn scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }

    pub fn and_translate_y(mut self, y: f64) -> Self {
        self.translate_y = Some(y);
        self
    }

    pub fn and_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Inline CSS for this layer, e.g.
    /// `transform: translate(0px, 24px) scale(1.1); opacity: 0.8;`
    pub fn style(&self) -> String {
        let mut parts = Vec::new();
        if self.translate_x.is_some() || self.translate_y.is_some() {
            parts.push(format!(
                "translate({}px, {}px)",
                self.translate_x.unwrap_or(0.0),
                self.translate_y.unwrap_or(0.0)
            ));
        }
        if let Some(scale) = self.scale {
            parts.push(format!("scale({scale})"));
        }
        let mut decl = String::new();
        if !parts.is_empty() {
            decl.push_str(&format!("transform: {};", parts.join(" ")));
        }
        if let Some(opacity) = self.opacity {
            if !decl.is_empty() {
                decl.push(' ');
            }
            decl.push_str(&format!("opacity: {opacity};"));
        }
        decl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTION: SectionParallax = SectionParallax::new(600.0);
    const LAYER: DriftLayer = DriftLayer::new(0.15, 400.0);

    #[test]
    fn inert_before_baseline() {
        for s in [0.0, 1.0, 300.0, 599.9, 600.0] {
            assert_eq!(SECTION.adjusted(s), 0.0);
            assert_eq!(LAYER.offset(SECTION.adjusted(s)), 0.0);
        }
    }

    #[test]
    fn negative_scroll_is_floored() {
        assert_eq!(SECTION.adjusted(-50.0), 0.0);
        assert_eq!(SectionParallax::new(0.0).adjusted(-1.0), 0.0);
    }

    #[test]
    fn offset_linear_past_baseline() {
        for s in [601.0, 800.0, 1000.0, 2000.0] {
            let adjusted = SECTION.adjusted(s);
            assert_eq!(adjusted, s - 600.0);
            assert_eq!(LAYER.offset(adjusted), 0.15 * (s - 600.0));
        }
    }

    #[test]
    fn offset_clamped_at_extreme_scroll() {
        let adjusted = SECTION.adjusted(1e9);
        assert_eq!(LAYER.offset(adjusted), 400.0);
        assert_eq!(DriftLayer::new(-0.2, 400.0).offset(adjusted), -400.0);
    }

    #[test]
    fn scale_stays_in_bounds() {
        let zoom = ScaleLayer::new(1.2, -0.0003, 1.0, 1.2);
        assert_eq!(zoom.scale(0.0), 1.2);
        // 1.2 - 200 * 0.0003 = 1.14, inside the window
        assert!((zoom.scale(200.0) - 1.14).abs() < 1e-12);
        assert_eq!(zoom.scale(1e9), 1.0);
        assert_eq!(zoom.scale(-1e9), 1.2);
    }

    #[test]
    fn progress_window_endpoints() {
        assert_eq!(progress(0.0, 300.0, 800.0), 0.0);
        assert_eq!(progress(300.0, 300.0, 800.0), 0.0);
        assert_eq!(progress(700.0, 300.0, 800.0), 0.5);
        assert_eq!(progress(1100.0, 300.0, 800.0), 1.0);
        assert_eq!(progress(5000.0, 300.0, 800.0), 1.0);
    }

    #[test]
    fn fade_pinned_to_unit_interval() {
        assert_eq!(fade(0.0, 1e9, 0.001), 1.0);
        assert_eq!(fade(1.0, 1e9, -0.001), 0.0);
        assert!((fade(0.0, 250.0, 0.002) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lerp_clamps_its_ratio() {
        assert_eq!(lerp(0.3, 1.1, 0.0), 0.3);
        assert_eq!(lerp(0.3, 1.1, 1.0), 1.1);
        assert_eq!(lerp(0.3, 1.1, 7.0), 1.1);
        assert_eq!(lerp(0.3, 1.1, -2.0), 0.3);
        assert!((lerp(0.3, 1.1, 0.5) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn orbit_stays_within_radii() {
        for i in 0..1000 {
            let (x, y) = orbit(f64::from(i) * 3.7, 0.005, 20.0, 12.0);
            assert!(x.abs() <= 20.0);
            assert!(y.abs() <= 12.0);
        }
    }

    #[test]
    fn transform_is_idempotent() {
        let adjusted = SECTION.adjusted(1234.5);
        assert_eq!(LAYER.offset(adjusted).to_bits(), LAYER.offset(adjusted).to_bits());
        let a = Transform::translate_y(LAYER.offset(adjusted)).style();
        let b = Transform::translate_y(LAYER.offset(adjusted)).style();
        assert_eq!(a, b);
    }

    #[test]
    fn transform_emits_only_used_pieces() {
        assert_eq!(Transform::translate_y(24.0).style(), "transform: translate(0px, 24px);");
        assert_eq!(
            Transform::scale(1.1).and_translate_y(-5.0).style(),
            "transform: translate(0px, -5px) scale(1.1);"
        );
        assert_eq!(Transform::default().and_opacity(2.0).style(), "opacity: 1;");
        assert_eq!(Transform::default().style(), "");
    }
}
