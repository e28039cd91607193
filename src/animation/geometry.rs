use web_sys::DomRect;

/// Translation applied to an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn lerp(self, to: Offset, t: f64) -> Self {
        Self::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    pub fn to_css_transform(self) -> String {
        format!("translate3d({:.3}px, {:.3}px, 0)", self.x, self.y)
    }
}

/// Viewport-space pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport-space bounding box, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

impl From<&DomRect> for Rect {
    fn from(rect: &DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_accounts_for_origin() {
        let rect = Rect::new(100.0, 50.0, 800.0, 500.0);
        assert_eq!(rect.center(), (500.0, 300.0));
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = Offset::new(-2.0, 4.0);
        let b = Offset::new(6.0, 0.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Offset::new(2.0, 2.0));
    }

    #[test]
    fn transform_is_a_plain_translation() {
        assert_eq!(
            Offset::new(-0.6, 0.3).to_css_transform(),
            "translate3d(-0.600px, 0.300px, 0)"
        );
    }
}
