// File: crates/chart-core/src/geometry.rs
// Summary: Pixel rectangle for the plot area.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area left after removing `insets` from a `width`×`height` surface.
    /// Never inverted: a surface smaller than its insets yields a 1px area.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_respects_insets() {
        let r = RectI32::plot_area(1024, 640, &Insets::new(84, 28, 48, 60));
        assert_eq!(r, RectI32::from_ltrb(84, 48, 996, 580));
        assert_eq!(r.width(), 912);
        assert_eq!(r.height(), 532);
    }

    #[test]
    fn tiny_surface_never_inverts() {
        let r = RectI32::plot_area(10, 10, &Insets::default());
        assert!(r.width() >= 1 && r.height() >= 1);
    }
}
