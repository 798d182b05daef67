use std::fmt;

use serde::{Deserialize, Serialize};

/// A window's geometry as its top-left origin plus extent.
///
/// This is the canonical representation handed back by the windowing
/// system. No validation is performed: zero or negative dimensions are
/// legal and show up in transient states such as an iconified or
/// off-screen window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Frame {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// A screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// A window extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// The two-corner view of a [`Frame`]: left/top and right/bottom edges.
///
/// `bottom` carries the sign-preserving rule described on
/// [`Frame::bottom`], so converting back to a `Frame` is lossy when
/// `top` is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Frame {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge of the frame.
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    /// Bottom edge, computed as `sign(top) * (|top| + height)`.
    ///
    /// A monitor placed above the primary display gives its windows a
    /// negative `top`; the sign keeps the vertical extent pointing the
    /// same direction as `top` instead of folding back across zero.
    /// Only this edge and [`bounds`](Self::bounds) use the rule — the
    /// corner and midpoint accessors ([`bottom_left`](Self::bottom_left)
    /// and friends) use the plain `top + height` sum. Platform bindings
    /// rely on both formulas exactly as they are.
    pub fn bottom(&self) -> i32 {
        if self.top < 0 {
            self.top - self.height
        } else {
            self.top + self.height
        }
    }

    /// Top-left origin of the frame.
    pub fn position(&self) -> Point {
        Point {
            x: self.left,
            y: self.top,
        }
    }

    /// Extent of the frame.
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// The two-corner view, with the sign-preserving bottom edge.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.left,
            top: self.top,
            right: self.right(),
            bottom: self.bottom(),
        }
    }

    pub fn top_left(&self) -> Point {
        Point {
            x: self.left,
            y: self.top,
        }
    }

    /// Bottom-left corner, as the plain sum `top + height`.
    pub fn bottom_left(&self) -> Point {
        Point {
            x: self.left,
            y: self.top + self.height,
        }
    }

    pub fn top_right(&self) -> Point {
        Point {
            x: self.right(),
            y: self.top,
        }
    }

    pub fn bottom_right(&self) -> Point {
        Point {
            x: self.right(),
            y: self.top + self.height,
        }
    }

    /// Midpoint of the top edge.
    pub fn mid_top(&self) -> Point {
        Point {
            x: self.left + self.width / 2,
            y: self.top,
        }
    }

    /// Midpoint of the bottom edge (plain sum, like the corners).
    pub fn mid_bottom(&self) -> Point {
        Point {
            x: self.left + self.width / 2,
            y: self.top + self.height,
        }
    }

    /// Midpoint of the left edge.
    pub fn mid_left(&self) -> Point {
        Point {
            x: self.left,
            y: self.top + self.height / 2,
        }
    }

    /// Midpoint of the right edge.
    pub fn mid_right(&self) -> Point {
        Point {
            x: self.right(),
            y: self.top + self.height / 2,
        }
    }

    /// Center of the frame. Integer division truncates.
    pub fn center(&self) -> Point {
        Point {
            x: self.center_x(),
            y: self.center_y(),
        }
    }

    /// Horizontal center of the frame.
    pub fn center_x(&self) -> i32 {
        self.left + self.width / 2
    }

    /// Vertical center of the frame.
    pub fn center_y(&self) -> i32 {
        self.top + self.height / 2
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x={}, y={}, w={}, h={})",
            self.left, self.top, self.width, self.height
        )
    }
}

impl From<Bounds> for Frame {
    /// Recovers a frame as `width = right - left`, `height = bottom - top`.
    ///
    /// When `top` is negative this does not invert the sign-preserving
    /// bottom rule, so `frame.bounds().into()` is lossy for such frames.
    fn from(b: Bounds) -> Self {
        Self {
            left: b.left,
            top: b.top,
            width: b.right - b.left,
            height: b.bottom - b.top,
        }
    }
}

// Tuple conversions: platform glue and tests often hold bare
// coordinates rather than the named types.

impl From<(i32, i32, i32, i32)> for Frame {
    fn from((left, top, width, height): (i32, i32, i32, i32)) -> Self {
        Self::new(left, top, width, height)
    }
}

impl From<(i32, i32, i32, i32)> for Bounds {
    fn from((left, top, right, bottom): (i32, i32, i32, i32)) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}
