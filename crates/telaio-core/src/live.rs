//! A live view over one window's geometry.
//!
//! Geometry changes behind the program's back — user drags, window
//! manager animations, monitor hot-plug — so a snapshot taken a moment
//! ago cannot be trusted. Every accessor here re-queries the owner
//! before computing its result, and every mutator re-queries before
//! computing the frame it pushes, so the untouched fields come from the
//! current state rather than a stale cache.
//!
//! Accesses are independent round trips: setting `left` and then `top`
//! is two query/apply pairs, not one atomic move. A `LiveFrame` must
//! not be shared across threads without external serialization.

use std::fmt;

use crate::owner::{FrameOwner, FrameResult};
use crate::{Bounds, Frame, Point, Size, log_debug};

/// A cached geometry snapshot kept synchronized with its owner.
///
/// The owner value is typically a cheap `Copy` handle wrapping the
/// platform's window id. The cached [`Frame`] only feeds the `Debug`
/// and `Display` output; reads and writes never rely on it.
pub struct LiveFrame<O: FrameOwner> {
    cached: Frame,
    owner: O,
}

impl<O: FrameOwner> LiveFrame<O> {
    /// Creates a live view seeded with the frame the creator just read.
    pub fn new(frame: Frame, owner: O) -> Self {
        Self {
            cached: frame,
            owner,
        }
    }

    /// Returns a reference to the underlying owner.
    pub fn owner(&self) -> &O {
        &self.owner
    }

    /// Returns a mutable reference to the underlying owner.
    pub fn owner_mut(&mut self) -> &mut O {
        &mut self.owner
    }

    /// Consumes the view, returning the underlying owner.
    pub fn into_owner(self) -> O {
        self.owner
    }

    /// Refreshes the cache from the owner and returns the fresh frame.
    fn pull(&mut self) -> FrameResult<Frame> {
        self.cached = self.owner.query()?;
        Ok(self.cached)
    }

    /// Pushes a frame to the owner, tagging which aspect changed.
    fn push(&mut self, frame: Frame, moved: bool, resized: bool) -> FrameResult<()> {
        self.cached = frame;
        log_debug!("apply {frame} moved={moved} resized={resized}");
        self.owner.apply(frame, moved, resized)
    }

    // ── Edges ────────────────────────────────────────────────────

    pub fn left(&mut self) -> FrameResult<i32> {
        Ok(self.pull()?.left)
    }

    pub fn set_left(&mut self, value: i32) -> FrameResult<()> {
        let cur = self.pull()?;
        self.push(Frame::new(value, cur.top, cur.width, cur.height), true, false)
    }

    pub fn right(&mut self) -> FrameResult<i32> {
        Ok(self.pull()?.right())
    }

    /// Moves the frame so its right edge lands on `value`; the width
    /// used for the inverse comes from the freshly queried state.
    pub fn set_right(&mut self, value: i32) -> FrameResult<()> {
        let cur = self.pull()?;
        self.push(
            Frame::new(value - cur.width, cur.top, cur.width, cur.height),
            true,
            false,
        )
    }

    pub fn top(&mut self) -> FrameResult<i32> {
        Ok(self.pull()?.top)
    }

    pub fn set_top(&mut self, value: i32) -> FrameResult<()> {
        let cur = self.pull()?;
        self.push(Frame::new(cur.left, value, cur.width, cur.height), true, false)
    }

    /// Bottom edge, sign-preserving (see [`Frame::bottom`]).
    pub fn bottom(&mut self) -> FrameResult<i32> {
        Ok(self.pull()?.bottom())
    }

    /// Moves the frame so `top = value - height`. The plain inverse is
    /// used even where the read side applies the sign-preserving rule.
    pub fn set_bottom(&mut self, value: i32) -> FrameResult<()> {
        let cur = self.pull()?;
        self.push(
            Frame::new(cur.left, value - cur.height, cur.width, cur.height),
            true,
            false,
        )
    }

    // ── Extent ───────────────────────────────────────────────────

    pub fn width(&mut self) -> FrameResult<i32> {
        Ok(self.pull()?.width)
    }

    pub fn set_width(&mut self, value: i32) -> FrameResult<()> {
        let cur = self.pull()?;
        self.push(Frame::new(cur.left, cur.top, value, cur.height), false, true)
    }

    pub fn height(&mut self) -> FrameResult<i32> {
        Ok(self.pull()?.height)
    }

    pub fn set_height(&mut self, value: i32) -> FrameResult<()> {
        let cur = self.pull()?;
        self.push(Frame::new(cur.left, cur.top, cur.width, value), false, true)
    }

    pub fn position(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.position())
    }

    pub fn set_position(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(Frame::new(p.x, p.y, cur.width, cur.height), true, false)
    }

    pub fn size(&mut self) -> FrameResult<Size> {
        Ok(self.pull()?.size())
    }

    pub fn set_size(&mut self, value: impl Into<Size>) -> FrameResult<()> {
        let s = value.into();
        let cur = self.pull()?;
        self.push(Frame::new(cur.left, cur.top, s.width, s.height), false, true)
    }

    // ── Whole-frame views ────────────────────────────────────────

    pub fn frame(&mut self) -> FrameResult<Frame> {
        self.pull()
    }

    /// Replaces the whole geometry; both change flags are raised.
    pub fn set_frame(&mut self, value: impl Into<Frame>) -> FrameResult<()> {
        let frame = value.into();
        self.pull()?;
        self.push(frame, true, true)
    }

    /// The two-corner view, with the sign-preserving bottom edge.
    pub fn bounds(&mut self) -> FrameResult<Bounds> {
        Ok(self.pull()?.bounds())
    }

    /// Replaces the whole geometry from a two-corner view, recovering
    /// `width = right - left` and `height = bottom - top`.
    pub fn set_bounds(&mut self, value: impl Into<Bounds>) -> FrameResult<()> {
        let frame = Frame::from(value.into());
        self.pull()?;
        self.push(frame, true, true)
    }

    // ── Corners ──────────────────────────────────────────────────

    pub fn top_left(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.top_left())
    }

    pub fn set_top_left(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(Frame::new(p.x, p.y, cur.width, cur.height), true, false)
    }

    pub fn bottom_left(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.bottom_left())
    }

    pub fn set_bottom_left(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(
            Frame::new(p.x, p.y - cur.height, cur.width, cur.height),
            true,
            false,
        )
    }

    pub fn top_right(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.top_right())
    }

    pub fn set_top_right(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(
            Frame::new(p.x - cur.width, p.y, cur.width, cur.height),
            true,
            false,
        )
    }

    pub fn bottom_right(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.bottom_right())
    }

    pub fn set_bottom_right(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(
            Frame::new(p.x - cur.width, p.y - cur.height, cur.width, cur.height),
            true,
            false,
        )
    }

    // ── Midpoints ────────────────────────────────────────────────

    pub fn mid_top(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.mid_top())
    }

    pub fn set_mid_top(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(
            Frame::new(p.x - cur.width / 2, p.y, cur.width, cur.height),
            true,
            false,
        )
    }

    pub fn mid_bottom(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.mid_bottom())
    }

    pub fn set_mid_bottom(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(
            Frame::new(p.x - cur.width / 2, p.y - cur.height, cur.width, cur.height),
            true,
            false,
        )
    }

    pub fn mid_left(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.mid_left())
    }

    pub fn set_mid_left(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(
            Frame::new(p.x, p.y - cur.height / 2, cur.width, cur.height),
            true,
            false,
        )
    }

    pub fn mid_right(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.mid_right())
    }

    pub fn set_mid_right(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(
            Frame::new(p.x - cur.width, p.y - cur.height / 2, cur.width, cur.height),
            true,
            false,
        )
    }

    // ── Center ───────────────────────────────────────────────────

    pub fn center(&mut self) -> FrameResult<Point> {
        Ok(self.pull()?.center())
    }

    pub fn set_center(&mut self, value: impl Into<Point>) -> FrameResult<()> {
        let p = value.into();
        let cur = self.pull()?;
        self.push(
            Frame::new(
                p.x - cur.width / 2,
                p.y - cur.height / 2,
                cur.width,
                cur.height,
            ),
            true,
            false,
        )
    }

    pub fn center_x(&mut self) -> FrameResult<i32> {
        Ok(self.pull()?.center_x())
    }

    pub fn set_center_x(&mut self, value: i32) -> FrameResult<()> {
        let cur = self.pull()?;
        self.push(
            Frame::new(value - cur.width / 2, cur.top, cur.width, cur.height),
            true,
            false,
        )
    }

    pub fn center_y(&mut self) -> FrameResult<i32> {
        Ok(self.pull()?.center_y())
    }

    pub fn set_center_y(&mut self, value: i32) -> FrameResult<()> {
        let cur = self.pull()?;
        self.push(
            Frame::new(cur.left, value - cur.height / 2, cur.width, cur.height),
            true,
            false,
        )
    }
}

/// Constructor-style rendering of the cached snapshot.
///
/// Diagnostic only: no re-query happens, so the output can lag behind
/// an external move the view has not observed yet.
impl<O: FrameOwner> fmt::Debug for LiveFrame<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LiveFrame(left={}, top={}, width={}, height={})",
            self.cached.left, self.cached.top, self.cached.width, self.cached.height
        )
    }
}

/// Compact rendering of the cached snapshot; same staleness caveat as
/// the `Debug` output.
impl<O: FrameOwner> fmt::Display for LiveFrame<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cached)
    }
}
