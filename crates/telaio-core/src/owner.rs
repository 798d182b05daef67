use crate::Frame;

/// A boxed error type for owner operations.
///
/// Platform crates surface whatever native error the windowing system
/// produced; the geometry layer passes it through without catching or
/// wrapping it.
pub type FrameResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Access to the authoritative geometry of one window.
///
/// Each platform crate (e.g. `telaio-windows`) implements this for its
/// window handle type. [`LiveFrame`](crate::LiveFrame) depends only on
/// this trait, never on a concrete window.
pub trait FrameOwner {
    /// Returns the window's current geometry from the windowing system.
    ///
    /// Expected to succeed for a live window; what happens once the
    /// window is destroyed is up to the implementation.
    fn query(&self) -> FrameResult<Frame>;

    /// Requests a geometry update.
    ///
    /// `moved` and `resized` say which aspect of the geometry changed,
    /// letting the implementation pick a move-only or resize-only
    /// primitive over a full move-and-resize call. The window manager
    /// may clamp or ignore the request; callers that need the applied
    /// value must [`query`](Self::query) again.
    fn apply(&mut self, frame: Frame, moved: bool, resized: bool) -> FrameResult<()>;
}
