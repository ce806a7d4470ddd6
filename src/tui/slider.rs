//! Draggable range slider for the length control.
//!
//! The owner pushes the current value down with [`SliderController::set_value`]
//! and receives new values back as the return of the pointer handlers. The
//! controller never holds the authoritative value; it only maps between
//! pointer positions and values against the container's current geometry.

/// Horizontal extent of the slider container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub width: f64,
}

/// Source of the container geometry.
///
/// `None` means the container is not mounted or not measurable yet.
pub trait Container {
    fn bounds(&self) -> Option<Bounds>;
}

impl Container for Option<Bounds> {
    fn bounds(&self) -> Option<Bounds> {
        *self
    }
}

/// The listeners held while a drag is active.
///
/// Acquired together on press and released together when the session is
/// dropped, whichever terminating event comes first.
#[derive(Debug, PartialEq, Eq)]
pub struct DragSession {
    pointer_move: Listener,
    pointer_up: Listener,
    pointer_leave: Listener,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    PointerMove,
    PointerUp,
    PointerLeave,
}

impl DragSession {
    fn acquire() -> Self {
        let session = Self {
            pointer_move: Listener::PointerMove,
            pointer_up: Listener::PointerUp,
            pointer_leave: Listener::PointerLeave,
        };
        tracing::trace!(listeners = ?session.listeners(), "drag listeners attached");
        session
    }

    pub fn listeners(&self) -> [Listener; 3] {
        [self.pointer_move, self.pointer_up, self.pointer_leave]
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        tracing::trace!(listeners = ?self.listeners(), "drag listeners removed");
    }
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Map a pointer x to a slider value: `ceil((x - left) / width * max)`.
///
/// Unclamped. Returns `None` for a zero-width container.
pub fn value_at(x: f64, bounds: Bounds, max: u32) -> Option<i64> {
    if bounds.width <= 0.0 {
        return None;
    }
    Some(((x - bounds.left) / bounds.width * max as f64).ceil() as i64)
}

/// Thumb centre offset from the container's left edge.
pub fn pixel_position(value: u32, min: u32, max: u32, width: f64, thumb: f64) -> f64 {
    let half = thumb / 2.0;
    if max <= min {
        return half.round();
    }
    let ratio = value.saturating_sub(min) as f64 / (max - min) as f64;
    (ratio * (width - thumb) + half).round()
}

pub struct SliderController<C> {
    min: u32,
    max: u32,
    thumb: f64,
    value: u32,
    position: f64,
    state: DragState,
    container: C,
}

impl<C: Container> SliderController<C> {
    pub fn new(min: u32, max: u32, value: u32, thumb: f64, container: C) -> Self {
        let mut slider = Self {
            min,
            max,
            thumb,
            value,
            position: 0.0,
            state: DragState::Idle,
            container,
        };
        slider.refresh();
        slider
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    #[cfg(test)]
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    #[cfg(test)]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Accept a value from the owner and re-derive the thumb position.
    pub fn set_value(&mut self, value: u32) {
        self.value = value;
        self.refresh();
    }

    /// Thumb position for the current value against the current geometry.
    ///
    /// Falls back to the last measured position when the container can't be
    /// measured.
    pub fn position(&mut self) -> f64 {
        self.refresh();
        self.position
    }

    fn refresh(&mut self) {
        let Some(bounds) = self.measured() else {
            return;
        };
        self.position = pixel_position(self.value, self.min, self.max, bounds.width, self.thumb);
    }

    fn measured(&self) -> Option<Bounds> {
        self.container.bounds().filter(|b| b.width > 0.0)
    }

    /// Pointer pressed on the thumb: Idle -> Dragging.
    pub fn press_thumb(&mut self) {
        if self.measured().is_none() || self.is_dragging() {
            return;
        }
        self.state = DragState::Dragging(DragSession::acquire());
    }

    /// Pointer moved while dragging. Emits the clamped value.
    pub fn pointer_move(&mut self, x: f64) -> Option<u32> {
        if !self.is_dragging() {
            return None;
        }
        let bounds = self.measured()?;
        let raw = value_at(x, bounds, self.max)?;
        Some(raw.clamp(self.min as i64, self.max as i64) as u32)
    }

    /// Pointer released: ends the drag.
    pub fn release(&mut self) -> bool {
        self.end_drag()
    }

    /// Pointer left the container: ends the drag.
    pub fn leave(&mut self) -> bool {
        self.end_drag()
    }

    /// Release the drag listeners. Returns whether a session was active;
    /// repeated calls are no-ops.
    pub fn end_drag(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                drop(session);
                true
            }
            DragState::Idle => false,
        }
    }

    /// Click on the track (not the thumb).
    ///
    /// Unlike drags, the result is not clamped to `min`; a click at the very
    /// left edge emits 0. Only the upper bound holds, and only because clicks
    /// land inside the container.
    pub fn click_track(&mut self, x: f64) -> Option<i64> {
        let bounds = self.measured()?;
        value_at(x, bounds, self.max)
    }
}
