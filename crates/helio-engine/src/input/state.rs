/// A camera control that acts for as long as it is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    ZoomIn,
    ZoomOut,
}

impl Control {
    pub const COUNT: usize = 6;

    fn index(self) -> usize {
        match self {
            Control::PanLeft => 0,
            Control::PanRight => 1,
            Control::PanUp => 2,
            Control::PanDown => 3,
            Control::ZoomIn => 4,
            Control::ZoomOut => 5,
        }
    }
}

/// Edge-triggered events from the host event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PauseToggle,
    CameraReset,
    Quit,
}

/// Currently-held controls plus a queue of edge events.
///
/// The host's key callbacks write here; the frame driver reads the held
/// set and drains the events each tick. Same-thread cooperative model,
/// so no locking.
pub struct InputState {
    held: [bool; Control::COUNT],
    events: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: [false; Control::COUNT],
            events: Vec::with_capacity(8),
        }
    }

    pub fn press(&mut self, control: Control) {
        self.held[control.index()] = true;
    }

    pub fn release(&mut self, control: Control) {
        self.held[control.index()] = false;
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held[control.index()]
    }

    /// Release every held control (e.g. on window focus loss).
    pub fn clear_held(&mut self) {
        self.held = [false; Control::COUNT];
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending edge events, clearing the queue.
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
