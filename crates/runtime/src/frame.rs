use foundation::time::Millis;

/// Largest step a single frame may integrate (seconds).
///
/// Background tabs can stall animation frames for seconds at a time.
pub const MAX_FRAME_DT_S: f64 = 0.1;

/// Frame metadata derived from host animation-frame timestamps.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Host timestamp at the start of the frame.
    pub now: Millis,
    /// Seconds since the previous frame, capped at [`MAX_FRAME_DT_S`].
    pub dt_s: f64,
}

impl Frame {
    pub fn first(now: Millis) -> Self {
        Self {
            index: 0,
            now,
            dt_s: 0.0,
        }
    }

    pub fn next_at(self, now: Millis) -> Self {
        let dt_s = now.saturating_since(self.now).as_secs().min(MAX_FRAME_DT_S);
        Self {
            index: self.index + 1,
            now,
            dt_s,
        }
    }
}

/// Tracks the running frame sequence for a render loop.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    last: Option<Frame>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now: Millis) -> Frame {
        let frame = match self.last {
            None => Frame::first(now),
            Some(prev) => prev.next_at(now),
        };
        self.last = Some(frame);
        frame
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
