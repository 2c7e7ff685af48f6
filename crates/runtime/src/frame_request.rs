/// Coalesces bursts of "please recompute" into one animation frame.
///
/// The host schedules a frame only when [`FrameRequest::request`] returns
/// `true`; further requests before the frame runs are absorbed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameRequest {
    pending: bool,
}

impl FrameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this call transitioned to pending.
    pub fn request(&mut self) -> bool {
        let newly = !self.pending;
        self.pending = true;
        newly
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consumes the pending request, returning whether one existed.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::FrameRequest;

    #[test]
    fn bursts_coalesce_into_one_request() {
        let mut req = FrameRequest::new();
        assert!(req.request());
        assert!(!req.request());
        assert!(!req.request());
        assert!(req.take());
        assert!(!req.take());
    }

    #[test]
    fn cancel_drops_pending_request() {
        let mut req = FrameRequest::new();
        req.request();
        req.cancel();
        assert!(!req.is_pending());
        assert!(req.request());
    }
}
