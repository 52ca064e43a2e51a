use bevy::prelude::*;

/// Handle for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// The "call me on the next display frame" capability the animator runs on.
///
/// A real host backs this with its render loop; tests back it with a queue
/// they drain by hand.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Queue of outstanding frame requests. The Bevy plugin drains it once per
/// `Update`, which plays the role of the display-frame callback.
#[derive(Resource, Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameRequest>,
}

impl FrameQueue {
    /// Requests that should fire on this frame. Each fires at most once.
    pub fn take_due(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[FrameRequest] {
        &self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        let request = FrameRequest(self.next_id);
        self.pending.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.retain(|r| *r != request);
    }
}
