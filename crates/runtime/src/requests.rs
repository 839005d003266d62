//! In-memory inventory scheduler.
//!
//! Records what the module asked the host to do instead of doing it. Used
//! by the simulator binary and by tests; a real host implements
//! [`InventoryScheduler`] on top of its own click queue.

use serde::Serialize;
use totem_core::{ClickAction, InventoryConstraints, InventoryScheduler};

/// One request handed to the scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryRequest {
    Scheduled {
        constraints: InventoryConstraints,
        action: ClickAction,
    },
    Performed(ClickAction),
}

impl InventoryRequest {
    pub fn action(&self) -> ClickAction {
        match self {
            InventoryRequest::Scheduled { action, .. } | InventoryRequest::Performed(action) => {
                *action
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryRequests {
    requests: Vec<InventoryRequest>,
    out_of_band_clicks: u32,
}

impl InventoryRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> &[InventoryRequest] {
        &self.requests
    }

    /// Clicks reported through [`InventoryScheduler::click_occurred`].
    pub fn out_of_band_clicks(&self) -> u32 {
        self.out_of_band_clicks
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<InventoryRequest> {
        self.out_of_band_clicks = 0;
        std::mem::take(&mut self.requests)
    }
}

impl InventoryScheduler for InventoryRequests {
    fn schedule(&mut self, constraints: InventoryConstraints, action: ClickAction) {
        self.requests.push(InventoryRequest::Scheduled {
            constraints,
            action,
        });
    }

    fn click_occurred(&mut self) {
        self.out_of_band_clicks += 1;
    }

    fn perform(&mut self, action: ClickAction) {
        self.requests.push(InventoryRequest::Performed(action));
    }
}
