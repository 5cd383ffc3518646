//! Per-kind sequence tokens for gateway requests.
//!
//! Every issued request gets the next token for its kind and a fresh
//! [`CancellationToken`]. Issuing again cancels the previous one, and a
//! result is only accepted when its token is the one still in flight.

use std::collections::HashMap;

use tokio_util::sync::CancellationToken;

use crate::core::gateway::RequestKind;

#[derive(Debug, Clone)]
pub struct RequestTicket {
    pub token: u64,
    pub cancel: CancellationToken,
}

#[derive(Debug, Default)]
struct KindState {
    latest: u64,
    in_flight: Option<CancellationToken>,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    kinds: HashMap<RequestKind, KindState>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self, kind: RequestKind) -> RequestTicket {
        let state = self.kinds.entry(kind).or_default();
        if let Some(previous) = state.in_flight.take() {
            previous.cancel();
        }
        state.latest += 1;
        let cancel = CancellationToken::new();
        state.in_flight = Some(cancel.clone());
        RequestTicket {
            token: state.latest,
            cancel,
        }
    }

    pub fn is_current(&self, kind: RequestKind, token: u64) -> bool {
        self.kinds
            .get(&kind)
            .is_some_and(|state| state.latest == token && state.in_flight.is_some())
    }

    /// Accept the result for `token`. Returns false for stale results.
    pub fn settle(&mut self, kind: RequestKind, token: u64) -> bool {
        if !self.is_current(kind, token) {
            return false;
        }
        if let Some(state) = self.kinds.get_mut(&kind) {
            state.in_flight = None;
        }
        true
    }

    /// Cancel whatever is in flight for `kind` so its result is dropped.
    pub fn invalidate(&mut self, kind: RequestKind) {
        if let Some(cancel) = self
            .kinds
            .get_mut(&kind)
            .and_then(|state| state.in_flight.take())
        {
            cancel.cancel();
        }
    }

    pub fn in_flight(&self, kind: RequestKind) -> bool {
        self.kinds
            .get(&kind)
            .is_some_and(|state| state.in_flight.is_some())
    }

    pub fn latest(&self, kind: RequestKind) -> u64 {
        self.kinds.get(&kind).map_or(0, |state| state.latest)
    }
}
