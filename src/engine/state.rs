use poll_promise::Promise;
use std::time::Duration;

use crate::utils::app_time::{AppInstant, now};

use super::messages::TransportResult;
use super::transport::{AbortHook, Dispatched};

/// The single in-flight request of one operation kind.
pub struct RequestSlot {
    /// Generation this request was issued under. Only the newest generation
    /// of a kind may deliver.
    pub generation: u64,
    promise: Promise<TransportResult>,
    abort: Option<AbortHook>,
    started_at: AppInstant,
}

impl RequestSlot {
    pub fn new(generation: u64, dispatched: Dispatched) -> Self {
        Self {
            generation,
            promise: dispatched.promise,
            abort: dispatched.abort,
            started_at: now(),
        }
    }

    /// Best-effort abort. The promise is dropped with the slot, so whatever the
    /// transport does afterwards is never observed.
    pub fn cancel(mut self) {
        if let Some(abort) = self.abort.take() {
            abort();
        }
    }

    /// Hands back the result if the transport has finished, or the slot itself if not.
    pub fn try_take(mut self) -> Result<TransportResult, Self> {
        match self.promise.try_take() {
            Ok(result) => Ok(result),
            Err(promise) => {
                self.promise = promise;
                Err(self)
            }
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}
