use std::collections::HashMap;
use strum::IntoEnumIterator;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::OperationKind;

use super::error::{ApiError, TransportError};
use super::messages::{Completion, HttpRequest};
use super::state::RequestSlot;
use super::transport::Transport;

/// Generic request layer: one in-flight slot per operation kind.
///
/// Issuing a request for a kind that is still pending aborts the old one and
/// bumps that kind's generation. Only a completion whose generation is still
/// current is ever handed out by [`HttpClient::poll`].
pub struct HttpClient<T: Transport> {
    transport: T,

    /// In-flight requests, at most one per kind
    slots: HashMap<OperationKind, RequestSlot>,

    /// Last generation issued per kind
    generations: HashMap<OperationKind, u64>,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            slots: HashMap::new(),
            generations: OperationKind::iter().map(|kind| (kind, 0)).collect(),
        }
    }

    /// Puts `request` on the wire for `kind`, superseding any request of the
    /// same kind still in flight. Returns the generation it was issued under.
    pub fn send(&mut self, kind: OperationKind, request: HttpRequest) -> u64 {
        if let Some(previous) = self.slots.remove(&kind) {
            log::info!(
                "{} superseded after {:.2}s (generation {})",
                kind,
                previous.elapsed().as_secs_f32(),
                previous.generation
            );
            previous.cancel();
        }

        let generation = {
            let counter = self.generations.entry(kind).or_insert(0);
            *counter += 1;
            *counter
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_requests {
            log::info!(
                "[{}] dispatching {} {} (generation {})",
                kind,
                request.method,
                request.url,
                generation
            );
        }

        let dispatched = self.transport.dispatch(request);
        self.slots.insert(kind, RequestSlot::new(generation, dispatched));
        generation
    }

    #[cfg(test)]
    fn is_pending(&self, kind: OperationKind) -> bool {
        self.slots.contains_key(&kind)
    }

    pub fn current_generation(&self, kind: OperationKind) -> u64 {
        self.generations.get(&kind).copied().unwrap_or(0)
    }

    /// Collects every finished request. Non-blocking; call once per frame.
    pub fn poll(&mut self) -> Vec<Completion> {
        let mut completions = Vec::new();

        for kind in OperationKind::iter() {
            let Some(slot) = self.slots.remove(&kind) else {
                continue;
            };
            let generation = slot.generation;

            let outcome = match slot.try_take() {
                Ok(outcome) => outcome,
                Err(still_running) => {
                    self.slots.insert(kind, still_running);
                    continue;
                }
            };

            if generation != self.current_generation(kind) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_stale_responses {
                    log::info!("[{}] dropping stale completion (generation {})", kind, generation);
                }
                continue;
            }

            let result = match outcome {
                Ok(response) if response.is_success() => Ok(response.body),
                Ok(response) => Err(TransportError::Status(response.status)),
                Err(err) => Err(err),
            }
            .map_err(|cause| {
                log::warn!("[{}] request failed: {}", kind, cause);
                ApiError::Request {
                    operation: kind,
                    cause,
                }
            });

            completions.push(Completion {
                kind,
                generation,
                result,
            });
        }

        completions
    }
}
