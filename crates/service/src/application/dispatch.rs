//! Domain-event dispatcher
//!
//! In-process hook between aggregate transitions and their side effects. The
//! application service owns a dispatcher instance and registers handlers at
//! construction; there is no global registry, and no unregistration.
//!
//! Handlers for an event type run sequentially in registration order. The
//! first failure propagates to the caller and later handlers do not run, so
//! a command that triggers a transition does not return until every side
//! effect has completed or one has failed.

use futures_util::future::BoxFuture;
use pawmed_domain::PetEvent;
use thiserror::Error;

use crate::application::ports::outbound::MessageBusError;

/// Future returned by an event handler
pub type HandlerFuture = BoxFuture<'static, Result<(), DispatchError>>;

/// An async handler for one event type
pub type PetEventHandler = Box<dyn Fn(PetEvent) -> HandlerFuture + Send + Sync>;

/// Errors surfaced while dispatching a domain event
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A registered handler failed; dispatch stopped at this handler
    #[error("Event handler failed: {0}")]
    Handler(String),
}

impl From<MessageBusError> for DispatchError {
    fn from(err: MessageBusError) -> Self {
        Self::Handler(err.to_string())
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Handler(err.to_string())
    }
}

/// Type-keyed registry of domain-event handlers
#[derive(Default)]
pub struct PetEventDispatcher {
    handlers: Vec<(&'static str, PetEventHandler)>,
}

impl PetEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler for one event type.
    ///
    /// `event_type` must be one of the `PetEvent` discriminator strings;
    /// the handler only runs for events of that type.
    pub fn register<F>(&mut self, event_type: &'static str, handler: F)
    where
        F: Fn(PetEvent) -> HandlerFuture + Send + Sync + 'static,
    {
        self.handlers.push((event_type, Box::new(handler)));
    }

    /// Invoke every handler registered for this event's type.
    ///
    /// Handlers run sequentially in registration order; the first failure
    /// is returned and later handlers are skipped.
    pub async fn dispatch(&self, event: &PetEvent) -> Result<(), DispatchError> {
        for (event_type, handler) in &self.handlers {
            if *event_type == event.event_type() {
                handler(event.clone()).await?;
            }
        }
        Ok(())
    }
}
