#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use typebus::{Handler, Message};

// ============================================================================
// Test Message Types
// ============================================================================

#[derive(Clone, Debug)]
pub struct TextMessage {
    pub content: String,
}
impl Message for TextMessage {}

#[derive(Clone, Debug)]
pub struct CounterMessage {
    pub value: u64,
}
impl Message for CounterMessage {}

/// Never registered anywhere; exercises the unhandled path.
#[derive(Clone, Debug)]
pub struct StrayMessage {
    pub id: u64,
}
impl Message for StrayMessage {}

// ============================================================================
// Failure type reported by test handlers
// ============================================================================

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("handler refused: {reason}")]
pub struct HandlerFailure {
    pub reason: String,
}

impl HandlerFailure {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// Test Handlers
// ============================================================================

pub struct CountingHandler {
    pub calls: Arc<AtomicUsize>,
}

impl Handler<CounterMessage> for CountingHandler {
    type Error = HandlerFailure;

    fn call(&self, _message: CounterMessage) -> Result<(), HandlerFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct CollectingHandler {
    pub received: Arc<Mutex<Vec<String>>>,
}

impl Handler<TextMessage> for CollectingHandler {
    type Error = HandlerFailure;

    fn call(&self, message: TextMessage) -> Result<(), HandlerFailure> {
        self.received.lock().unwrap().push(message.content);
        Ok(())
    }
}

/// Runs, records the call, then reports a failure.
pub struct FailingHandler {
    pub calls: Arc<AtomicUsize>,
    pub reason: &'static str,
}

impl Handler<TextMessage> for FailingHandler {
    type Error = HandlerFailure;

    fn call(&self, _message: TextMessage) -> Result<(), HandlerFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(HandlerFailure::new(self.reason))
    }
}
