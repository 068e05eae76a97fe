//! Scripted relocation assistant.
//!
//! DESIGN
//! ======
//! The assistant is a stage counter over a fixed reply table, advanced once
//! per user input; the input text itself never branches the conversation.
//! Past the end of the table every input gets the same fallback. The counter
//! is ephemeral by choice: reopening the assistant starts the tour over.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::seed;

/// One assistant turn: the message, tappable suggestion chips, and an
/// optional route the UI should switch to alongside rendering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: &'static str,
    pub suggestions: &'static [&'static str],
    pub navigate_to: Option<&'static str>,
}

#[derive(Clone)]
pub struct Assistant {
    script: &'static [AssistantReply],
    stage: Arc<Mutex<usize>>,
}

impl Assistant {
    #[must_use]
    pub fn new() -> Self {
        Self { script: &seed::ASSISTANT_SCRIPT, stage: Arc::new(Mutex::new(0)) }
    }

    /// Answer one user input and advance the stage.
    pub fn reply(&self, user_input: &str) -> AssistantReply {
        let mut stage = self.lock();
        let reply = self
            .script
            .get(*stage)
            .copied()
            .unwrap_or(seed::ASSISTANT_FALLBACK);
        debug!(stage = *stage, user_input, "assistant turn");
        *stage = (*stage + 1).min(self.script.len());
        reply
    }

    /// How many inputs have been consumed, capped at the script length.
    #[must_use]
    pub fn stage(&self) -> usize {
        *self.lock()
    }

    /// Rewind to the greeting.
    pub fn reset(&self) {
        *self.lock() = 0;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, usize> {
        self.stage
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "assistant_test.rs"]
mod tests;
