use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::CountdownError;

/// Ctrl+C flag shared with the signal handler.
///
/// The handler only sets the flag. The render loop and the animator poll it
/// between frames and own the cleanup output.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the process-wide Ctrl+C handler for this flag.
    pub fn install(&self) -> Result<(), ctrlc::Error> {
        let handle = self.clone();
        ctrlc::set_handler(move || handle.trigger())
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_interrupted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Returns `Err(Interrupted)` once the flag has been raised.
    pub fn check(&self) -> Result<(), CountdownError> {
        if self.is_interrupted() {
            Err(CountdownError::Interrupted)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_fails_only_after_trigger() {
        let interrupt = Interrupt::new();
        assert!(interrupt.check().is_ok());

        let handle = interrupt.clone();
        handle.trigger();

        assert!(interrupt.is_interrupted());
        assert!(matches!(interrupt.check(), Err(CountdownError::Interrupted)));
    }
}
