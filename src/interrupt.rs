//! Cooperative interruption of long-running arithmetic.
//!
//! The host (typically a SIGINT handler) sets a flag; every inner digit
//! loop in the kernel polls it and bails out with [`Error::Signal`] when it
//! is observed set. The kernel never sets or clears the flag itself.

use crate::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};

/// A host-settable cancellation probe.
pub trait Interrupt {
    /// Whether the host has requested that the current operation stop.
    fn pending(&self) -> bool;
}

/// An interrupt source that never fires.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Interrupt for Never {
    #[inline(always)]
    fn pending(&self) -> bool {
        false
    }
}

/// The usual host flag: a static `AtomicBool` written from a signal
/// handler. A relaxed load is enough; the flag is write-once from the
/// kernel's point of view within a single operation.
impl Interrupt for AtomicBool {
    #[inline(always)]
    fn pending(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Polls the flag; converts a pending interrupt into an error.
#[inline(always)]
pub(crate) fn test_int<I: Interrupt>(int: &I) -> Result<(), Error> {
    if int.pending() {
        Err(Error::Signal)
    } else {
        Ok(())
    }
}
