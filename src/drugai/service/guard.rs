use crate::error::{DrugaiError, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Loading flag for one endpoint: at most one request is outstanding.
#[derive(Debug, Default)]
pub struct InFlight {
    busy: AtomicBool,
}

/// Held for the duration of a request; dropping it clears the flag.
#[derive(Debug)]
pub struct InFlightTicket<'a> {
    flag: &'a AtomicBool,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Fails with [`DrugaiError::Busy`] while another ticket is alive.
    pub fn try_begin(&self) -> Result<InFlightTicket<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| DrugaiError::Busy)?;
        Ok(InFlightTicket { flag: &self.busy })
    }
}

impl Drop for InFlightTicket<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
