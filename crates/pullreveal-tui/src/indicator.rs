use std::cell::Cell;
use std::rc::Rc;

use pullreveal_core::LoadIndicator;

/// Busy flag of a region, shared between the coordinator and the widget
#[derive(Debug, Clone, Default)]
pub struct RegionIndicator {
    busy: Rc<Cell<bool>>,
}

impl RegionIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

impl LoadIndicator for RegionIndicator {
    fn loading(&mut self) {
        self.busy.set(true);
    }

    fn reset(&mut self) {
        self.busy.set(false);
    }
}
