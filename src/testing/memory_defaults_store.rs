use std::cell::RefCell;

use crate::domain::{AppError, LocalDefaults};
use crate::ports::DefaultsStore;

#[derive(Default)]
pub struct MemoryDefaultsStore {
    pub stored: RefCell<LocalDefaults>,
    pub saves: RefCell<usize>,
}

impl MemoryDefaultsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(defaults: LocalDefaults) -> Self {
        Self { stored: RefCell::new(defaults), saves: RefCell::new(0) }
    }

    pub fn current(&self) -> LocalDefaults {
        self.stored.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl DefaultsStore for MemoryDefaultsStore {
    fn load(&self) -> LocalDefaults {
        self.stored.borrow().clone()
    }

    fn save(&self, defaults: &LocalDefaults) -> Result<(), AppError> {
        *self.stored.borrow_mut() = defaults.clone();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
