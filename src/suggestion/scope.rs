/// Guard for resources held while the suggestion dropdown is on screen.
///
/// `detach` runs exactly once: on `release`, or on drop if the guard is
/// dropped first (hidden widget, app teardown, early return on error).
pub struct InteractionScope {
    detach: Option<Box<dyn FnOnce()>>,
}

impl InteractionScope {
    pub fn acquire(attach: impl FnOnce(), detach: impl FnOnce() + 'static) -> Self {
        attach();
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    pub fn release(mut self) {
        self.run_detach();
    }

    fn run_detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for InteractionScope {
    fn drop(&mut self) {
        self.run_detach();
    }
}

impl std::fmt::Debug for InteractionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionScope")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counters() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
    }

    #[test]
    fn test_acquire_attaches_immediately() {
        let (attached, detached) = counters();
        let a = attached.clone();
        let d = detached.clone();
        let _scope = InteractionScope::acquire(move || a.set(a.get() + 1), move || d.set(d.get() + 1));
        assert_eq!(attached.get(), 1);
        assert_eq!(detached.get(), 0);
    }

    #[test]
    fn test_release_detaches_once() {
        let (_, detached) = counters();
        let d = detached.clone();
        let scope = InteractionScope::acquire(|| {}, move || d.set(d.get() + 1));
        scope.release();
        assert_eq!(detached.get(), 1);
    }

    #[test]
    fn test_drop_detaches() {
        let (_, detached) = counters();
        {
            let d = detached.clone();
            let _scope = InteractionScope::acquire(|| {}, move || d.set(d.get() + 1));
        }
        assert_eq!(detached.get(), 1);
    }

    #[test]
    fn test_detach_on_early_return() {
        fn mount(detached: Rc<Cell<u32>>, unmount_early: bool) -> Result<(), String> {
            let _scope =
                InteractionScope::acquire(|| {}, move || detached.set(detached.get() + 1));
            if unmount_early {
                return Err("unmounted".to_string());
            }
            Ok(())
        }

        let (_, detached) = counters();
        assert!(mount(detached.clone(), true).is_err());
        assert_eq!(detached.get(), 1);
    }
}
