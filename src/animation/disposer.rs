/// Cleanups collected while wiring up animations on mount. They all run, in
/// reverse registration order, when the owner unmounts or the list is dropped.
#[derive(Default)]
pub struct Disposers {
    pending: Vec<Box<dyn FnOnce()>>,
}

impl Disposers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cleanup: impl FnOnce() + 'static) {
        self.pending.push(Box::new(cleanup));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Runs everything registered so far. Later calls only see cleanups
    /// pushed after this one.
    pub fn dispose(&mut self) {
        while let Some(cleanup) = self.pending.pop() {
            cleanup();
        }
    }
}

impl Drop for Disposers {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runs_in_reverse_order_exactly_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut disposers = Disposers::new();
        for name in ["listener", "frame", "styles"] {
            let log = log.clone();
            disposers.push(move || log.borrow_mut().push(name));
        }
        assert!(!disposers.is_empty());

        disposers.dispose();
        disposers.dispose();
        assert!(disposers.is_empty());
        assert_eq!(*log.borrow(), vec!["styles", "frame", "listener"]);
    }

    #[test]
    fn drop_disposes() {
        let hits = Rc::new(RefCell::new(0));
        {
            let mut disposers = Disposers::new();
            let hits = hits.clone();
            disposers.push(move || *hits.borrow_mut() += 1);
        }
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn empty_list_is_a_no_op() {
        let mut disposers = Disposers::new();
        disposers.dispose();
        assert!(disposers.is_empty());
    }
}
