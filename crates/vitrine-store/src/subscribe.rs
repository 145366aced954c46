//! Subscriber registry for store change notifications.
//!
//! Callbacks run synchronously inside the mutation that triggered them,
//! in the single-threaded cooperative model the stores assume. A
//! callback must not call back into the store that is notifying it.

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A registry of change callbacks, notified in subscription order.
pub struct Subscribers<T> {
    next_id: u64,
    entries: Vec<(u64, Box<dyn FnMut(&T)>)>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Register a callback; returns the id needed to unsubscribe.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriberId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        SubscriberId(id)
    }

    /// Remove a callback. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id.0);
        self.entries.len() < len_before
    }

    /// Invoke every callback with the new state.
    pub fn notify(&mut self, value: &T) {
        for (_, callback) in &mut self.entries {
            callback(value);
        }
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}
