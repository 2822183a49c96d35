//! Observable value holders.
//!
//! A [`Writable`] keeps one value and notifies every [`StoreReceiver`] when it
//! changes. Notifications coalesce: a receiver that falls behind only sees the
//! latest value. [`derived`] builds a read-only store recomputed from another.
use std::sync::Arc;

use futures::{stream, Stream};
use tokio::sync::watch;
use tracing::{debug, trace};

pub mod app;

/// Anything a [`StoreReceiver`] can be taken from.
pub trait Subscribe<T> {
    fn subscribe(&self) -> StoreReceiver<T>;
}

#[derive(Debug)]
pub struct Writable<T> {
    name: &'static str,
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Writable {
            name: self.name,
            sender: self.sender.clone(),
        }
    }
}

impl<T> Writable<T> {
    pub fn new(name: &'static str, initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Writable {
            name,
            sender: Arc::new(sender),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.sender.borrow())
    }

    pub fn set(&self, value: T) {
        self.sender.send_replace(value);
        trace!(store = self.name, "store set");
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.sender.send_modify(f);
        trace!(store = self.name, "store updated");
    }

    /// Like [`Writable::update`] but subscribers are only woken when `f` returns `true`.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let modified = self.sender.send_if_modified(f);
        trace!(store = self.name, modified, "store conditional update");
        modified
    }

    pub fn readable(&self) -> Readable<T> {
        Readable {
            name: self.name,
            sender: self.sender.clone(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<T: Clone> Writable<T> {
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }
}

impl<T> Subscribe<T> for Writable<T> {
    fn subscribe(&self) -> StoreReceiver<T> {
        debug!(store = self.name, "new subscriber");
        StoreReceiver {
            name: self.name,
            receiver: self.sender.subscribe(),
        }
    }
}

/// Read-only handle onto a store.
#[derive(Debug)]
pub struct Readable<T> {
    name: &'static str,
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for Readable<T> {
    fn clone(&self) -> Self {
        Readable {
            name: self.name,
            sender: self.sender.clone(),
        }
    }
}

impl<T> Readable<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.sender.borrow())
    }
}

impl<T: Clone> Readable<T> {
    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }
}

impl<T> Subscribe<T> for Readable<T> {
    fn subscribe(&self) -> StoreReceiver<T> {
        debug!(store = self.name, "new subscriber");
        StoreReceiver {
            name: self.name,
            receiver: self.sender.subscribe(),
        }
    }
}

pub struct StoreReceiver<T> {
    name: &'static str,
    receiver: watch::Receiver<T>,
}

impl<T: Clone> StoreReceiver<T> {
    /// Latest value, marking it as seen.
    pub fn current(&mut self) -> T {
        self.receiver.borrow_and_update().clone()
    }

    /// Wait for the next change. `None` once every handle to the store is dropped.
    pub async fn recv(&mut self) -> Option<T> {
        match self.receiver.changed().await {
            Ok(()) => Some(self.current()),
            Err(_) => {
                debug!(store = self.name, "store closed");
                None
            }
        }
    }

    /// The current value followed by every later change.
    pub fn into_stream(mut self) -> impl Stream<Item = T> {
        let first = self.current();
        stream::unfold((self, Some(first)), |(mut receiver, first)| async move {
            match first {
                Some(value) => Some((value, (receiver, None))),
                None => receiver.recv().await.map(|value| (value, (receiver, None))),
            }
        })
    }
}

/// Read-only store holding `f` applied to `source`, kept up to date by a spawned task.
///
/// Must be called from within a Tokio runtime. The task ends when the source is
/// dropped, or on the first source change after the derived store is dropped.
pub fn derived<S, T, F>(name: &'static str, source: &impl Subscribe<S>, f: F) -> Readable<T>
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static,
    F: Fn(&S) -> T + Send + 'static,
{
    let mut source = source.subscribe();
    let initial = f(&*source.receiver.borrow_and_update());
    let (sender, _) = watch::channel(initial);
    let sender = Arc::new(sender);
    let weak = Arc::downgrade(&sender);

    tokio::spawn(async move {
        while source.receiver.changed().await.is_ok() {
            let Some(sender) = weak.upgrade() else {
                break;
            };
            let next = f(&*source.receiver.borrow_and_update());
            sender.send_replace(next);
        }
        debug!(store = name, "derived store stopped");
    });

    Readable { name, sender }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn set_then_get_round_trips() {
        let page = Writable::new("page", "landing".to_string());
        assert_eq!(page.get(), "landing");

        page.set("portfolio".to_string());
        assert_eq!(page.get(), "portfolio");
        assert_eq!(page.readable().get(), "portfolio");
    }

    #[test]
    fn update_mutates_in_place() {
        let list = Writable::new("list", vec![1, 2]);
        list.update(|values| values.push(3));
        assert_eq!(list.with(|values| values.len()), 3);

        assert!(!list.update_if(|_| false));
        assert!(list.update_if(|values| {
            values.clear();
            true
        }));
        assert!(list.get().is_empty());
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = Writable::new("counter", 0u32);
        let mut receiver = store.subscribe();
        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(receiver.current(), 0);

        store.set(1);
        store.set(2);
        // intermediate values coalesce
        assert_eq!(receiver.recv().await, Some(2));

        store.update(|n| *n += 1);
        assert_eq!(receiver.recv().await, Some(3));

        drop(store);
        assert_eq!(receiver.recv().await, None);
    }

    #[tokio::test]
    async fn stream_starts_with_current_value() {
        let store = Writable::new("page", "landing".to_string());
        let mut stream = Box::pin(store.subscribe().into_stream());

        assert_eq!(stream.next().await.as_deref(), Some("landing"));
        store.set("holders".to_string());
        assert_eq!(stream.next().await.as_deref(), Some("holders"));
    }

    #[tokio::test]
    async fn derived_recomputes_on_change() {
        let page = Writable::new("page", "landing".to_string());
        let on_landing = derived("on_landing", &page, |page: &String| page == "landing");
        assert!(on_landing.get());

        let mut receiver = on_landing.subscribe();
        page.set("holders".to_string());
        assert_eq!(receiver.recv().await, Some(false));
        assert!(!on_landing.get());
    }

    #[tokio::test]
    async fn derived_receiver_closes_when_store_dropped() {
        let source = Writable::new("numbers", vec![1, 2, 3]);
        let total = derived("total", &source, |values: &Vec<i32>| values.iter().sum::<i32>());
        assert_eq!(total.get(), 6);

        source.update(|values| values.push(4));
        let mut receiver = total.subscribe();
        assert_eq!(receiver.recv().await, Some(10));

        drop(total);
        assert_eq!(receiver.recv().await, None);
    }
}
