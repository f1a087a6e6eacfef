use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Slot<T> {
    value: T,
    /// Kept in registration order; ids are never reused.
    observers: Vec<(u64, Observer<T>)>,
    next_id: u64,
    /// Bumped by every write; a round stops once a newer write has notified.
    version: u64,
    disposed: bool,
}

struct Shared<T> {
    slot: Mutex<Slot<T>>,
    /// Serializes notification rounds so observers see values in the order
    /// they were written. Reentrant so an observer may write back; the
    /// nested write supersedes the rest of the outer round.
    notify: ReentrantMutex<()>,
}

/// Owning side of an observable value.
///
/// Only code holding a `ValueHolder` can change the value. Everyone else gets
/// an [`Observable`] from [`ValueHolder::observe`], which can read and
/// subscribe but never write.
pub struct ValueHolder<T> {
    shared: Arc<Shared<T>>,
}

/// Read-only view of a [`ValueHolder`].
pub struct Observable<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for ValueHolder<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Default + Clone + Send + 'static> Default for ValueHolder<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + 'static> ValueHolder<T> {
    pub fn new(initial: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot {
                    value: initial,
                    observers: Vec::new(),
                    next_id: 0,
                    version: 0,
                    disposed: false,
                }),
                notify: ReentrantMutex::new(()),
            }),
        }
    }

    /// Read-only handle for consumers.
    pub fn observe(&self) -> Observable<T> {
        Observable {
            shared: Arc::clone(&self.shared),
        }
    }

    pub fn get(&self) -> T {
        self.shared.slot.lock().value.clone()
    }

    /// Replace the value and notify every subscriber, in registration order.
    ///
    /// Equal values still notify. Returns `false` (and changes nothing) once
    /// the holder has been disposed.
    pub fn set(&self, value: T) -> bool {
        self.mutate(move |current| *current = value)
    }

    /// Read-modify-write under the lock, then notify like [`ValueHolder::set`].
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        self.mutate(f)
    }

    /// Drop every subscriber and turn later writes into no-ops.
    pub fn dispose(&self) {
        let _round = self.shared.notify.lock();
        let mut slot = self.shared.slot.lock();
        slot.disposed = true;
        slot.observers.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.slot.lock().disposed
    }

    fn mutate(&self, f: impl FnOnce(&mut T)) -> bool {
        let _round = self.shared.notify.lock();
        let (version, snapshot, observers) = {
            let mut slot = self.shared.slot.lock();
            if slot.disposed {
                return false;
            }
            f(&mut slot.value);
            slot.version = slot.version.wrapping_add(1);
            let observers: Vec<Observer<T>> = slot
                .observers
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect();
            (slot.version, slot.value.clone(), observers)
        };

        // Called without the slot lock so observers can read or unsubscribe.
        for observer in observers {
            if self.shared.slot.lock().version != version {
                // An observer wrote a newer value, which everyone has seen.
                break;
            }
            observer(&snapshot);
        }
        true
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn get(&self) -> T {
        self.shared.slot.lock().value.clone()
    }

    /// Register `observer` to be called with each new value.
    ///
    /// The observer is not called with the current value; read it with
    /// [`Observable::get`] first if needed. Dropping the returned handle
    /// unsubscribes.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let mut slot = self.shared.slot.lock();
        let id = slot.next_id;
        slot.next_id += 1;
        if !slot.disposed {
            slot.observers.push((id, Arc::new(observer)));
        }
        drop(slot);

        let shared: Arc<dyn Detach> = self.shared.clone();
        Subscription {
            target: Some(Arc::downgrade(&shared)),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.slot.lock().observers.len()
    }
}

trait Detach: Send + Sync {
    fn detach(&self, id: u64);
}

impl<T: Send> Detach for Shared<T> {
    fn detach(&self, id: u64) {
        self.slot.lock().observers.retain(|(other, _)| *other != id);
    }
}

/// Handle returned by [`Observable::subscribe`].
///
/// The observer stays registered for as long as this handle lives.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    target: Option<Weak<dyn Detach>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(shared) = self.target.take().and_then(|weak| weak.upgrade()) {
            shared.detach(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.target.is_some())
            .finish()
    }
}
