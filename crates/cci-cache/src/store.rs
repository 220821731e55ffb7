use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

/// A keyed map guarded by a single exclusive lock.
///
/// Every operation holds the lock for its whole duration and does only map work
/// plus value clones inside it. Values handed out are copies; callers mutate
/// entries through the store's own accessors, never through returned values.
pub struct Store<K, V> {
    name: &'static str,
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> Store<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Name used in logs and errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Takes the store lock.
    ///
    /// Mutations are single map calls or field assignments, so a holder that
    /// panicked cannot leave an entry half-written. A poisoned lock is logged once,
    /// its poison flag cleared, and the entries kept.
    pub(crate) fn lock(&self) -> MutexGuard<'_, HashMap<K, V>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            let guard = poisoned.into_inner();
            tracing::error!(
                target: "cci.cache",
                store = self.name,
                entries = guard.len(),
                "{} store lock poisoned by a panicking holder; keeping its entries",
                self.name
            );
            self.entries.clear_poison();
            guard
        })
    }

    /// Stores `value` under `key`, replacing any previous entry, and returns it.
    pub fn set(&self, key: K, value: V) -> V {
        self.lock().insert(key, value.clone());
        value
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().get(key).cloned()
    }

    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains_key(key)
    }

    pub fn remove<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().remove(key);
    }

    /// A point-in-time copy of every entry.
    pub fn get_all(&self) -> HashMap<K, V> {
        self.lock().clone()
    }

    pub fn keys(&self) -> Vec<K> {
        self.lock().keys().cloned().collect()
    }

    pub fn remove_all(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Runs `f` against the entry for `key` while holding the lock.
    ///
    /// Returns `None` without calling `f` when the key is absent.
    pub(crate) fn update<Q, R>(&self, key: &Q, f: impl FnOnce(&mut V) -> R) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().get_mut(key).map(f)
    }
}

impl<K, V> fmt::Debug for Store<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}
