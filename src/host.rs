use std::cell::{Cell, RefCell};
use std::rc::Rc;

use unsegen::input::Key;

pub type KeyHandler = Rc<dyn Fn(&Key)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListenerId(usize);

#[derive(Default)]
struct DocumentInner {
    listeners: RefCell<Vec<(ListenerId, KeyHandler)>>,
    next_listener: Cell<usize>,
    scroll_locks: Cell<usize>,
}

/// The environment hosting the widgets: a global keyboard listener registry
/// and the background scroll lock.
///
/// Cloning yields another handle to the same document. Registrations are
/// handed out as guards which release themselves when dropped.
#[derive(Clone, Default)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn add_key_listener<F>(&self, handler: F) -> KeyListener
    where
        F: Fn(&Key) + 'static,
    {
        let id = ListenerId(self.inner.next_listener.get());
        self.inner.next_listener.set(id.0 + 1);

        let handler: KeyHandler = Rc::new(handler);
        self.inner.listeners.borrow_mut().push((id, handler));

        log::debug!("Added key listener {}", id.0);

        KeyListener {
            document: self.clone(),
            id,
        }
    }

    pub fn lock_scroll(&self) -> ScrollLock {
        let locks = self.inner.scroll_locks.get() + 1;
        self.inner.scroll_locks.set(locks);
        log::debug!("Background scrolling locked ({} holders)", locks);

        ScrollLock {
            document: self.clone(),
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.inner.scroll_locks.get() > 0
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Calls every registered listener once with `key`. Returns the number
    /// of listeners that were called.
    ///
    /// Listeners added while dispatching wait for the next key; listeners
    /// removed while dispatching are skipped.
    pub fn dispatch_key(&self, key: &Key) -> usize {
        let handlers: Vec<(ListenerId, KeyHandler)> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(id, handler)| (*id, handler.clone()))
            .collect();

        let mut called = 0;
        for (id, handler) in handlers.iter() {
            if !self.is_registered(*id) {
                log::debug!("Skipping removed key listener {}", id.0);
                continue;
            }
            handler(key);
            called += 1;
        }

        called
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.inner
            .listeners
            .borrow()
            .iter()
            .any(|(listener, _)| *listener == id)
    }

    fn remove_listener(&self, id: ListenerId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(listener, _)| *listener != id);
        log::debug!("Removed key listener {}", id.0);
    }

    fn unlock_scroll(&self) {
        let locks = self.inner.scroll_locks.get().saturating_sub(1);
        self.inner.scroll_locks.set(locks);
        log::debug!("Background scroll lock released ({} holders)", locks);
    }
}

/// Keeps a key listener registered for as long as it lives.
pub struct KeyListener {
    document: Document,
    id: ListenerId,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.document.remove_listener(self.id);
    }
}

/// Suppresses background scrolling for as long as it lives.
pub struct ScrollLock {
    document: Document,
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.document.unlock_scroll();
    }
}
