use super::types::PointerMoveEvent;

/// Callback invoked for every pointer move delivered by a [`PointerSource`].
pub type PointerListener = Box<dyn FnMut(PointerMoveEvent)>;

/// Handle returned by [`PointerSource::subscribe`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

/// Subscribe/unsubscribe capability of a global pointer-move surface.
///
/// Hosts inject an implementation instead of letting consumers reach for an ambient
/// event target, which keeps consumers testable without a live window.
pub trait PointerSource {
    fn subscribe(&mut self, listener: PointerListener) -> ListenerId;

    /// Removes a listener. Returns `false` if `id` was not subscribed.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;
}

/// In-process pointer-move broadcaster.
///
/// The runtime (or a test) feeds platform events in through [`dispatch`]; every
/// listener sees each event synchronously, in subscription order.
#[derive(Default)]
pub struct PointerHub {
    listeners: Vec<(ListenerId, PointerListener)>,
    next_id: u64,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `ev` to every subscribed listener.
    pub fn dispatch(&mut self, ev: PointerMoveEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(ev);
        }
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl PointerSource for PointerHub {
    fn subscribe(&mut self, listener: PointerListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        log::trace!("pointer listener {id:?} subscribed ({} active)", self.listeners.len());
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        let removed = self.listeners.len() != before;
        if removed {
            log::trace!("pointer listener {id:?} unsubscribed ({} active)", self.listeners.len());
        }
        removed
    }
}

impl std::fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
