//! Shared, reference-counted pointer tracking per object type.
//!
//! Every instance of an object type reads the same pointer position. The first
//! instance to register subscribes one listener on the injected [`PointerSource`];
//! the last one to leave unsubscribes it. Many instances therefore never multiply
//! global listeners.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use quadlight_engine::coords::Vec2;
use quadlight_engine::input::{ListenerId, PointerHub, PointerMoveEvent, PointerSource};

/// Identifies an object type (the unit pointer state is shared across).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectTypeId(pub u32);

// ── PointerTracker ────────────────────────────────────────────────────────

/// Pointer state and listener ref-count for one object type.
///
/// Invariant: a listener is subscribed iff `ref_count() > 0`.
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Absolute screen position; written only by the listener.
    position: Rc<Cell<Vec2>>,
    refs: usize,
    listener: Option<ListenerId>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reference; subscribes the listener on the 0→1 transition.
    pub fn register<S: PointerSource + ?Sized>(&mut self, source: &mut S) {
        self.refs += 1;

        if self.refs == 1 && self.listener.is_none() {
            let position = Rc::clone(&self.position);
            let id = source.subscribe(Box::new(move |ev: PointerMoveEvent| {
                position.set(ev.position());
            }));
            self.listener = Some(id);
        }
    }

    /// Drops a reference; unsubscribes the listener when none remain.
    ///
    /// Unmatched calls clamp at zero. The stored position is left as-is.
    pub fn unregister<S: PointerSource + ?Sized>(&mut self, source: &mut S) {
        if self.refs == 0 {
            log::debug!("pointer tracker unregistered without a matching register; ignoring");
        }
        self.refs = self.refs.saturating_sub(1);

        if self.refs == 0 {
            if let Some(id) = self.listener.take() {
                source.unsubscribe(id);
            }
        }
    }

    /// Most recent absolute pointer position seen by the listener.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    #[inline]
    pub fn ref_count(&self) -> usize {
        self.refs
    }

    #[inline]
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }
}

// ── PointerRegistry ───────────────────────────────────────────────────────

/// A registry update that could not run because the pointer source was borrowed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Pending {
    Acquire(ObjectTypeId),
    Release(ObjectTypeId),
}

struct RegistryInner<S> {
    source: RefCell<S>,
    trackers: RefCell<HashMap<ObjectTypeId, PointerTracker>>,
    /// Applied, in order, as soon as `source` is free again.
    pending: RefCell<Vec<Pending>>,
}

/// Table of [`PointerTracker`]s keyed by object type, plus the pointer source they
/// subscribe to.
///
/// This is a cheap, cloneable handle to single-threaded shared state. All clones see
/// the same trackers. Pointer events and draw calls must arrive on the thread that
/// owns the registry, one at a time.
///
/// Registering or releasing while the source is in use (from inside
/// [`with_source`](Self::with_source), e.g. an instance dropped by a listener) is
/// deferred until the source is free; it is never lost.
pub struct PointerRegistry<S: PointerSource = PointerHub> {
    inner: Rc<RegistryInner<S>>,
}

impl<S: PointerSource> Clone for PointerRegistry<S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl Default for PointerRegistry<PointerHub> {
    fn default() -> Self {
        Self::new(PointerHub::new())
    }
}

impl<S: PointerSource> PointerRegistry<S> {
    pub fn new(source: S) -> Self {
        Self {
            inner: Rc::new(RegistryInner {
                source: RefCell::new(source),
                trackers: RefCell::new(HashMap::new()),
                pending: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Registers one instance of `ty` and returns a guard that releases it on drop.
    #[must_use = "dropping the registration releases it immediately"]
    pub fn register(&self, ty: ObjectTypeId) -> Registration<S> {
        self.acquire(ty);
        Registration { registry: self.clone(), ty, active: true }
    }

    /// Raw register: increments `ty`'s ref-count.
    ///
    /// Pair with [`release`](Self::release). Prefer [`register`](Self::register).
    pub fn acquire(&self, ty: ObjectTypeId) {
        self.submit(Pending::Acquire(ty));
    }

    /// Raw unregister: decrements `ty`'s ref-count, clamping at zero.
    pub fn release(&self, ty: ObjectTypeId) {
        self.submit(Pending::Release(ty));
    }

    /// Absolute pointer position for `ty`; zero if the type never registered.
    pub fn position(&self, ty: ObjectTypeId) -> Vec2 {
        self.read(ty, Vec2::zero(), PointerTracker::position)
    }

    pub fn ref_count(&self, ty: ObjectTypeId) -> usize {
        self.read(ty, 0, PointerTracker::ref_count)
    }

    pub fn is_listening(&self, ty: ObjectTypeId) -> bool {
        self.read(ty, false, PointerTracker::is_listening)
    }

    /// Runs `f` with the injected pointer source, then applies any registry updates
    /// `f` caused.
    ///
    /// # Panics
    ///
    /// If called again from inside `f`.
    pub fn with_source<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        let result = f(&mut *self.inner.source.borrow_mut());
        self.apply_pending();
        result
    }

    fn submit(&self, update: Pending) {
        self.inner.pending.borrow_mut().push(update);
        self.apply_pending();
    }

    fn apply_pending(&self) {
        let Ok(mut source) = self.inner.source.try_borrow_mut() else {
            log::debug!(
                "pointer source busy; {} registry update(s) deferred",
                self.inner.pending.borrow().len()
            );
            return;
        };

        // Applying an update may queue more (a source that re-enters on subscribe).
        loop {
            let batch = std::mem::take(&mut *self.inner.pending.borrow_mut());
            if batch.is_empty() {
                break;
            }
            for update in batch {
                self.apply(&mut *source, update);
            }
        }
    }

    fn apply(&self, source: &mut S, update: Pending) {
        let mut trackers = self.inner.trackers.borrow_mut();

        match update {
            Pending::Acquire(ty) => {
                let tracker = trackers.entry(ty).or_default();
                tracker.register(source);
                log::trace!("pointer tracking for {ty:?}: {} ref(s)", tracker.ref_count());
            }
            Pending::Release(ty) => match trackers.get_mut(&ty) {
                Some(tracker) => {
                    tracker.unregister(source);
                    log::trace!("pointer tracking for {ty:?}: {} ref(s)", tracker.ref_count());
                }
                None => log::debug!("release for unknown object type {ty:?}; ignoring"),
            },
        }
    }

    fn read<R>(&self, ty: ObjectTypeId, fallback: R, f: impl FnOnce(&PointerTracker) -> R) -> R {
        match self.inner.trackers.try_borrow() {
            Ok(trackers) => trackers.get(&ty).map_or(fallback, f),
            Err(_) => {
                log::debug!("pointer trackers busy while reading {ty:?}");
                fallback
            }
        }
    }
}

impl PointerRegistry<PointerHub> {
    /// Feeds a platform pointer move through the hub to every subscribed tracker.
    pub fn dispatch(&self, ev: PointerMoveEvent) {
        self.with_source(|hub| hub.dispatch(ev));
    }
}

impl<S: PointerSource> std::fmt::Debug for PointerRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.trackers.try_borrow() {
            Ok(trackers) => f.debug_struct("PointerRegistry").field("trackers", &*trackers).finish(),
            Err(_) => f.write_str("PointerRegistry { <borrowed> }"),
        }
    }
}

// ── Registration ──────────────────────────────────────────────────────────

/// One instance's hold on its type's pointer tracker.
///
/// Released exactly once: explicitly through [`release`](Self::release), or on drop.
pub struct Registration<S: PointerSource = PointerHub> {
    registry: PointerRegistry<S>,
    ty: ObjectTypeId,
    active: bool,
}

impl<S: PointerSource> Registration<S> {
    #[inline]
    pub fn object_type(&self) -> ObjectTypeId {
        self.ty
    }

    /// Absolute pointer position shared by every instance of this type.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.registry.position(self.ty)
    }

    #[inline]
    pub fn registry(&self) -> &PointerRegistry<S> {
        &self.registry
    }

    pub fn release(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if self.active {
            self.active = false;
            self.registry.release(self.ty);
        }
    }
}

impl<S: PointerSource> Drop for Registration<S> {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl<S: PointerSource> std::fmt::Debug for Registration<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("ty", &self.ty)
            .field("active", &self.active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRITE: ObjectTypeId = ObjectTypeId(1);
    const TILEMAP: ObjectTypeId = ObjectTypeId(2);

    fn hub_registry() -> PointerRegistry {
        PointerRegistry::default()
    }

    fn listeners(registry: &PointerRegistry) -> usize {
        registry.with_source(|hub| hub.listener_count())
    }

    // ── PointerTracker ────────────────────────────────────────────────────

    #[test]
    fn tracker_subscribes_once_for_many_registrations() {
        let mut hub = PointerHub::new();
        let mut tracker = PointerTracker::new();

        for _ in 0..3 {
            tracker.register(&mut hub);
        }

        assert_eq!(tracker.ref_count(), 3);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn tracker_n_registers_then_n_unregisters_detaches() {
        let mut hub = PointerHub::new();
        let mut tracker = PointerTracker::new();

        for _ in 0..4 {
            tracker.register(&mut hub);
        }
        for _ in 0..3 {
            tracker.unregister(&mut hub);
        }
        assert!(tracker.is_listening());

        tracker.unregister(&mut hub);
        assert!(!tracker.is_listening());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn tracker_extra_unregister_clamps_at_zero() {
        let mut hub = PointerHub::new();
        let mut tracker = PointerTracker::new();

        tracker.register(&mut hub);
        tracker.unregister(&mut hub);
        tracker.unregister(&mut hub);
        tracker.unregister(&mut hub);

        assert_eq!(tracker.ref_count(), 0);
        assert_eq!(hub.listener_count(), 0);

        // Still usable afterwards.
        tracker.register(&mut hub);
        assert_eq!(tracker.ref_count(), 1);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn tracker_most_recent_event_wins() {
        let mut hub = PointerHub::new();
        let mut tracker = PointerTracker::new();
        tracker.register(&mut hub);

        hub.dispatch(PointerMoveEvent::new(10.0, 20.0));
        hub.dispatch(PointerMoveEvent::new(30.0, 40.0));

        assert_eq!(tracker.position(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn tracker_position_is_stale_after_release() {
        let mut hub = PointerHub::new();
        let mut tracker = PointerTracker::new();
        tracker.register(&mut hub);
        hub.dispatch(PointerMoveEvent::new(7.0, 8.0));
        tracker.unregister(&mut hub);

        hub.dispatch(PointerMoveEvent::new(100.0, 100.0));
        assert_eq!(tracker.position(), Vec2::new(7.0, 8.0));
    }

    // ── PointerRegistry ───────────────────────────────────────────────────

    #[test]
    fn registry_unknown_type_reads_zero() {
        let registry = hub_registry();
        assert_eq!(registry.position(SPRITE), Vec2::zero());
        assert_eq!(registry.ref_count(SPRITE), 0);
        assert!(!registry.is_listening(SPRITE));
    }

    #[test]
    fn registry_types_are_tracked_independently() {
        let registry = hub_registry();
        let a = registry.register(SPRITE);
        let b = registry.register(SPRITE);
        let c = registry.register(TILEMAP);

        assert_eq!(listeners(&registry), 2);
        assert_eq!(registry.ref_count(SPRITE), 2);
        assert_eq!(registry.ref_count(TILEMAP), 1);

        drop(c);
        assert!(!registry.is_listening(TILEMAP));
        assert!(registry.is_listening(SPRITE));
        assert_eq!(listeners(&registry), 1);

        drop((a, b));
        assert_eq!(listeners(&registry), 0);
    }

    #[test]
    fn registry_dispatch_updates_shared_position() {
        let registry = hub_registry();
        let a = registry.register(SPRITE);
        let b = registry.register(SPRITE);

        registry.dispatch(PointerMoveEvent::new(120.0, 64.0));

        assert_eq!(a.position(), Vec2::new(120.0, 64.0));
        assert_eq!(b.position(), Vec2::new(120.0, 64.0));
    }

    #[test]
    fn registry_raw_release_more_than_acquire_is_harmless() {
        let registry = hub_registry();
        registry.acquire(SPRITE);
        registry.acquire(SPRITE);
        for _ in 0..5 {
            registry.release(SPRITE);
        }
        registry.release(TILEMAP);

        assert_eq!(registry.ref_count(SPRITE), 0);
        assert_eq!(listeners(&registry), 0);
    }

    // ── Registration ──────────────────────────────────────────────────────

    #[test]
    fn registration_explicit_release_then_drop_releases_once() {
        let registry = hub_registry();
        let keep = registry.register(SPRITE);
        let gone = registry.register(SPRITE);

        gone.release();
        assert_eq!(registry.ref_count(SPRITE), 1);
        assert!(registry.is_listening(SPRITE));

        drop(keep);
        assert_eq!(registry.ref_count(SPRITE), 0);
    }

    #[test]
    fn registration_released_during_unwind() {
        let registry = hub_registry();
        let r = registry.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _held = r.register(SPRITE);
            panic!("instance teardown failed");
        }));

        assert!(result.is_err());
        assert_eq!(registry.ref_count(SPRITE), 0);
        assert_eq!(listeners(&registry), 0);
    }

    // ── re-entrancy ───────────────────────────────────────────────────────

    #[test]
    fn release_inside_with_source_applies_once_source_is_free() {
        let registry = hub_registry();
        let held = registry.register(SPRITE);

        registry.with_source(move |hub| {
            drop(held);
            // Still subscribed while the hub is borrowed.
            assert_eq!(hub.listener_count(), 1);
        });

        assert_eq!(registry.ref_count(SPRITE), 0);
        assert!(!registry.is_listening(SPRITE));
        assert_eq!(listeners(&registry), 0);
    }

    #[test]
    fn readers_work_inside_with_source() {
        let registry = hub_registry();
        let held = registry.register(SPRITE);
        registry.dispatch(PointerMoveEvent::new(12.0, 34.0));

        let (position, refs, listening) =
            registry.with_source(|_| (held.position(), registry.ref_count(SPRITE), registry.is_listening(SPRITE)));

        assert_eq!(position, Vec2::new(12.0, 34.0));
        assert_eq!(refs, 1);
        assert!(listening);
    }

    #[test]
    fn register_inside_with_source_is_deferred_not_lost() {
        let registry = hub_registry();

        let held = registry.with_source(|hub| {
            let held = registry.register(TILEMAP);
            assert_eq!(hub.listener_count(), 0);
            held
        });

        assert_eq!(registry.ref_count(TILEMAP), 1);
        assert_eq!(listeners(&registry), 1);

        drop(held);
        assert_eq!(listeners(&registry), 0);
    }
}
