//! Plugin store: the upstream source of truth for plugin lists.
//!
//! Lives on the UI thread. Subscribers receive a bare "changed" notification
//! and pull the current state themselves.

use pluglist_types::{Plugin, PluginListState, SitePluginCapabilities, SiteRef};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use tracing::debug;

struct Subscriber {
    id: u64,
    site: SiteRef,
    tx: Sender<()>,
}

#[derive(Default)]
struct StoreInner {
    sites: HashMap<SiteRef, PluginListState>,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl StoreInner {
    fn notify(&mut self, site: &SiteRef) {
        self.subscribers.retain(|subscriber| {
            if &subscriber.site != site {
                return true;
            }
            subscriber.tx.send(()).is_ok()
        });
    }
}

#[derive(Clone, Default)]
pub struct PluginStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl PluginStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for a site. Sites never loaded report `Loading`.
    pub fn state(&self, site: &SiteRef) -> PluginListState {
        self.inner
            .borrow()
            .sites
            .get(site)
            .cloned()
            .unwrap_or(PluginListState::Loading)
    }

    /// Register for change notifications on `site`. Dropping the receipt unsubscribes.
    pub fn subscribe(&self, site: &SiteRef) -> Receipt {
        let (tx, rx) = channel();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push(Subscriber {
            id,
            site: site.clone(),
            tx,
        });
        debug!(site = %site, id, "store subscription added");

        Receipt {
            id,
            rx,
            store: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    pub fn start_loading(&self, site: &SiteRef) {
        self.set_state(site, PluginListState::Loading);
    }

    pub fn receive_plugins(
        &self,
        site: &SiteRef,
        plugins: Vec<Plugin>,
        capabilities: SitePluginCapabilities,
    ) {
        self.set_state(
            site,
            PluginListState::Loaded {
                plugins,
                capabilities,
            },
        );
    }

    pub fn fail(&self, site: &SiteRef, message: impl Into<String>) {
        self.set_state(
            site,
            PluginListState::Failed {
                message: message.into(),
            },
        );
    }

    /// Apply `f` to one plugin. Returns false, without notifying, when the
    /// site is not loaded or has no plugin with that slug.
    pub fn update_plugin<F>(&self, site: &SiteRef, slug: &str, f: F) -> bool
    where
        F: FnOnce(&mut Plugin),
    {
        let mut inner = self.inner.borrow_mut();
        let Some(PluginListState::Loaded { plugins, .. }) = inner.sites.get_mut(site) else {
            return false;
        };
        let Some(plugin) = plugins.iter_mut().find(|plugin| plugin.slug == slug) else {
            return false;
        };

        f(plugin);
        inner.notify(site);
        true
    }

    fn set_state(&self, site: &SiteRef, state: PluginListState) {
        let mut inner = self.inner.borrow_mut();
        inner.sites.insert(site.clone(), state);
        inner.notify(site);
    }
}

/// Subscription handle returned by [`PluginStore::subscribe`]
pub struct Receipt {
    id: u64,
    rx: Receiver<()>,
    store: Weak<RefCell<StoreInner>>,
}

impl Receipt {
    /// Consume one pending notification, if any
    pub fn try_next(&self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => false,
        }
    }
}

impl Drop for Receipt {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store
                .borrow_mut()
                .subscribers
                .retain(|subscriber| subscriber.id != self.id);
            debug!(id = self.id, "store subscription removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteRef {
        SiteRef::new(7, "admin")
    }

    #[test]
    fn test_unknown_site_is_loading() {
        let store = PluginStore::new();
        assert_eq!(store.state(&site()), PluginListState::Loading);
    }

    #[test]
    fn test_subscriber_notified_per_mutation() {
        let store = PluginStore::new();
        let receipt = store.subscribe(&site());

        store.receive_plugins(
            &site(),
            vec![Plugin::new("akismet", "Akismet")],
            SitePluginCapabilities::default(),
        );
        assert!(store.update_plugin(&site(), "akismet", |p| p.active = true));

        assert!(receipt.try_next());
        assert!(receipt.try_next());
        assert!(!receipt.try_next());
        assert!(store.state(&site()).plugins()[0].active);
    }

    #[test]
    fn test_other_sites_do_not_notify() {
        let store = PluginStore::new();
        let receipt = store.subscribe(&site());
        store.fail(&SiteRef::new(8, "admin"), "offline");
        assert!(!receipt.try_next());
    }

    #[test]
    fn test_update_unknown_slug_is_noop() {
        let store = PluginStore::new();
        store.receive_plugins(&site(), vec![], SitePluginCapabilities::default());
        let receipt = store.subscribe(&site());

        assert!(!store.update_plugin(&site(), "missing", |p| p.active = true));
        assert!(!receipt.try_next());
    }

    #[test]
    fn test_drop_receipt_unsubscribes() {
        let store = PluginStore::new();
        let receipt = store.subscribe(&site());
        assert_eq!(store.subscriber_count(), 1);
        drop(receipt);
        assert_eq!(store.subscriber_count(), 0);
    }
}
