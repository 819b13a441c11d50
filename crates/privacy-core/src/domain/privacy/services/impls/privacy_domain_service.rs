// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use privacy_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynPresenceFilterService, DynPresenceService,
    DynPrivacyListService, DynPrivacyListsRepository,
};
use crate::domain::presence::models::OutboundPresence;
use crate::domain::privacy::models::{PrivacyList, PrivacyRule};
use crate::ClientEvent;

use super::super::PrivacyDomainService as PrivacyDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct PrivacyDomainService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    presence_filter_service: DynPresenceFilterService,
    presence_service: DynPresenceService,
    privacy_list_service: DynPrivacyListService,
    privacy_lists_repo: DynPrivacyListsRepository,

    /// Serializes all operations which modify lists, so that the cache always reflects the
    /// last acknowledgement of the server.
    #[state]
    write_lock: Mutex<()>,
    #[state]
    state: RwLock<SessionState>,
}

#[derive(Default)]
struct SessionState {
    is_initialized: bool,
    is_supported: bool,
    /// The list to reactivate when leaving invisible mode.
    previously_active_list: Option<String>,
}

#[async_trait]
impl PrivacyDomainServiceTrait for PrivacyDomainService {
    async fn initialize(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.initialize_locked().await?;
        Ok(())
    }

    async fn get_privacy_list(&self, name: &str) -> Result<Option<PrivacyList>> {
        if !self.ensure_initialized().await? {
            return Ok(None);
        }

        if let Some(list) = self.privacy_lists_repo.get(name) {
            return Ok(Some(list));
        }

        let _guard = self.write_lock.lock().await;
        Ok(Some(self.get_or_create_list_locked(name).await?))
    }

    async fn get_privacy_lists(&self) -> Result<Vec<PrivacyList>> {
        if !self.ensure_initialized().await? {
            return Ok(vec![]);
        }

        Ok(self
            .privacy_lists_repo
            .get_all()
            .into_iter()
            .filter(|list| !self.ctx.is_invisible_list_name(&list.name))
            .collect())
    }

    async fn get_active_list(&self) -> Result<Option<PrivacyList>> {
        if !self.ensure_initialized().await? {
            return Ok(None);
        }
        Ok(self.privacy_lists_repo.get_active())
    }

    async fn get_default_list(&self) -> Result<Option<PrivacyList>> {
        if !self.ensure_initialized().await? {
            return Ok(None);
        }
        Ok(self.privacy_lists_repo.get_default())
    }

    async fn set_list_as_active(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }
        self.activate_list_locked(name).await
    }

    async fn set_list_as_default(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }

        self.privacy_list_service.set_default_list(name).await?;
        self.ensure_list_is_cached(name).await?;
        self.privacy_lists_repo.set_default(Some(name));

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PrivacyListSetAsDefault {
                name: name.to_string(),
            });

        Ok(())
    }

    async fn decline_active_list(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }
        self.decline_active_list_locked().await
    }

    async fn decline_default_list(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }

        self.privacy_list_service.decline_default_list().await?;

        if let Some(previous) = self.privacy_lists_repo.set_default(None) {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::PrivacyListRemovedAsDefault {
                    name: previous.name,
                });
        }

        Ok(())
    }

    async fn remove_privacy_list(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }

        self.privacy_list_service.delete_privacy_list(name).await?;

        if let Some(removed) = self.privacy_lists_repo.delete(name) {
            if removed.is_active {
                self.remove_indicators(&removed).await;
            }
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PrivacyListsChanged);

        Ok(())
    }

    async fn add_rule(&self, list_name: &str, rule: PrivacyRule) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }

        let mut list = self.get_or_create_list_locked(list_name).await?;
        list.add_rule(rule.clone())?;

        self.privacy_list_service.save_privacy_list(&list).await?;
        self.privacy_lists_repo.put(list);

        if let Err(err) = self
            .presence_filter_service
            .rule_added(list_name, &rule)
            .await
        {
            warn!("Failed to apply rule {} of list '{}'. {}", rule.order, list_name, err);
        }

        Ok(())
    }

    async fn remove_rule(&self, list_name: &str, order: u32) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }

        let Some(mut list) = self.privacy_lists_repo.get(list_name) else {
            bail!("Unknown privacy list '{}'.", list_name);
        };
        let rule = list.remove_rule(order)?;

        self.privacy_list_service.save_privacy_list(&list).await?;
        self.privacy_lists_repo.put(list);

        if let Err(err) = self
            .presence_filter_service
            .rule_removed(list_name, &rule)
            .await
        {
            warn!("Failed to revert rule {} of list '{}'. {}", order, list_name, err);
        }

        Ok(())
    }

    async fn go_to_invisible(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }

        let invisible_list_name = self.ctx.config.invisible_list_name.clone();

        let previously_active_list = self.privacy_lists_repo.get_active();
        if previously_active_list
            .as_ref()
            .map(|list| list.has_name(&invisible_list_name))
            .unwrap_or(false)
        {
            debug!("Already invisible.");
            return Ok(());
        }

        let list = match self
            .privacy_list_service
            .load_privacy_list(&invisible_list_name)
            .await?
        {
            Some(list) => list,
            None => {
                info!("Creating privacy list '{}'.", invisible_list_name);
                let list = PrivacyList::invisible(&invisible_list_name);
                self.privacy_list_service.save_privacy_list(&list).await?;
                list
            }
        };
        self.put_keeping_flags(list);

        self.presence_service
            .broadcast_presence(&OutboundPresence::Unavailable)
            .await?;

        if let Err(err) = self.activate_list_locked(&invisible_list_name).await {
            // Don't leave the user offline if the server refused the list.
            self.presence_service
                .broadcast_presence(&self.ctx.available_presence())
                .await?;
            return Err(err);
        }

        self.state.write().previously_active_list = previously_active_list.map(|list| list.name);

        self.presence_service
            .broadcast_presence(&self.ctx.available_presence())
            .await?;

        Ok(())
    }

    async fn go_to_visible(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }

        if !self.query_is_invisible().await {
            debug!("Not invisible. Nothing to do.");
            return Ok(());
        }

        self.decline_active_list_locked().await?;

        self.presence_service
            .broadcast_presence(&self.ctx.available_presence())
            .await?;

        let previously_active_list = self.state.write().previously_active_list.take();
        if let Some(name) = previously_active_list {
            self.activate_list_locked(&name).await?;
        }

        Ok(())
    }

    async fn is_globally_invisible_list_active(&self) -> Result<bool> {
        if !self.ensure_initialized().await? {
            return Ok(false);
        }
        Ok(self.query_is_invisible().await)
    }

    async fn is_privacy_active(&self) -> Result<bool> {
        self.ensure_initialized().await
    }

    async fn handle_list_changed(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        if !self.initialize_locked().await? {
            return Ok(());
        }

        let cached_list = self.privacy_lists_repo.get(name);

        let Some(list) = self.privacy_list_service.load_privacy_list(name).await? else {
            info!("Privacy list '{}' was removed on the server.", name);
            if let Some(removed) = self.privacy_lists_repo.delete(name) {
                if removed.is_active {
                    self.remove_indicators(&removed).await;
                }
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::PrivacyListsChanged);
            }
            return Ok(());
        };

        let list = list
            .with_active(cached_list.as_ref().map(|l| l.is_active).unwrap_or(false))
            .with_default(cached_list.as_ref().map(|l| l.is_default).unwrap_or(false));

        if list.is_active {
            if let Some(cached_list) = &cached_list {
                self.remove_indicators(cached_list).await;
            }
            self.privacy_lists_repo.put(list.clone());
            self.apply_indicators(&list).await;
        } else {
            self.privacy_lists_repo.put(list);
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PrivacyListsChanged);

        Ok(())
    }

    async fn clear_cache(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.privacy_lists_repo.delete_all();
        *self.state.write() = Default::default();
        Ok(())
    }
}

impl PrivacyDomainService {
    /// Returns whether the server supports privacy lists, initializing first if needed.
    async fn ensure_initialized(&self) -> Result<bool> {
        {
            let state = self.state.read();
            if state.is_initialized {
                return Ok(state.is_supported);
            }
        }

        let _guard = self.write_lock.lock().await;
        self.initialize_locked().await
    }

    /// Must be called while holding `write_lock`.
    async fn initialize_locked(&self) -> Result<bool> {
        {
            let state = self.state.read();
            if state.is_initialized {
                return Ok(state.is_supported);
            }
        }

        if !self.ctx.server_features()?.privacy_lists {
            info!("Server does not support privacy lists (XEP-0016).");
            let mut state = self.state.write();
            state.is_initialized = true;
            state.is_supported = false;
            return Ok(false);
        }

        let names = self.privacy_list_service.load_privacy_list_names().await?;
        debug!("Loading privacy lists {:?}…", names.names);

        let mut lists = vec![];
        for name in &names.names {
            match self.privacy_list_service.load_privacy_list(name).await? {
                Some(list) => lists.push(list),
                None => warn!("Privacy list '{}' vanished while loading.", name),
            }
        }

        self.privacy_lists_repo.delete_all();
        for list in lists {
            self.privacy_lists_repo.put(list);
        }
        self.privacy_lists_repo.set_default(names.default.as_deref());

        // The server applies the default list to a new session unless we chose another one.
        if let Some(active_list_name) = names.active.or(names.default) {
            self.privacy_lists_repo.set_active(Some(&active_list_name));
        }

        {
            let mut state = self.state.write();
            state.is_initialized = true;
            state.is_supported = true;
        }

        if let Some(active_list) = self.privacy_lists_repo.get_active() {
            self.apply_indicators(&active_list).await;
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PrivacyListsChanged);

        Ok(true)
    }

    /// Must be called while holding `write_lock`.
    async fn get_or_create_list_locked(&self, name: &str) -> Result<PrivacyList> {
        if let Some(list) = self.privacy_lists_repo.get(name) {
            return Ok(list);
        }

        info!("Creating privacy list '{}'.", name);
        let list = PrivacyList::catch_all(name, self.ctx.config.catch_all_rule_order);
        self.privacy_list_service.save_privacy_list(&list).await?;
        self.privacy_lists_repo.put(list.clone());

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PrivacyListsChanged);

        Ok(list)
    }

    /// Must be called while holding `write_lock`.
    async fn activate_list_locked(&self, name: &str) -> Result<()> {
        self.privacy_list_service.set_active_list(name).await?;
        self.ensure_list_is_cached(name).await?;

        let previously_active_list = self.privacy_lists_repo.set_active(Some(name));

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PrivacyListActivated {
                name: name.to_string(),
            });

        if let Some(previously_active_list) = previously_active_list {
            self.remove_indicators(&previously_active_list).await;
        }
        if let Some(active_list) = self.privacy_lists_repo.get_active() {
            self.apply_indicators(&active_list).await;
        }

        Ok(())
    }

    /// Must be called while holding `write_lock`.
    async fn decline_active_list_locked(&self) -> Result<()> {
        self.privacy_list_service.decline_active_list().await?;

        let Some(previously_active_list) = self.privacy_lists_repo.set_active(None) else {
            return Ok(());
        };

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::PrivacyListDeactivated {
                name: previously_active_list.name.clone(),
            });
        self.remove_indicators(&previously_active_list).await;

        Ok(())
    }

    /// Fetches a list which the server knows but we didn't cache, e.g. because another
    /// resource created it.
    async fn ensure_list_is_cached(&self, name: &str) -> Result<()> {
        if self.privacy_lists_repo.get(name).is_some() {
            return Ok(());
        }
        if let Some(list) = self.privacy_list_service.load_privacy_list(name).await? {
            self.privacy_lists_repo.put(list);
        }
        Ok(())
    }

    fn put_keeping_flags(&self, list: PrivacyList) {
        let (is_active, is_default) = self
            .privacy_lists_repo
            .get(&list.name)
            .map(|cached| (cached.is_active, cached.is_default))
            .unwrap_or_default();
        self.privacy_lists_repo
            .put(list.with_active(is_active).with_default(is_default));
    }

    /// Asks the server for the active list. Any failure counts as visible.
    async fn query_is_invisible(&self) -> bool {
        match self.privacy_list_service.load_privacy_list_names().await {
            Ok(names) => names
                .active
                .map(|name| self.ctx.is_invisible_list_name(&name))
                .unwrap_or(false),
            Err(err) => {
                warn!("Could not determine the active privacy list. {}", err);
                false
            }
        }
    }

    async fn apply_indicators(&self, list: &PrivacyList) {
        if let Err(err) = self.presence_filter_service.set_indicators_for_list(list).await {
            warn!("Failed to apply indicators of list '{}'. {}", list.name, err);
        }
    }

    async fn remove_indicators(&self, list: &PrivacyList) {
        if let Err(err) = self
            .presence_filter_service
            .remove_indicators_for_list(list)
            .await
        {
            warn!("Failed to remove indicators of list '{}'. {}", list.name, err);
        }
    }
}
