// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::slice;

use anyhow::Result;
use async_trait::async_trait;
use jid::{BareJid, Jid};
use tracing::warn;

use privacy_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynContactsRepository, DynPresenceService,
    DynPrivacyIndicatorsRepository, DynPrivacyListsReadOnlyRepository,
};
use crate::domain::presence::models::OutboundPresence;
use crate::domain::privacy::models::{PrivacyList, PrivacyRule, PrivacySubject};
use crate::domain::shared::models::UserId;
use crate::ClientEvent;

use super::super::PresenceFilterService as PresenceFilterServiceTrait;

#[derive(DependenciesStruct)]
pub struct PresenceFilterService {
    ctx: DynAppContext,
    client_event_dispatcher: DynClientEventDispatcher,
    contacts_repo: DynContactsRepository,
    presence_service: DynPresenceService,
    privacy_indicators_repo: DynPrivacyIndicatorsRepository,
    privacy_lists_repo: DynPrivacyListsReadOnlyRepository,
}

#[async_trait]
impl PresenceFilterServiceTrait for PresenceFilterService {
    async fn set_indicators_for_list(&self, list: &PrivacyList) -> Result<()> {
        self.apply_rules(list.rules(), true).await
    }

    async fn remove_indicators_for_list(&self, list: &PrivacyList) -> Result<()> {
        self.apply_rules(list.rules(), false).await
    }

    async fn rule_added(&self, list_name: &str, rule: &PrivacyRule) -> Result<()> {
        if !self.is_active_list(list_name) {
            return Ok(());
        }
        self.apply_rules(slice::from_ref(rule), true).await
    }

    async fn rule_removed(&self, list_name: &str, rule: &PrivacyRule) -> Result<()> {
        if !self.is_active_list(list_name) {
            return Ok(());
        }
        self.apply_rules(slice::from_ref(rule), false).await
    }
}

impl PresenceFilterService {
    fn is_active_list(&self, name: &str) -> bool {
        self.privacy_lists_repo
            .get(name)
            .map(|list| list.is_active)
            .unwrap_or(false)
    }

    /// Marks (or unmarks) the contacts targeted by the deny rules in `rules` and sends them a
    /// directed presence if the rule filters our outgoing presence.
    ///
    /// Only deny rules with a JID or group subject count. Allow rules never block anybody, so
    /// contacts matched by them keep their indicator untouched, as do subscription and
    /// fall-through rules which would otherwise mark large parts of the roster.
    async fn apply_rules(&self, rules: &[PrivacyRule], is_blocked: bool) -> Result<()> {
        let rules = rules
            .iter()
            .filter(|rule| {
                rule.is_deny()
                    && matches!(
                        rule.subject,
                        PrivacySubject::Jid(_) | PrivacySubject::Group(_)
                    )
            })
            .collect::<Vec<_>>();

        if rules.is_empty() {
            return Ok(());
        }

        let contacts = self.contacts_repo.get_all().await?;
        let presence = if is_blocked {
            OutboundPresence::Unavailable
        } else {
            self.ctx.real_presence()
        };

        let mut changed_contacts = vec![];

        for rule in rules {
            let recipients = match &rule.subject {
                PrivacySubject::Jid(jid) => {
                    let user_id = UserId::from(jid.to_bare());
                    if contacts.iter().any(|contact| contact.id == user_id) {
                        self.set_blocked(&user_id, is_blocked, &mut changed_contacts);
                    }
                    vec![jid.clone()]
                }
                PrivacySubject::Group(group) => contacts
                    .iter()
                    .filter(|contact| contact.is_member_of(group))
                    .map(|contact| {
                        self.set_blocked(&contact.id, is_blocked, &mut changed_contacts);
                        contact.id.as_jid()
                    })
                    .collect::<Vec<Jid>>(),
                PrivacySubject::Everyone | PrivacySubject::Subscription(_) => vec![],
            };

            if !rule.filters_presence_out() {
                continue;
            }

            for jid in recipients {
                if let Err(err) = self.presence_service.send_presence_to(&jid, &presence).await {
                    warn!("Failed to send presence to {}. {}", jid, err);
                }
            }
        }

        if !changed_contacts.is_empty() {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::ContactChanged {
                    ids: changed_contacts,
                });
        }

        Ok(())
    }

    fn set_blocked(&self, user_id: &UserId, is_blocked: bool, changed: &mut Vec<UserId>) {
        if self.privacy_indicators_repo.set_blocked(user_id, is_blocked)
            && !changed.contains(user_id)
        {
            changed.push(user_id.clone());
        }
    }
}
