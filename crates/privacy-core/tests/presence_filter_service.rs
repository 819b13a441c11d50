// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use jid::Jid;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use privacy_core::domain::contacts::models::Contact;
use privacy_core::domain::presence::models::{OutboundPresence, OwnPresence};
use privacy_core::domain::privacy::models::{
    PrivacyAction, PrivacyList, PrivacyRule, PrivacySubject, StanzaFilter,
};
use privacy_core::domain::privacy::repos::{PrivacyIndicatorsRepository, PrivacyListsRepository};
use privacy_core::domain::privacy::services::impls::PresenceFilterService;
use privacy_core::domain::privacy::services::PresenceFilterService as PresenceFilterServiceTrait;
use privacy_core::dtos::{Availability, UserId};
use privacy_core::infra::privacy::{
    InMemoryPrivacyIndicatorsRepository, InMemoryPrivacyListsRepository,
};
use privacy_core::test::MockPresenceFilterServiceDependencies;
use privacy_core::{user_id, ClientEvent};
use privacy_xmpp::jid;

struct Harness {
    indicators_repo: Arc<InMemoryPrivacyIndicatorsRepository>,
    lists_repo: Arc<InMemoryPrivacyListsRepository>,
    events: Arc<Mutex<Vec<ClientEvent>>>,
    sent_presences: Arc<Mutex<Vec<(Jid, OutboundPresence)>>>,
    service: PresenceFilterService,
}

impl Harness {
    fn new() -> Self {
        let mut deps = MockPresenceFilterServiceDependencies::default();
        deps.ctx.set_own_presence(OwnPresence {
            availability: Availability::Away,
            status: Some("Lunch".to_string()),
            priority: 5,
        });

        deps.contacts_repo.expect_get_all().returning(|| {
            Box::pin(async {
                Ok(vec![
                    contact("boss@prose.org", &["Work"]),
                    contact("colleague@prose.org", &["Work", "Friends"]),
                    contact("mum@prose.org", &["Family"]),
                ])
            })
        });

        let events = Arc::new(Mutex::new(vec![]));
        {
            let events = events.clone();
            deps.client_event_dispatcher
                .expect_dispatch_event()
                .returning(move |event| events.lock().push(event));
        }

        let sent_presences = Arc::new(Mutex::new(vec![]));
        {
            let sent_presences = sent_presences.clone();
            deps.presence_service
                .expect_send_presence_to()
                .returning(move |to, presence| {
                    sent_presences.lock().push((to.clone(), presence.clone()));
                    Box::pin(async { Ok(()) })
                });
        }

        let indicators_repo = deps.privacy_indicators_repo.clone();
        let lists_repo = deps.privacy_lists_repo.clone();

        Harness {
            indicators_repo,
            lists_repo,
            events,
            sent_presences,
            service: PresenceFilterService::from(deps.into_deps()),
        }
    }

    fn take_events(&self) -> Vec<ClientEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    fn take_sent_presences(&self) -> Vec<(Jid, OutboundPresence)> {
        std::mem::take(&mut *self.sent_presences.lock())
    }
}

fn contact(id: &str, groups: &[&str]) -> Contact {
    Contact {
        id: user_id!(id),
        name: None,
        groups: groups.iter().map(ToString::to_string).collect(),
    }
}

fn real_presence() -> OutboundPresence {
    OutboundPresence::Available {
        availability: Availability::Away,
        status: Some("Lunch".to_string()),
        priority: 1,
    }
}

fn work_list() -> PrivacyList {
    PrivacyList::new(
        "work",
        vec![
            PrivacyRule::deny(PrivacySubject::Jid(jid!("boss@prose.org")), 1)
                .with_filter(StanzaFilter::presence_out()),
            PrivacyRule::deny(PrivacySubject::Jid(jid!("stranger@example.com")), 2)
                .with_filter(StanzaFilter::presence_out()),
            PrivacyRule::deny(PrivacySubject::Group("Family".to_string()), 3),
            PrivacyRule::allow_everyone(10),
        ],
    )
}

#[tokio::test]
async fn test_set_and_remove_indicators_for_list() -> Result<()> {
    let harness = Harness::new();

    harness.service.set_indicators_for_list(&work_list()).await?;

    assert_eq!(
        harness.indicators_repo.get_all(),
        vec![user_id!("boss@prose.org"), user_id!("mum@prose.org")]
    );
    assert_eq!(
        harness.take_events(),
        vec![ClientEvent::ContactChanged {
            ids: vec![user_id!("boss@prose.org"), user_id!("mum@prose.org")]
        }]
    );
    // Only the rules filtering outgoing presence send one. Peers outside of the roster
    // receive it as well.
    assert_eq!(
        harness.take_sent_presences(),
        vec![
            (jid!("boss@prose.org"), OutboundPresence::Unavailable),
            (jid!("stranger@example.com"), OutboundPresence::Unavailable),
        ]
    );

    harness
        .service
        .remove_indicators_for_list(&work_list())
        .await?;

    assert_eq!(harness.indicators_repo.get_all(), Vec::<UserId>::new());
    assert_eq!(
        harness.take_events(),
        vec![ClientEvent::ContactChanged {
            ids: vec![user_id!("boss@prose.org"), user_id!("mum@prose.org")]
        }]
    );
    assert_eq!(
        harness.take_sent_presences(),
        vec![
            (jid!("boss@prose.org"), real_presence()),
            (jid!("stranger@example.com"), real_presence()),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_set_indicators_is_idempotent() -> Result<()> {
    let harness = Harness::new();

    harness.service.set_indicators_for_list(&work_list()).await?;
    let blocked_contacts = harness.indicators_repo.get_all();
    harness.take_events();

    harness.service.set_indicators_for_list(&work_list()).await?;

    assert_eq!(harness.indicators_repo.get_all(), blocked_contacts);
    // Nothing changed, so there is nothing to refresh.
    assert!(harness.take_events().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_group_rule_targets_all_members() -> Result<()> {
    let harness = Harness::new();

    let list = PrivacyList::new(
        "focus",
        vec![
            PrivacyRule::deny(PrivacySubject::Group("Work".to_string()), 1)
                .with_filter(StanzaFilter::presence_out()),
            PrivacyRule::allow_everyone(2),
        ],
    );
    harness.service.set_indicators_for_list(&list).await?;

    assert_eq!(
        harness.indicators_repo.get_all(),
        vec![user_id!("boss@prose.org"), user_id!("colleague@prose.org")]
    );
    assert_eq!(
        harness.take_sent_presences(),
        vec![
            (jid!("boss@prose.org"), OutboundPresence::Unavailable),
            (jid!("colleague@prose.org"), OutboundPresence::Unavailable),
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_ignores_allow_and_everyone_rules() -> Result<()> {
    let harness = Harness::new();

    let list = PrivacyList::new(
        "open",
        vec![
            PrivacyRule::allow_everyone(1).with_filter(StanzaFilter::presence_out()),
            PrivacyRule::new(
                PrivacySubject::Jid(jid!("boss@prose.org")),
                PrivacyAction::Allow,
                2,
            )
            .with_filter(StanzaFilter::presence_out()),
        ],
    );
    harness.service.set_indicators_for_list(&list).await?;
    harness
        .service
        .set_indicators_for_list(&PrivacyList::invisible("invisible"))
        .await?;

    assert!(harness.indicators_repo.get_all().is_empty());
    assert!(harness.take_events().is_empty());
    assert!(harness.take_sent_presences().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_rule_changes_only_apply_to_active_list() -> Result<()> {
    let harness = Harness::new();
    harness.lists_repo.put(work_list());
    harness
        .lists_repo
        .put(PrivacyList::catch_all("home", 10).with_active(true));

    let rule = PrivacyRule::deny(PrivacySubject::Jid(jid!("mum@prose.org")), 5)
        .with_filter(StanzaFilter::presence_out());

    harness.service.rule_added("work", &rule).await?;
    assert!(harness.indicators_repo.get_all().is_empty());
    assert!(harness.take_sent_presences().is_empty());

    harness.service.rule_added("home", &rule).await?;
    assert!(harness.indicators_repo.is_blocked(&user_id!("mum@prose.org")));
    assert_eq!(
        harness.take_sent_presences(),
        vec![(jid!("mum@prose.org"), OutboundPresence::Unavailable)]
    );

    harness.service.rule_removed("home", &rule).await?;
    assert!(!harness.indicators_repo.is_blocked(&user_id!("mum@prose.org")));
    assert_eq!(
        harness.take_sent_presences(),
        vec![(jid!("mum@prose.org"), real_presence())]
    );

    Ok(())
}
