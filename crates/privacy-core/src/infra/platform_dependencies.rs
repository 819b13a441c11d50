// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{AppContext, AppDependencies, DynClientEventDispatcher};
use crate::domain::privacy::services::impls::{
    PresenceFilterService, PresenceFilterServiceDependencies, PrivacyDomainService,
    PrivacyDomainServiceDependencies,
};
use crate::infra::contacts::CachingContactsRepository;
use crate::infra::privacy::{InMemoryPrivacyIndicatorsRepository, InMemoryPrivacyListsRepository};
use crate::infra::xmpp::XMPPClient;

pub struct PlatformDependencies {
    pub ctx: AppContext,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub xmpp: Arc<XMPPClient>,
}

impl From<PlatformDependencies> for AppDependencies {
    fn from(d: PlatformDependencies) -> Self {
        let ctx = Arc::new(d.ctx);
        let contacts_repo = Arc::new(CachingContactsRepository::new(d.xmpp.clone()));
        let privacy_indicators_repo = Arc::new(InMemoryPrivacyIndicatorsRepository::new());
        let privacy_lists_repo = Arc::new(InMemoryPrivacyListsRepository::new());

        let presence_filter_service = Arc::new(PresenceFilterService::from(
            PresenceFilterServiceDependencies {
                ctx: ctx.clone(),
                client_event_dispatcher: d.client_event_dispatcher.clone(),
                contacts_repo: contacts_repo.clone(),
                presence_service: d.xmpp.clone(),
                privacy_indicators_repo: privacy_indicators_repo.clone(),
                privacy_lists_repo: privacy_lists_repo.clone(),
            },
        ));

        let privacy_domain_service = Arc::new(PrivacyDomainService::from(
            PrivacyDomainServiceDependencies {
                ctx: ctx.clone(),
                client_event_dispatcher: d.client_event_dispatcher.clone(),
                presence_filter_service,
                presence_service: d.xmpp.clone(),
                privacy_list_service: d.xmpp.clone(),
                privacy_lists_repo,
            },
        ));

        Self {
            client_event_dispatcher: d.client_event_dispatcher,
            connection_service: d.xmpp.clone(),
            contacts_repo,
            ctx,
            presence_service: d.xmpp,
            privacy_domain_service,
            privacy_indicators_repo,
        }
    }
}
