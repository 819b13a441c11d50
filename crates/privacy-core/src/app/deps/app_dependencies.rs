// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::domain::connection::services::ConnectionService;
use crate::domain::contacts::repos::ContactsRepository;
use crate::domain::contacts::services::ContactsService;
use crate::domain::presence::services::PresenceService;
use crate::domain::privacy::repos::{
    PrivacyIndicatorsRepository, PrivacyListsReadOnlyRepository, PrivacyListsRepository,
};
use crate::domain::privacy::services::{
    PresenceFilterService, PrivacyDomainService, PrivacyListService,
};

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub(crate) type DynConnectionService = Arc<dyn ConnectionService>;
pub(crate) type DynContactsRepository = Arc<dyn ContactsRepository>;
pub(crate) type DynContactsService = Arc<dyn ContactsService>;
pub(crate) type DynPresenceFilterService = Arc<dyn PresenceFilterService>;
pub(crate) type DynPresenceService = Arc<dyn PresenceService>;
pub(crate) type DynPrivacyDomainService = Arc<dyn PrivacyDomainService>;
pub(crate) type DynPrivacyIndicatorsRepository = Arc<dyn PrivacyIndicatorsRepository>;
pub(crate) type DynPrivacyListService = Arc<dyn PrivacyListService>;
pub(crate) type DynPrivacyListsReadOnlyRepository = Arc<dyn PrivacyListsReadOnlyRepository>;
pub(crate) type DynPrivacyListsRepository = Arc<dyn PrivacyListsRepository>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub connection_service: DynConnectionService,
    pub contacts_repo: DynContactsRepository,
    pub ctx: DynAppContext,
    pub presence_service: DynPresenceService,
    pub privacy_domain_service: DynPrivacyDomainService,
    pub privacy_indicators_repo: DynPrivacyIndicatorsRepository,
}
