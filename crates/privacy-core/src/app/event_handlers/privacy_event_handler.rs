// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use privacy_proc_macros::InjectDependencies;

use crate::app::deps::DynPrivacyDomainService;
use crate::app::event_handlers::{
    PrivacyListEvent, PrivacyListEventType, ServerEvent, ServerEventHandler,
};

/// Handles privacy lists pushed by the server.
#[derive(InjectDependencies)]
pub struct PrivacyEventHandler {
    #[inject]
    privacy_domain_service: DynPrivacyDomainService,
}

#[async_trait]
impl ServerEventHandler for PrivacyEventHandler {
    fn name(&self) -> &'static str {
        "privacy"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::PrivacyList(event) => {
                self.handle_privacy_list_event(event).await?;
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl PrivacyEventHandler {
    async fn handle_privacy_list_event(&self, event: PrivacyListEvent) -> Result<()> {
        match event.r#type {
            PrivacyListEventType::Changed => {
                self.privacy_domain_service
                    .handle_list_changed(&event.name)
                    .await?
            }
        }
        Ok(())
    }
}
