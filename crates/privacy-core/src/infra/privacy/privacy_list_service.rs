// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use privacy_xmpp::mods;

use crate::domain::privacy::models::{PrivacyList, PrivacyListNames};
use crate::domain::privacy::services::PrivacyListService;
use crate::infra::xmpp::XMPPClient;

#[async_trait]
impl PrivacyListService for XMPPClient {
    async fn load_privacy_list_names(&self) -> Result<PrivacyListNames> {
        let privacy = self.client.get_mod::<mods::Privacy>();
        Ok(privacy.load_privacy_lists().await?.into())
    }

    async fn load_privacy_list(&self, name: &str) -> Result<Option<PrivacyList>> {
        let privacy = self.client.get_mod::<mods::Privacy>();
        match privacy.load_privacy_list(name).await {
            Ok(list) => Ok(Some(list.into())),
            Err(err) if err.is_item_not_found_err() => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save_privacy_list(&self, list: &PrivacyList) -> Result<()> {
        let privacy = self.client.get_mod::<mods::Privacy>();
        privacy.save_privacy_list(list.into()).await?;
        Ok(())
    }

    async fn delete_privacy_list(&self, name: &str) -> Result<()> {
        let privacy = self.client.get_mod::<mods::Privacy>();
        match privacy.delete_privacy_list(name).await {
            Ok(()) => Ok(()),
            Err(err) if err.is_conflict_err() => Err(anyhow::anyhow!(
                "Privacy list '{}' is in use by another session.",
                name
            )),
            Err(err) => Err(err.into()),
        }
    }

    async fn set_active_list(&self, name: &str) -> Result<()> {
        let privacy = self.client.get_mod::<mods::Privacy>();
        privacy.set_active_list(Some(name)).await?;
        Ok(())
    }

    async fn decline_active_list(&self) -> Result<()> {
        let privacy = self.client.get_mod::<mods::Privacy>();
        privacy.set_active_list(None).await?;
        Ok(())
    }

    async fn set_default_list(&self, name: &str) -> Result<()> {
        let privacy = self.client.get_mod::<mods::Privacy>();
        privacy.set_default_list(Some(name)).await?;
        Ok(())
    }

    async fn decline_default_list(&self) -> Result<()> {
        let privacy = self.client.get_mod::<mods::Privacy>();
        privacy.set_default_list(None).await?;
        Ok(())
    }
}
