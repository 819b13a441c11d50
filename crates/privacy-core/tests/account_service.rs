// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use privacy_core::app::services::AccountService;
use privacy_core::domain::presence::models::OutboundPresence;
use privacy_core::dtos::Availability;
use privacy_core::test::MockAppDependencies;

#[tokio::test]
async fn test_broadcasts_own_priority() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.presence_service
        .expect_broadcast_presence()
        .once()
        .with(predicate::eq(OutboundPresence::Available {
            availability: Availability::Available,
            status: None,
            priority: 10,
        }))
        .return_once(|_| Box::pin(async { Ok(()) }));
    deps.presence_service
        .expect_broadcast_presence()
        .once()
        .with(predicate::eq(OutboundPresence::Available {
            availability: Availability::Away,
            status: Some("Lunch".to_string()),
            priority: 10,
        }))
        .return_once(|_| Box::pin(async { Ok(()) }));

    let deps = deps.into_deps();
    let service = AccountService::from(&deps);

    service.set_priority(10).await?;
    service
        .set_presence(Availability::Away, Some("Lunch"))
        .await?;

    assert_eq!(service.availability(), Availability::Away);

    Ok(())
}

#[tokio::test]
async fn test_does_not_broadcast_while_disconnected() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.ctx.reset_connection_properties();
    deps.presence_service.expect_broadcast_presence().never();

    let deps = deps.into_deps();
    let service = AccountService::from(&deps);

    service.set_priority(-1).await?;

    assert_eq!(deps.ctx.own_presence().priority, -1);

    Ok(())
}
