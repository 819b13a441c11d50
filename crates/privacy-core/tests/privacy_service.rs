// prose-privacy/privacy-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{format_err, Result};
use mockall::predicate;
use pretty_assertions::assert_eq;

use privacy_core::dtos::{PrivacyList, PrivacyRule, PrivacySubject};
use privacy_core::services::PrivacyService;
use privacy_core::test::MockAppDependencies;
use privacy_core::user_id;

#[tokio::test]
async fn test_returns_lists_of_domain_service() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.privacy_domain_service
        .expect_get_privacy_list()
        .once()
        .with(predicate::eq("work"))
        .return_once(|_| Box::pin(async { Ok(Some(PrivacyList::catch_all("work", 10))) }));
    deps.privacy_domain_service
        .expect_get_active_list()
        .times(2)
        .returning(|| Box::pin(async { Ok(None) }));

    let service = PrivacyService::from(&deps.into_deps());

    assert_eq!(
        service.get_privacy_list("work").await,
        Some(PrivacyList::catch_all("work", 10))
    );
    assert_eq!(service.get_active_list().await, None);
    assert!(!service.has_active_list().await);

    Ok(())
}

#[tokio::test]
async fn test_swallows_failures() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.privacy_domain_service
        .expect_get_privacy_list()
        .once()
        .return_once(|_| Box::pin(async { Err(format_err!("service-unavailable")) }));
    deps.privacy_domain_service
        .expect_get_privacy_lists()
        .once()
        .return_once(|| Box::pin(async { Err(format_err!("service-unavailable")) }));
    deps.privacy_domain_service
        .expect_set_list_as_active()
        .once()
        .with(predicate::eq("work"))
        .return_once(|_| Box::pin(async { Err(format_err!("item-not-found")) }));
    deps.privacy_domain_service
        .expect_add_rule()
        .once()
        .return_once(|_, _| Box::pin(async { Err(format_err!("not-acceptable")) }));
    deps.privacy_domain_service
        .expect_go_to_invisible()
        .once()
        .return_once(|| Box::pin(async { Err(format_err!("service-unavailable")) }));
    deps.privacy_domain_service
        .expect_is_globally_invisible_list_active()
        .once()
        .return_once(|| Box::pin(async { Err(format_err!("not connected")) }));
    deps.privacy_domain_service
        .expect_is_privacy_active()
        .once()
        .return_once(|| Box::pin(async { Err(format_err!("not connected")) }));

    let service = PrivacyService::from(&deps.into_deps());

    assert_eq!(service.get_privacy_list("work").await, None);
    assert!(service.get_privacy_lists().await.is_empty());
    assert!(!service.set_list_as_active("work").await);
    assert!(
        !service
            .add_rule("work", PrivacyRule::deny(PrivacySubject::Everyone, 1))
            .await
    );
    assert!(!service.go_to_invisible().await);
    assert!(!service.is_globally_invisible_list_active().await);
    assert!(!service.is_privacy_active().await);

    Ok(())
}

#[tokio::test]
async fn test_reports_success() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.privacy_domain_service
        .expect_remove_rule()
        .once()
        .with(predicate::eq("work"), predicate::eq(5))
        .return_once(|_, _| Box::pin(async { Ok(()) }));
    deps.privacy_domain_service
        .expect_go_to_visible()
        .once()
        .return_once(|| Box::pin(async { Ok(()) }));

    let service = PrivacyService::from(&deps.into_deps());

    assert!(service.remove_rule("work", 5).await);
    assert!(service.go_to_visible().await);

    Ok(())
}

#[tokio::test]
async fn test_blocked_contacts() -> Result<()> {
    let mut deps = MockAppDependencies::default();

    deps.privacy_indicators_repo
        .expect_get_all()
        .once()
        .return_once(|| vec![user_id!("boss@prose.org")]);
    deps.privacy_indicators_repo
        .expect_is_blocked()
        .once()
        .with(predicate::eq(user_id!("mum@prose.org")))
        .return_once(|_| false);

    let service = PrivacyService::from(&deps.into_deps());

    assert_eq!(
        service.blocked_contacts(),
        vec![user_id!("boss@prose.org")]
    );
    assert!(!service.is_contact_blocked(&user_id!("mum@prose.org")));

    Ok(())
}
