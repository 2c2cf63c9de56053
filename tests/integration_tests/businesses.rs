use crate::common::TestContext;
use ethioverifypay_rust::apis::businesses::CreateBusinessRequestBuilder;

#[tokio::test]
async fn create_returns_the_submitted_fields_verbatim() {
    let ctx = TestContext::start().await;

    let request = CreateBusinessRequestBuilder::default()
        .business_name("Cafe Blue")
        .owner_name("Abel T.")
        .telebirr_account("0912345678")
        .build()
        .unwrap();

    let record = ctx.client.businesses.create(&request).await.unwrap();

    assert_eq!(record.business_name, "Cafe Blue");
    assert_eq!(record.owner_name, "Abel T.");
    assert_eq!(record.telebirr_account.as_deref(), Some("0912345678"));
    assert_eq!(record.cbe_account, None);
    assert!(!record.verification_code.is_empty());
}

#[tokio::test]
async fn share_link_ends_with_the_verification_code() {
    let ctx = TestContext::start().await;

    let request = CreateBusinessRequestBuilder::default()
        .business_name("Cafe Blue")
        .owner_name("Abel T.")
        .telebirr_account("0912345678")
        .build()
        .unwrap();

    let record = ctx.client.businesses.create(&request).await.unwrap();
    let share_url = ctx.client.businesses.share_link(&record.verification_code);

    assert!(share_url
        .path()
        .ends_with(&format!("/verify/{}", record.verification_code)));
}

#[tokio::test]
async fn created_records_resolve_by_code() {
    let ctx = TestContext::start().await;

    let request = CreateBusinessRequestBuilder::default()
        .business_name("Cafe Blue")
        .owner_name("Abel T.")
        .telebirr_account("0912345678")
        .cbe_account("1000222333")
        .build()
        .unwrap();

    let created = ctx.client.businesses.create(&request).await.unwrap();
    let resolved = ctx
        .client
        .businesses
        .get_by_code(&created.verification_code)
        .await
        .unwrap();

    assert_eq!(resolved, Some(created));
}

#[tokio::test]
async fn unknown_codes_resolve_to_none() {
    let ctx = TestContext::start().await;

    let resolved = ctx
        .client
        .businesses
        .get_by_code("doesnotexist")
        .await
        .unwrap();

    assert_eq!(resolved, None);
}

#[tokio::test]
async fn duplicate_submissions_create_duplicate_records() {
    let ctx = TestContext::start().await;

    let request = CreateBusinessRequestBuilder::default()
        .business_name("Cafe Blue")
        .owner_name("Abel T.")
        .telebirr_account("0912345678")
        .build()
        .unwrap();

    // No idempotency key is sent, so resubmitting the same form creates a
    // second, independent record with its own code.
    let first = ctx.client.businesses.create(&request).await.unwrap();
    let second = ctx.client.businesses.create(&request).await.unwrap();

    assert_ne!(first.verification_code, second.verification_code);
    assert_eq!(ctx.mock_server.stored_record_count(), 2);
}
