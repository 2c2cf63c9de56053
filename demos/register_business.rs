use anyhow::Context;
use ethioverifypay_rust::{
    apis::businesses::CreateBusinessRequestBuilder,
    client::Environment,
    ussd, EthioVerifyPayClient,
};
use url::Url;

async fn run() -> anyhow::Result<()> {
    // A single base-URL environment value selects the API origin;
    // the deployed production service is used when unset.
    let mut builder = EthioVerifyPayClient::builder();
    if let Ok(api_base) = std::env::var("ETHIOVERIFYPAY_API_BASE") {
        let api_url = Url::parse(&api_base).context("Invalid ETHIOVERIFYPAY_API_BASE")?;
        builder = builder.with_environment(Environment::from_single_url(&api_url));
    }
    let client = builder.build();

    // Register a business
    let request = CreateBusinessRequestBuilder::default()
        .business_name("Cafe Blue")
        .owner_name("Abel T.")
        .telebirr_account("0912345678")
        .cbe_account("1000222333")
        .build()
        .unwrap();

    let record = client.businesses.create(&request).await?;
    tracing::info!("Registered business with code {}", record.verification_code);

    // Derive the share link printed as a QR flyer
    let share_url = client.businesses.share_link(&record.verification_code);
    tracing::info!("Share URL: {}", share_url);

    // Resolve it back, as a payer scanning the flyer would
    let resolved = client
        .businesses
        .get_by_code(&record.verification_code)
        .await?
        .context("Freshly created record did not resolve")?;

    for action in ussd::payment_actions(&resolved, "50") {
        tracing::info!("{:?} ({}): {}", action.rail, action.account, action.dial);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    if let Err(e) = run().await {
        tracing::error!("Fatal: {:?}", e);
    }
}
