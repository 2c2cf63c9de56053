//! Rust client for the EthioVerifyPay merchant verification service.
//!
//! EthioVerifyPay lets a merchant register their business and payment accounts
//! (Telebirr mobile money and/or a CBE bank account) and receive an opaque
//! verification code. The code is embedded in a shareable URL, typically
//! printed as a QR flyer; a payer scanning it resolves the code back to the
//! business record and gets dialable USSD payment actions.
//!
//! This crate covers the client side of that lifecycle: record creation,
//! record resolution, share-link and dial-string derivation, and the state
//! models of the two screens. It never moves money: the dial strings are
//! plain `tel:` links handed to the payer's phone.
//!
//! # Usage
//!
//! ## Register a business
//!
//! ```rust,no_run
//! # use ethioverifypay_rust::{EthioVerifyPayClient, Error, apis::businesses::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let client = EthioVerifyPayClient::new();
//!
//! let request = CreateBusinessRequestBuilder::default()
//!     .business_name("Cafe Blue")
//!     .owner_name("Abel T.")
//!     .telebirr_account("0912345678")
//!     .build()
//!     .unwrap();
//!
//! let record = client.businesses.create(&request).await?;
//! let share_url = client.businesses.share_link(&record.verification_code);
//!
//! println!("Print this on the flyer: {}", share_url);
//! # Ok(())
//! # }
//! ```
//!
//! ## Resolve a verification code
//!
//! ```rust,no_run
//! # use ethioverifypay_rust::{EthioVerifyPayClient, Error, ussd};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client = EthioVerifyPayClient::new();
//! if let Some(record) = client.businesses.get_by_code("ABC123").await? {
//!     for action in ussd::payment_actions(&record, "50") {
//!         println!("{:?}: {}", action.rail, action.dial);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Drive a screen
//!
//! The [`views`](crate::views) module mirrors the two screens of the web
//! client, including the uniform "Invalid Link" failure state and the
//! stale-response guard:
//!
//! ```rust,no_run
//! # use ethioverifypay_rust::{EthioVerifyPayClient, views::verification::*};
//! #
//! # #[tokio::main]
//! # async fn main() {
//! # let client = EthioVerifyPayClient::new();
//! let mut view = VerificationView::new();
//! match view.load(&client.businesses, "ABC123").await {
//!     VerificationState::Verified(record) => println!("Pay {}", record.business_name),
//!     _ => println!("Invalid Link"),
//! }
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
pub mod error;
mod middlewares;
pub mod ussd;
pub mod views;

pub use client::EthioVerifyPayClient;
pub use error::Error;
