use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};

/// Request to register a new business with the business-record service.
///
/// The four fields are the raw form inputs and are submitted verbatim.
/// The service tolerates empty account fields, mirroring a form where the
/// merchant fills in only one of the two payment rails.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct CreateBusinessRequest {
    /// The payee's display name.
    pub business_name: String,
    /// Used by the payer to cross-check identity before paying.
    pub owner_name: String,
    /// Telebirr mobile-money account identifier. Empty if not provided.
    #[builder(default)]
    pub telebirr_account: String,
    /// CBE bank account identifier. Empty if not provided.
    #[builder(default)]
    pub cbe_account: String,
}

/// A business record as stored by the business-record service.
///
/// Records are immutable once created: the service assigns the verification
/// code at creation time and no update call exists.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    pub business_name: String,
    pub owner_name: String,
    /// Telebirr mobile-money account, if one was registered.
    ///
    /// The wire format carries an empty string for an absent account.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub telebirr_account: Option<String>,
    /// CBE bank account, if one was registered.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub cbe_account: Option<String>,
    /// Opaque token assigned by the service. The only public identifier of
    /// the record, embedded in the shareable verification URL.
    pub verification_code: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
