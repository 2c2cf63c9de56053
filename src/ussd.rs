//! Derivation of dialable USSD payment actions from a business record.
//!
//! These are presentation affordances: a payer taps the link and their phone
//! dialer takes over. Nothing here executes or observes a payment.

use crate::apis::businesses::BusinessRecord;

/// Fixed dial action for the CBE `*889#` banking short code.
///
/// The CBE USSD flow prompts for the amount itself, so none is embedded.
static CBE_DIAL: &str = "tel:*889%23";

/// The payment rail a dial action targets.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PaymentRail {
    /// Telebirr mobile money.
    Telebirr,
    /// Commercial Bank of Ethiopia.
    Cbe,
}

/// A dialable payment affordance derived from a resolved business record.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PaymentAction {
    pub rail: PaymentRail,
    /// The account the payer is asked to send to.
    pub account: String,
    /// The `tel:` link triggering the rail's USSD flow.
    pub dial: String,
}

/// Builds the Telebirr send-money dial string for the given account and
/// payer-entered amount.
///
/// The amount is embedded as typed, normalized to `0` when unset or invalid.
/// The trailing `%23` is the percent-encoded `#` terminating the USSD code.
pub fn telebirr_dial(account: &str, amount: &str) -> String {
    format!("tel:*127*1*{}*{}%23", account, normalize_amount(amount))
}

/// Returns the fixed CBE dial string. The amount is entered in the USSD flow
/// itself and is therefore not part of the link.
pub fn cbe_dial() -> &'static str {
    CBE_DIAL
}

/// Derives the dial actions available for a resolved record, Telebirr first.
///
/// A record with neither account yields no actions; such records are valid
/// but useless to a payer.
pub fn payment_actions(record: &BusinessRecord, amount: &str) -> Vec<PaymentAction> {
    let mut actions = Vec::new();

    if let Some(ref account) = record.telebirr_account {
        actions.push(PaymentAction {
            rail: PaymentRail::Telebirr,
            account: account.clone(),
            dial: telebirr_dial(account, amount),
        });
    }

    if let Some(ref account) = record.cbe_account {
        actions.push(PaymentAction {
            rail: PaymentRail::Cbe,
            account: account.clone(),
            dial: cbe_dial().to_string(),
        });
    }

    actions
}

/// Keeps the payer's amount as typed when it is a plain non-negative number,
/// and falls back to `"0"` otherwise.
fn normalize_amount(raw: &str) -> &str {
    let trimmed = raw.trim();
    // Only plain digits and a decimal point survive into a tel: link;
    // signs and scientific notation are not dialable.
    let dialable = !trimmed.is_empty()
        && trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
        && trimmed.parse::<f64>().is_ok();

    if dialable {
        trimmed
    } else {
        "0"
    }
}
