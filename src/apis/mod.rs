//! Clients for the EthioVerifyPay APIs.

use crate::client::Environment;
use reqwest_middleware::ClientWithMiddleware;
use std::fmt::{Debug, Formatter};

pub mod businesses;

pub(crate) struct EthioVerifyPayClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
}

impl Debug for EthioVerifyPayClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthioVerifyPayClientInner")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
