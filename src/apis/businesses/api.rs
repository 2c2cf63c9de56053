use crate::{
    apis::{
        businesses::{BusinessRecord, CreateBusinessRequest},
        EthioVerifyPayClientInner,
    },
    Error,
};
use reqwest::Url;
use std::sync::Arc;
use urlencoding::encode;

/// EthioVerifyPay Businesses APIs client.
#[derive(Clone, Debug)]
pub struct BusinessesApi {
    inner: Arc<EthioVerifyPayClientInner>,
}

impl BusinessesApi {
    pub(crate) fn new(inner: Arc<EthioVerifyPayClientInner>) -> Self {
        Self { inner }
    }

    /// Registers a new business and returns the stored record, including the
    /// server-assigned verification code.
    ///
    /// Exactly one request is issued per call. Registrations carry no
    /// idempotency key, so resubmitting after a failure may create a
    /// duplicate record on the service.
    #[tracing::instrument(
        name = "Create Business",
        skip(self, request),
        fields(business_name = %request.business_name)
    )]
    pub async fn create(&self, request: &CreateBusinessRequest) -> Result<BusinessRecord, Error> {
        let record = self
            .inner
            .client
            .post(
                self.inner
                    .environment
                    .api_url()
                    .join("/api/businesses")
                    .unwrap(),
            )
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(record)
    }

    /// Gets the business record identified by the given verification code.
    ///
    /// The code is treated as an opaque token; no client-side validation is
    /// attempted. If the service doesn't know the code, `None` is returned.
    #[tracing::instrument(name = "Get Business by Code", skip(self))]
    pub async fn get_by_code(&self, code: &str) -> Result<Option<BusinessRecord>, Error> {
        let res = self
            .inner
            .client
            .get(
                self.inner
                    .environment
                    .api_url()
                    .join(&format!("/api/businesses/{}", encode(code)))
                    .unwrap(),
            )
            .send()
            .await
            .map_err(Error::from);

        // Return `None` if the server returned 404
        let record = match res {
            Ok(body) => Some(body.json().await?),
            Err(Error::ApiError(api_error)) if api_error.status == 404 => None,
            Err(e) => return Err(e),
        };

        Ok(record)
    }

    /// Builds the shareable verification URL for the given code.
    ///
    /// This is the payload merchants print as a QR code:
    /// `<public-base>/verify/<code>`.
    pub fn share_link(&self, verification_code: &str) -> Url {
        self.inner
            .environment
            .public_url()
            .join(&format!("/verify/{}", encode(verification_code)))
            .unwrap()
    }
}
