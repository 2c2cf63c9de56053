use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from the
/// business-record service into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an error if the response is not a success.
        // Try parsing the contents of the error as an `ErrorResponse`,
        // but if that doesn't work, use the entire contents of the response as the error text.
        if !response.status().is_success() {
            let status = response.status();
            let bytes = response.bytes().await?;

            tracing::debug!("Failed HTTP request. Status code: {}", status);

            let error_response: ErrorResponse =
                serde_json::from_slice(&bytes).unwrap_or_else(|_| ErrorResponse {
                    error: if bytes.is_empty() {
                        status
                            .canonical_reason()
                            .unwrap_or("Unknown Error")
                            .to_string()
                    } else {
                        String::from_utf8_lossy(&bytes).into_owned()
                    },
                    message: None,
                });

            return Err(Error::ApiError(error_response.into_api_error(status.as_u16())).into());
        }

        Ok(response)
    }
}

/// Error response from the business-record service.
#[derive(serde::Deserialize, Debug)]
struct ErrorResponse {
    error: String,
    message: Option<String>,
}

impl ErrorResponse {
    fn into_api_error(self, http_status: u16) -> ApiError {
        ApiError {
            status: http_status,
            message: self.error,
            detail: self.message,
        }
    }
}
