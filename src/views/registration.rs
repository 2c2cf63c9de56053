//! State model for the business registration screen.

use crate::apis::businesses::{
    BusinessRecord, BusinessesApi, CreateBusinessRequest,
};
use reqwest::Url;

/// Raw form inputs of the registration screen.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RegistrationForm {
    pub business_name: String,
    pub owner_name: String,
    pub telebirr_account: String,
    pub cbe_account: String,
}

impl RegistrationForm {
    /// Validates the form at the input layer.
    ///
    /// All four fields are required: an incomplete form is rejected before
    /// any request is dispatched.
    pub fn validate(&self) -> Result<CreateBusinessRequest, IncompleteForm> {
        let all_filled = [
            &self.business_name,
            &self.owner_name,
            &self.telebirr_account,
            &self.cbe_account,
        ]
        .iter()
        .all(|field| !field.trim().is_empty());

        if !all_filled {
            return Err(IncompleteForm);
        }

        Ok(CreateBusinessRequest {
            business_name: self.business_name.clone(),
            owner_name: self.owner_name.clone(),
            telebirr_account: self.telebirr_account.clone(),
            cbe_account: self.cbe_account.clone(),
        })
    }
}

/// The form was submitted with one or more empty fields.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("all registration fields are required")]
pub struct IncompleteForm;

/// Screen state of the registration view.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RegistrationState {
    /// The empty form, waiting for input.
    Idle,
    /// A registration request is in flight.
    Submitting,
    /// The business was registered and a share link derived.
    Created(RegisteredBusiness),
    /// Submission failed. The cause (network error or server rejection) is
    /// logged but not surfaced; the user is expected to resubmit.
    Failed,
}

/// A successfully registered business, ready to be printed as a QR flyer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RegisteredBusiness {
    pub record: BusinessRecord,
    /// Shareable URL embedding the verification code, used as QR payload.
    pub share_url: Url,
}

/// The registration view: owns the screen state and drives submissions.
#[derive(Debug)]
pub struct RegistrationView {
    state: RegistrationState,
}

impl RegistrationView {
    pub fn new() -> Self {
        Self {
            state: RegistrationState::Idle,
        }
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    /// Submits the form, issuing exactly one creation request.
    ///
    /// An incomplete form is rejected before dispatch and leaves the state
    /// untouched. Any failure past that point moves the view to the terminal
    /// [`RegistrationState::Failed`] state.
    pub async fn submit(
        &mut self,
        api: &BusinessesApi,
        form: &RegistrationForm,
    ) -> Result<&RegistrationState, IncompleteForm> {
        let request = form.validate()?;

        self.state = RegistrationState::Submitting;

        self.state = match api.create(&request).await {
            Ok(record) => {
                let share_url = api.share_link(&record.verification_code);
                RegistrationState::Created(RegisteredBusiness { record, share_url })
            }
            Err(e) => {
                tracing::error!("Business registration failed: {}", e);
                RegistrationState::Failed
            }
        };

        Ok(&self.state)
    }

    /// Returns to the empty form ("Create New Profile").
    pub fn reset(&mut self) {
        self.state = RegistrationState::Idle;
    }
}

impl Default for RegistrationView {
    fn default() -> Self {
        Self::new()
    }
}
