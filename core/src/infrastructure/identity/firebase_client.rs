use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError, identity::ports::IdentityProviderPort,
};

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Firebase Auth REST adapter. Only the two calls the account teardown
/// cascade needs are implemented; everything else about credentials lives
/// in the provider.
#[derive(Debug, Clone)]
pub struct FirebaseIdentityProvider {
    api_key: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SignInRequest {
    email: String,
    password: String,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
struct DeleteRequest {
    #[serde(rename = "localId")]
    local_id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl FirebaseIdentityProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/accounts:{}?key={}", IDENTITY_TOOLKIT_URL, action, self.api_key)
    }
}

impl IdentityProviderPort for FirebaseIdentityProvider {
    async fn verify_credentials(&self, email: String, password: String) -> Result<bool, CoreError> {
        let response = self
            .client
            .post(self.endpoint("signInWithPassword"))
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity provider request failed: {}", e);
                CoreError::ExternalServiceError(format!("Identity provider error: {}", e))
            })?;

        if response.status().is_success() {
            return Ok(true);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        // Wrong password and unknown account are a normal "not verified",
        // anything else is a provider failure.
        if status == reqwest::StatusCode::BAD_REQUEST {
            let known_rejection = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| {
                    matches!(
                        e.error.message.as_str(),
                        "INVALID_PASSWORD" | "EMAIL_NOT_FOUND" | "INVALID_LOGIN_CREDENTIALS"
                    )
                })
                .unwrap_or(false);

            if known_rejection {
                return Ok(false);
            }
        }

        tracing::error!("Identity provider error: {} - {}", status, body);
        Err(CoreError::ExternalServiceError(format!(
            "Identity provider returned error: {}",
            status
        )))
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), CoreError> {
        let response = self
            .client
            .post(self.endpoint("delete"))
            .json(&DeleteRequest {
                local_id: user_id.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity provider request failed: {}", e);
                CoreError::ExternalServiceError(format!("Identity provider error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Failed to delete auth user: {} - {}", status, body);
            return Err(CoreError::ExternalServiceError(format!(
                "Identity provider returned error: {}",
                status
            )));
        }

        Ok(())
    }
}
