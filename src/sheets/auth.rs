use crate::error::{AppError, Result};
use crate::sheets::client::AUTH_SCOPE;
use hyper_util::client::legacy::connect::HttpConnector;
use std::path::Path;
use tracing::debug;
use yup_oauth2::{
    ServiceAccountAuthenticator, authenticator::Authenticator, hyper_rustls::HttpsConnector,
    read_service_account_key,
};

type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Create and verify authenticator by fetching a token
pub(super) async fn create_and_verify_authenticator(credentials_path: &Path) -> Result<AuthType> {
    let key = read_service_account_key(credentials_path).await.map_err(|e| {
        AppError::Auth(format!(
            "Failed to read service account key {:?}: {}",
            credentials_path, e
        ))
    })?;

    let auth = ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    // Trigger authentication by requesting a token
    let _token = auth
        .token(&[AUTH_SCOPE])
        .await
        .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;

    debug!("Service account token acquired");

    Ok(auth)
}
