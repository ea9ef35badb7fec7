use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// An error type for the backend

pub enum AppError {
    
    /// The auth provider settings were not supplied when the server started.
    /// Translates to http status code `503 Service Unavailable`.
    ///
    /// The frontend logs the failed load and the vendor login page reports
    /// sign in as unavailable.
    
    MissingConfig,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingConfig => (
                StatusCode::SERVICE_UNAVAILABLE,
                "sign in is not configured on this server".to_owned(),
            ),
        };

        (status, message).into_response()
    }
}
