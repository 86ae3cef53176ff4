//! HTTP client for the booking backend

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::{
    AuthToken, AvailabilityQuery, BookingRequest, Credentials, Doctor, Registration, User,
};
use crate::domain::ports::{Acknowledgement, ApiEnvelope, BookingApi};
use crate::error::ApiError;

/// Implementation of the booking backend client
#[derive(Clone)]
pub struct HttpBookingApi {
    http: Client,
    base_url: String,
}

impl HttpBookingApi {
    /// Create a client with the HTTP client's default timeout
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::build(base_url, Client::builder())
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Self::build(&config.api_base_url, builder)
    }

    fn build(base_url: &str, builder: reqwest::ClientBuilder) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = builder.default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    // --- Internal helpers ---

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &AuthToken,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let response = self
            .http
            .get(self.api_url(path))
            .header(AUTHORIZATION, bearer(token)?)
            .send()
            .await?;

        handle_response(response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&AuthToken>,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let mut request = self.http.post(self.api_url(path)).json(body);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, bearer(token)?);
        }

        let response = request.send().await?;

        handle_response(response).await
    }
}

fn bearer(token: &AuthToken) -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(|_| ApiError::InvalidToken)
}

async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<ApiEnvelope<T>, ApiError> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    } else if status.as_u16() == 401 {
        Err(ApiError::Unauthorized)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

// --- Request Types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DoctorByIdRequest<'a> {
    doctor_id: &'a str,
}

#[derive(Debug, Serialize)]
struct EmptyRequest {}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn register(&self, details: &Registration) -> Result<Acknowledgement, ApiError> {
        tracing::debug!(email = %details.email, "POST /user/register");
        self.post("/user/register", details, None).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<Acknowledgement, ApiError> {
        tracing::debug!(email = %credentials.email, "POST /user/login");
        self.post("/user/login", credentials, None).await
    }

    async fn current_user(&self, token: &AuthToken) -> Result<ApiEnvelope<User>, ApiError> {
        self.post("/user/getUserData", &EmptyRequest {}, Some(token))
            .await
    }

    async fn list_doctors(&self, token: &AuthToken) -> Result<ApiEnvelope<Vec<Doctor>>, ApiError> {
        self.get("/user/getAllDoctors", token).await
    }

    async fn doctor_by_id(
        &self,
        doctor_id: &str,
        token: &AuthToken,
    ) -> Result<ApiEnvelope<Doctor>, ApiError> {
        tracing::debug!(doctor_id = %doctor_id, "POST /doctor/getDoctorById");
        self.post(
            "/doctor/getDoctorById",
            &DoctorByIdRequest { doctor_id },
            Some(token),
        )
        .await
    }

    async fn check_availability(
        &self,
        query: &AvailabilityQuery,
        token: &AuthToken,
    ) -> Result<Acknowledgement, ApiError> {
        tracing::debug!(
            doctor_id = %query.doctor_id,
            date = %query.date,
            time = %query.time,
            "POST /user/booking-availability"
        );
        self.post("/user/booking-availability", query, Some(token))
            .await
    }

    async fn book_appointment(
        &self,
        request: &BookingRequest,
        token: &AuthToken,
    ) -> Result<Acknowledgement, ApiError> {
        tracing::debug!(
            doctor_id = %request.doctor_id,
            user_id = %request.user_id,
            "POST /user/book-appointment"
        );
        self.post("/user/book-appointment", request, Some(token))
            .await
    }
}
