//! MediBook MCP Server implementation
//!
//! Every tool call is one user action: it builds fresh services with their own
//! message log and returns the collected notifications as the tool output.
//! The session obtained from `login`/`register` is kept here and passed
//! explicitly to each service call.

use std::sync::Arc;

use anyhow::Result;
use medibook::adapters::{HttpBookingApi, MessageLog, SystemClock};
use medibook::app::{AccountService, BookingService, DoctorService};
use medibook::domain::entities::{
    AuthToken, AvailabilityResult, BookingDate, BookingForm, BookingTime, Credentials, Doctor,
    Registration, Session, User,
};
use medibook::error::ParseError;
use medibook::{AvailabilityPolicy, BookingError, Config};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::RwLock;

const NOT_SIGNED_IN: &str = "Not signed in. Use the 'login' or 'register' tool first.";

/// MediBook MCP Server
///
/// Lets an assistant sign in, browse doctors, check a slot and book it.
#[derive(Clone)]
pub struct MediBookServer {
    api: Arc<HttpBookingApi>,
    clock: Arc<SystemClock>,
    policy: AvailabilityPolicy,
    session: Arc<RwLock<Option<Session>>>,
    tool_router: ToolRouter<Self>,
}

impl MediBookServer {
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;
        let api = HttpBookingApi::from_config(&config)?;
        let session = config.token.clone().map(|t| Session::new(AuthToken::new(t)));

        tracing::info!(
            api_url = %api.base_url(),
            policy = ?config.availability_policy,
            signed_in = session.is_some(),
            "Configured booking backend"
        );

        Ok(Self::new(api, config.availability_policy, session))
    }

    pub fn new(api: HttpBookingApi, policy: AvailabilityPolicy, session: Option<Session>) -> Self {
        Self {
            api: Arc::new(api),
            clock: Arc::new(SystemClock),
            policy,
            session: Arc::new(RwLock::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    async fn token(&self) -> Option<AuthToken> {
        self.session.read().await.as_ref().map(|s| s.token.clone())
    }

    async fn store_session(&self, session: Session) {
        *self.session.write().await = Some(session);
    }

    /// The signed-in user, fetched once per session
    async fn requester(&self, token: &AuthToken) -> Result<User, BookingError> {
        if let Some(user) = self
            .session
            .read()
            .await
            .as_ref()
            .and_then(|s| s.user.clone())
        {
            return Ok(user);
        }

        let accounts = AccountService::new(self.api.clone(), Arc::new(MessageLog::new()));
        let user = accounts.current_user(token).await?;

        let mut session = self.session.write().await;
        if let Some(session) = session.as_mut() {
            if &session.token == token {
                session.user = Some(user.clone());
            }
        }
        Ok(user)
    }

    fn booking_service(&self, log: Arc<MessageLog>) -> BookingService<HttpBookingApi, SystemClock, MessageLog> {
        BookingService::new(self.api.clone(), self.clock.clone(), log, self.policy)
    }

    async fn open_form(
        &self,
        params: &SlotParams,
        token: &AuthToken,
    ) -> Result<BookingForm, String> {
        let (date, time) = params.parse().map_err(|e| e.to_string())?;
        let doctors = DoctorService::new(self.api.clone());
        let mut form = doctors
            .open_booking_form(&params.doctor_id, token)
            .await
            .map_err(|e| e.to_string())?;
        form.date = date;
        form.time = time;
        Ok(form)
    }
}

/// Tool output from the notifications of one action
fn respond(log: &MessageLog, fallback: impl Into<String>, failed: bool) -> CallToolResult {
    let mut text = log.render();
    if text.is_empty() {
        text = fallback.into();
    }
    if failed || log.has_errors() {
        CallToolResult::error(vec![Content::text(text)])
    } else {
        CallToolResult::success(vec![Content::text(text)])
    }
}

fn fail(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

fn describe_doctor(doctor: &Doctor) -> String {
    let timings = match doctor.working_hours() {
        Some(hours) => hours.to_string(),
        None => doctor.timings.join(" - "),
    };
    format!(
        "{} (id: {})\n  Fees: {}\n  Timings: {}",
        doctor.full_name(),
        doctor.id,
        doctor.fees_display(),
        timings
    )
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RegisterParams {
    /// Full name
    pub name: String,
    /// Email address used to sign in
    pub email: String,
    /// Password
    pub password: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LoginParams {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DoctorParams {
    /// Doctor id from 'list_doctors'
    pub doctor_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SlotParams {
    /// Doctor id from 'list_doctors'
    pub doctor_id: String,
    /// Appointment day as DD-MM-YYYY (e.g. "18-10-2026")
    #[serde(default)]
    pub date: Option<String>,
    /// Appointment time as hh:mm AM/PM (e.g. "11:00 AM")
    #[serde(default)]
    pub time: Option<String>,
}

impl SlotParams {
    /// Blank values count as not selected
    fn parse(&self) -> Result<(Option<BookingDate>, Option<BookingTime>), ParseError> {
        let date = match self.date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.parse()?),
            _ => None,
        };
        let time = match self.time.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.parse()?),
            _ => None,
        };
        Ok((date, time))
    }
}

#[tool_router]
impl MediBookServer {
    // === Account ===

    #[tool(description = "Create a patient account. Signs you in on success.")]
    async fn register(
        &self,
        params: Parameters<RegisterParams>,
    ) -> Result<CallToolResult, McpError> {
        let log = Arc::new(MessageLog::new());
        let accounts = AccountService::new(self.api.clone(), log.clone());
        let details = Registration {
            name: params.0.name,
            email: params.0.email,
            password: params.0.password,
        };
        match accounts.register(details).await {
            Ok(session) => {
                self.store_session(session).await;
                Ok(respond(&log, "Registered", false))
            }
            Err(e) => Ok(respond(&log, e.to_string(), true)),
        }
    }

    #[tool(description = "Sign in with email and password. Required before any other tool.")]
    async fn login(&self, params: Parameters<LoginParams>) -> Result<CallToolResult, McpError> {
        let log = Arc::new(MessageLog::new());
        let accounts = AccountService::new(self.api.clone(), log.clone());
        let credentials = Credentials {
            email: params.0.email,
            password: params.0.password,
        };
        match accounts.login(credentials).await {
            Ok(session) => {
                self.store_session(session).await;
                Ok(respond(&log, "Signed in", false))
            }
            Err(e) => Ok(respond(&log, e.to_string(), true)),
        }
    }

    // === Doctors ===

    #[tool(description = "List doctors you can book, with fees and working hours.")]
    async fn list_doctors(&self) -> Result<CallToolResult, McpError> {
        let Some(token) = self.token().await else {
            return Ok(fail(NOT_SIGNED_IN));
        };
        match DoctorService::new(self.api.clone()).list_doctors(&token).await {
            Ok(doctors) if doctors.is_empty() => {
                Ok(CallToolResult::success(vec![Content::text("No doctors available.")]))
            }
            Ok(doctors) => {
                let listing = doctors
                    .iter()
                    .map(describe_doctor)
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(CallToolResult::success(vec![Content::text(listing)]))
            }
            Err(e) => Ok(fail(e.to_string())),
        }
    }

    #[tool(description = "Show one doctor's details, fees and working hours.")]
    async fn doctor(&self, params: Parameters<DoctorParams>) -> Result<CallToolResult, McpError> {
        let Some(token) = self.token().await else {
            return Ok(fail(NOT_SIGNED_IN));
        };
        match DoctorService::new(self.api.clone())
            .doctor_by_id(&params.0.doctor_id, &token)
            .await
        {
            Ok(doctor) => Ok(CallToolResult::success(vec![Content::text(describe_doctor(
                &doctor,
            ))])),
            Err(e) => Ok(fail(e.to_string())),
        }
    }

    // === Booking ===

    #[tool(
        description = "Check a date (DD-MM-YYYY) and time (hh:mm AM/PM) against the doctor's working hours and availability."
    )]
    async fn check_availability(
        &self,
        params: Parameters<SlotParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(token) = self.token().await else {
            return Ok(fail(NOT_SIGNED_IN));
        };
        let mut form = match self.open_form(&params.0, &token).await {
            Ok(form) => form,
            Err(message) => return Ok(fail(message)),
        };

        let log = Arc::new(MessageLog::new());
        let result = self
            .booking_service(log.clone())
            .check_availability(&mut form, &token)
            .await;

        let failed = matches!(
            result,
            AvailabilityResult::Invalid(_) | AvailabilityResult::Unavailable { .. }
        );
        Ok(respond(&log, format!("{:?}", result), failed))
    }

    #[tool(
        description = "Book an appointment with a doctor for a date (DD-MM-YYYY) and time (hh:mm AM/PM)."
    )]
    async fn book_appointment(
        &self,
        params: Parameters<SlotParams>,
    ) -> Result<CallToolResult, McpError> {
        let Some(token) = self.token().await else {
            return Ok(fail(NOT_SIGNED_IN));
        };
        let form = match self.open_form(&params.0, &token).await {
            Ok(form) => form,
            Err(message) => return Ok(fail(message)),
        };
        let requester = match self.requester(&token).await {
            Ok(user) => user,
            Err(e) => return Ok(fail(e.to_string())),
        };

        let log = Arc::new(MessageLog::new());
        match self
            .booking_service(log.clone())
            .submit_booking(&form, &requester, &token)
            .await
        {
            Ok(confirmation) => Ok(respond(&log, confirmation.message, false)),
            // Rejections are not notified; the tool still has to answer
            Err(e) => Ok(respond(&log, format!("Booking was not created: {}", e), true)),
        }
    }
}

#[tool_handler]
impl ServerHandler for MediBookServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "medibook".into(),
                title: Some("MediBook MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"MediBook - Doctor Appointment Booking

SETUP: Sign in with 'login' (or create an account with 'register').

WORKFLOW:
1. 'list_doctors' - See doctors, their fees and working hours
2. 'doctor' - Show one doctor's details
3. 'check_availability' - Check a date and time for a doctor
4. 'book_appointment' - Book the slot

FORMATS:
- Dates are DD-MM-YYYY, e.g. 18-10-2026
- Times are hh:mm AM/PM, e.g. 11:00 AM

RULES:
- Dates in the past are rejected
- Times outside the doctor's working hours are rejected"#
                    .into(),
            ),
        }
    }
}
