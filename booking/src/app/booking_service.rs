//! Booking service
//!
//! Runs the two booking actions of the booking view: the availability check
//! and the booking submission. Each action makes at most one backend call,
//! brackets it with the loading indicator, and returns a typed outcome instead
//! of propagating transport errors.

use std::sync::Arc;

use crate::app::pending::LoadingGuard;
use crate::app::validator::{BookingValidator, SlotCheck, WITHIN_WORKING_HOURS_MESSAGE};
use crate::config::AvailabilityPolicy;
use crate::domain::entities::{
    AuthToken, AvailabilityQuery, AvailabilityResult, BookingConfirmation, BookingForm,
    BookingRequest, Submission, User,
};
use crate::domain::ports::{BookingApi, Clock, Notification, Notifier};
use crate::error::{BookingError, GENERIC_FAILURE_MESSAGE};

/// Shown when a booking is submitted without date or time
pub const DATE_TIME_REQUIRED_MESSAGE: &str = "Date & Time Required";

/// Service for checking slots and creating bookings
pub struct BookingService<A, C, N>
where
    A: BookingApi,
    C: Clock,
    N: Notifier,
{
    api: Arc<A>,
    validator: BookingValidator<C>,
    notifier: Arc<N>,
    policy: AvailabilityPolicy,
}

impl<A, C, N> BookingService<A, C, N>
where
    A: BookingApi,
    C: Clock,
    N: Notifier,
{
    pub fn new(api: Arc<A>, clock: Arc<C>, notifier: Arc<N>, policy: AvailabilityPolicy) -> Self {
        Self {
            api,
            validator: BookingValidator::new(clock),
            notifier,
            policy,
        }
    }

    /// Check whether the form's slot can be booked
    ///
    /// Local validation failures are reported without touching the backend.
    /// With [`AvailabilityPolicy::ConfirmLocally`] a slot inside working hours
    /// is confirmed from the doctor's timings alone.
    pub async fn check_availability(
        &self,
        form: &mut BookingForm,
        token: &AuthToken,
    ) -> AvailabilityResult {
        let hours = form.doctor().hours();
        let check = match self.validator.validate(form.date, form.time, &hours) {
            Ok(check) => check,
            Err(e) => {
                tracing::debug!(doctor_id = %form.doctor_id(), "Slot rejected locally: {}", e);
                self.notifier.notify(Notification::error(e.to_string()));
                return AvailabilityResult::Invalid(e);
            }
        };

        if let SlotCheck::WithinWorkingHours { .. } = check {
            if self.policy == AvailabilityPolicy::ConfirmLocally {
                self.notifier
                    .notify(Notification::success(WITHIN_WORKING_HOURS_MESSAGE));
                return AvailabilityResult::WithinWorkingHours;
            }
        }

        let query = AvailabilityQuery {
            doctor_id: form.doctor_id().to_string(),
            date: check.date(),
            time: check.time(),
        };

        let mut submission = Submission::new();
        submission.start();
        let response = {
            let _loading = LoadingGuard::show(self.notifier.as_ref());
            self.api.check_availability(&query, token).await
        };

        let result = match response {
            Ok(envelope) if envelope.success => {
                submission.succeed();
                let message = envelope.message_or_default();
                form.set_available(true);
                self.notifier.notify(Notification::success(message.clone()));
                AvailabilityResult::Available { message }
            }
            Ok(envelope) => {
                submission.fail();
                let message = envelope.message_or_default();
                form.set_available(false);
                self.notifier.notify(Notification::error(message.clone()));
                AvailabilityResult::Unavailable { message }
            }
            Err(e) => {
                submission.fail();
                tracing::error!(doctor_id = %query.doctor_id, "Availability check failed: {}", e);
                form.set_available(false);
                self.notifier
                    .notify(Notification::error(GENERIC_FAILURE_MESSAGE));
                AvailabilityResult::Invalid(BookingError::TransportFailure(e))
            }
        };

        tracing::debug!(
            doctor_id = %query.doctor_id,
            date = %query.date,
            time = %query.time,
            state = %submission.state(),
            "Availability check settled"
        );
        result
    }

    /// Create a booking for the form's slot on behalf of `requester`
    ///
    /// Only presence of date and time is checked locally. A rejected or failed
    /// booking is logged and returned but not shown to the user.
    pub async fn submit_booking(
        &self,
        form: &BookingForm,
        requester: &User,
        token: &AuthToken,
    ) -> Result<BookingConfirmation, BookingError> {
        let (Some(date), Some(time)) = (form.date, form.time) else {
            self.notifier
                .notify(Notification::error(DATE_TIME_REQUIRED_MESSAGE));
            return Err(BookingError::MissingInput);
        };

        let request = BookingRequest::new(form.doctor(), requester, date, time);

        let mut submission = Submission::new();
        submission.start();
        let response = {
            let _loading = LoadingGuard::show(self.notifier.as_ref());
            self.api.book_appointment(&request, token).await
        };

        let outcome = match response {
            Ok(envelope) if envelope.success => {
                submission.succeed();
                let message = envelope.message_or_default();
                self.notifier.notify(Notification::success(message.clone()));
                Ok(BookingConfirmation { message })
            }
            Ok(envelope) => {
                submission.fail();
                let message = envelope.message_or_default();
                tracing::warn!(
                    doctor_id = %request.doctor_id,
                    user_id = %request.user_id,
                    "Booking rejected: {}",
                    message
                );
                Err(BookingError::RemoteFailure(message))
            }
            Err(e) => {
                submission.fail();
                tracing::error!(
                    doctor_id = %request.doctor_id,
                    user_id = %request.user_id,
                    "Booking request failed: {}",
                    e
                );
                Err(BookingError::TransportFailure(e))
            }
        };

        tracing::info!(
            doctor_id = %request.doctor_id,
            date = %request.date,
            time = %request.time,
            state = %submission.state(),
            "Booking submission settled"
        );
        outcome
    }
}
