use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::dispatcher::Dispatch;
use crate::domain::{ContactFields, MissingField, SubmissionResult};


/// How long a success or error status stays visible before reverting to idle.
pub const STATUS_DISPLAY_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
	#[default]
	Idle,
	Success,
	Error,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
	#[error("A submission is already in flight")]
	Busy,
	#[error(transparent)]
	MissingField(#[from] MissingField),
}

#[derive(Default)]
struct FormState {
	fields: ContactFields,
	status: FormStatus,
	busy: bool,
	status_reset: Option<JoinHandle<()>>,
}

/// Client-side contact form: editable fields, a transient status and a busy
/// flag, submitting through any [`Dispatch`] implementation.
///
/// Clones share the same state.
pub struct ContactForm<D> {
	dispatcher: Arc<D>,
	state: Arc<Mutex<FormState>>,
	status_duration: Duration,
}

impl<D> Clone for ContactForm<D> {
	fn clone(&self) -> Self {
		Self {
			dispatcher: Arc::clone(&self.dispatcher),
			state: Arc::clone(&self.state),
			status_duration: self.status_duration,
		}
	}
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
	state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the busy flag when dropped, including when `submit` is cancelled mid-dispatch.
struct BusyGuard(Arc<Mutex<FormState>>);

impl Drop for BusyGuard {
	fn drop(&mut self) {
		lock(&self.0).busy = false;
	}
}

impl<D: Dispatch> ContactForm<D> {
	pub fn new(dispatcher: D) -> Self {
		Self {
			dispatcher: Arc::new(dispatcher),
			state: Arc::new(Mutex::new(FormState::default())),
			status_duration: STATUS_DISPLAY_DURATION,
		}
	}

	pub fn with_status_duration(mut self, status_duration: Duration) -> Self {
		self.status_duration = status_duration;
		self
	}

	pub fn set_name(&self, name: impl Into<String>) {
		lock(&self.state).fields.name = name.into();
	}

	pub fn set_email(&self, email: impl Into<String>) {
		lock(&self.state).fields.email = email.into();
	}

	pub fn set_message(&self, message: impl Into<String>) {
		lock(&self.state).fields.message = message.into();
	}

	pub fn fields(&self) -> ContactFields {
		lock(&self.state).fields.clone()
	}

	pub fn status(&self) -> FormStatus {
		lock(&self.state).status
	}

	pub fn is_busy(&self) -> bool {
		lock(&self.state).busy
	}

	/// Submits the current fields.
	///
	/// Fields are cleared on success and kept on failure. Either way the status
	/// reverts to [`FormStatus::Idle`] after the display duration, unless a
	/// newer submission starts first.
	#[tracing::instrument(name = "Submitting the contact form", skip(self))]
	pub async fn submit(&self) -> Result<SubmissionResult, SubmitError> {
		let request = {
			let mut state = lock(&self.state);
			if state.busy {
				return Err(SubmitError::Busy);
			}
			let request = state.fields.clone().into_request()?;
			if let Some(pending_reset) = state.status_reset.take() {
				pending_reset.abort();
			}
			state.busy = true;
			request
		};
		let busy = BusyGuard(Arc::clone(&self.state));

		let result = self.dispatcher.dispatch(request).await;
		drop(busy);

		let mut state = lock(&self.state);
		if result.success {
			state.fields = ContactFields::default();
			state.status = FormStatus::Success;
		} else {
			state.status = FormStatus::Error;
		}
		state.status_reset = Some(self.schedule_status_reset());

		Ok(result)
	}

	fn schedule_status_reset(&self) -> JoinHandle<()> {
		let state = Arc::clone(&self.state);
		let delay = self.status_duration;
		tokio::spawn(async move {
			tokio::time::sleep(delay).await;
			let mut state = lock(&state);
			state.status = FormStatus::Idle;
			state.status_reset = None;
		})
	}
}
