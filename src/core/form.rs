// Contact form validation and submission lifecycle.
//
// The transport boundary contract is "accept {name, email, message},
// respond success/failure"; the web layer currently simulates the round
// trip but the result type here is what a real endpoint would produce.

use thiserror::Error;

/// Payload for the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Validate one submission attempt. Returns the invalid fields in display
/// order; validity is computed per attempt, never persisted.
pub fn validate(req: &ContactRequest) -> Result<(), Vec<Field>> {
    let mut invalid = Vec::new();
    if req.name.trim().is_empty() {
        invalid.push(Field::Name);
    }
    if req.email.trim().is_empty() || !is_valid_email(&req.email) {
        invalid.push(Field::Email);
    }
    if req.message.trim().is_empty() {
        invalid.push(Field::Message);
    }
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(invalid)
    }
}

/// Accepts `local@domain.tld` shapes: exactly one `@`, no whitespace, and a
/// domain with non-empty labels on both sides of its last dot.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Transport-level failure surfaced by the submission endpoint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("the endpoint rejected the message: {0}")]
    Rejected(String),
    #[error("the request never reached the endpoint")]
    Unreachable,
}

/// Lifecycle of the submit control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    phase: SubmitPhase,
}

impl SubmitState {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Idle -> Sending. False while a submission is in flight or the
    /// success state has not cleared yet.
    pub fn begin(&mut self) -> bool {
        if self.phase == SubmitPhase::Idle {
            self.phase = SubmitPhase::Sending;
            true
        } else {
            false
        }
    }

    /// Sending -> Sent.
    pub fn succeed(&mut self) -> bool {
        if self.phase == SubmitPhase::Sending {
            self.phase = SubmitPhase::Sent;
            true
        } else {
            false
        }
    }

    /// Sending -> Idle; the form is immediately resubmittable after a
    /// failed round trip.
    pub fn fail(&mut self) -> bool {
        if self.phase == SubmitPhase::Sending {
            self.phase = SubmitPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Sent -> Idle once the success indication has run its course.
    pub fn clear(&mut self) -> bool {
        if self.phase == SubmitPhase::Sent {
            self.phase = SubmitPhase::Idle;
            true
        } else {
            false
        }
    }
}

/// Kind of transient feedback shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}
