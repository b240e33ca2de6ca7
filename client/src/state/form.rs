//! Submission status shared by the login and registration forms.
//!
//! DESIGN
//! ======
//! Each form keeps one `FormStatus` in an `RwSignal`. `begin` is the only way
//! into the submitting state and refuses while a request is in flight, which
//! keeps at most one submission per form outstanding.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub submitting: bool,
    /// Form-level (not field-level) failure message from the last attempt.
    pub message: Option<String>,
}

impl FormStatus {
    /// Enter the submitting state. Returns `false` if already submitting.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.message = None;
        true
    }

    pub fn finish(&mut self) {
        self.submitting = false;
    }

    /// Leave the submitting state with a message; field values stay untouched.
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.message = Some(message);
    }
}
