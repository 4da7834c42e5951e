//! Stub rules shared by unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::foundation::{Rule, ValidationError};

/// Always passes.
pub struct Pass;

impl Rule for Pass {
    type Input = i32;

    fn validate(&self, _input: &i32) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Always fails with the given code.
pub struct Fail(pub &'static str);

impl Rule for Fail {
    type Input = i32;

    fn validate(&self, _input: &i32) -> Result<(), ValidationError> {
        Err(ValidationError::new(self.0, "stub failure"))
    }
}

/// Always fails with a clone of the given error.
pub struct Reject(pub ValidationError);

impl Rule for Reject {
    type Input = i32;

    fn validate(&self, _input: &i32) -> Result<(), ValidationError> {
        Err(self.0.clone())
    }
}

/// Read side of a [`Counting`] rule.
#[derive(Clone)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Passes or fails as configured and counts its invocations.
pub struct Counting {
    pass: bool,
    calls: Arc<AtomicUsize>,
}

impl Counting {
    pub fn new(pass: bool) -> (Self, Calls) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                pass,
                calls: Arc::clone(&calls),
            },
            Calls(calls),
        )
    }
}

impl Rule for Counting {
    type Input = i32;

    fn validate(&self, _input: &i32) -> Result<(), ValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.pass {
            Ok(())
        } else {
            Err(ValidationError::new("counting", "counting stub failed"))
        }
    }
}
