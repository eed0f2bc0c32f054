use std::fmt;

use thiserror::Error;

/// A wizard step that must be completed before submitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingStep {
    Date,
    Time,
    Guests,
}

impl fmt::Display for MissingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissingStep::Date => "date",
            MissingStep::Time => "time",
            MissingStep::Guests => "guest count",
        };
        f.write_str(name)
    }
}

/// Raised by `submit` when the draft is incomplete.
///
/// `Display` is the notice shown to the guest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please complete all reservation steps. Missing: {}.", list_steps(.missing))]
pub struct ValidationError {
    pub missing: Vec<MissingStep>,
}

fn list_steps(steps: &[MissingStep]) -> String {
    steps
        .iter()
        .map(MissingStep::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_names_missing_steps() {
        let err = ValidationError { missing: vec![MissingStep::Time] };
        assert_eq!(err.to_string(), "Please complete all reservation steps. Missing: time.");

        let err = ValidationError {
            missing: vec![MissingStep::Date, MissingStep::Time, MissingStep::Guests],
        };
        assert_eq!(
            err.to_string(),
            "Please complete all reservation steps. Missing: date, time, guest count."
        );
    }
}
