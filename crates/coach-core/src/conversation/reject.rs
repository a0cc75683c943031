use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest message the chat backend accepts, in characters.
pub const MAX_INPUT_CHARS: usize = 10_000;

/// Why a submission was refused.
///
/// A rejection is final for that call: nothing is appended, no credit is
/// touched, and nothing is queued.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    #[error("message is empty")]
    EmptyInput,

    #[error("message is longer than {max} characters")]
    InputTooLong { max: usize },

    #[error("a reply is already on its way")]
    AlreadyPending,

    #[error("no AI credits remaining")]
    NoCreditsRemaining,
}

/// Checks the text of a submission on its own, before any state is consulted.
pub fn validate_input(text: &str) -> Result<(), RejectReason> {
    if text.trim().is_empty() {
        return Err(RejectReason::EmptyInput);
    }
    if text.chars().count() > MAX_INPUT_CHARS {
        return Err(RejectReason::InputTooLong {
            max: MAX_INPUT_CHARS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(validate_input(""), Err(RejectReason::EmptyInput));
        assert_eq!(validate_input("   "), Err(RejectReason::EmptyInput));
        assert_eq!(validate_input("\n\t "), Err(RejectReason::EmptyInput));
    }

    #[test]
    fn test_length_limit_counts_chars() {
        let at_limit = "é".repeat(MAX_INPUT_CHARS);
        assert_eq!(validate_input(&at_limit), Ok(()));

        let over = "a".repeat(MAX_INPUT_CHARS + 1);
        assert_eq!(
            validate_input(&over),
            Err(RejectReason::InputTooLong {
                max: MAX_INPUT_CHARS
            })
        );
    }
}
