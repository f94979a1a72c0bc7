use inquire::InquireError;

mod glyphs;
mod spinner;
mod style;

pub use glyphs::GlyphStyle;
pub use spinner::{Spinner, TICK_INTERVAL};
pub use style::Style;

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prompt_cancelled_operation_canceled() {
        assert!(is_prompt_cancelled(&InquireError::OperationCanceled));
    }

    #[test]
    fn test_is_prompt_cancelled_operation_interrupted() {
        assert!(is_prompt_cancelled(&InquireError::OperationInterrupted));
    }

    #[test]
    fn test_is_prompt_cancelled_other_error() {
        let err = InquireError::Custom("test".into());
        assert!(!is_prompt_cancelled(&err));
    }
}
