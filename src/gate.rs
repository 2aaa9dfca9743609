//! Input length gate.
//!
//! Purely informational: reports how much of the length budget the current
//! text uses. Typing past the limit is never blocked here.

/// Default maximum input length in characters.
///
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 100;

/// Snapshot of the text currently in the input field.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub raw_text: String,
    pub length: usize,
}

impl InputState {
    pub fn new(raw_text: &str) -> Self {
        InputState {
            raw_text: raw_text.to_owned(),
            length: raw_text.chars().count(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputGate {
    max: usize,
    enforce: bool,
}

impl InputGate {
    /// Returns a gate with the given limit. With `enforce` set, submissions
    /// are truncated to the limit.
    ///
    pub fn new(max: usize, enforce: bool) -> Self {
        InputGate { max, enforce }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the counter display for the current text, formatted as
    /// `{length}/{max}`.
    ///
    pub fn on_input(&self, current_text: &str) -> String {
        self.display(&InputState::new(current_text))
    }

    /// Whether the current text is longer than the limit.
    ///
    pub fn exceeds(&self, current_text: &str) -> bool {
        self.is_over_limit(&InputState::new(current_text))
    }

    pub fn display(&self, input: &InputState) -> String {
        format!("{}/{}", input.length, self.max)
    }

    pub fn is_over_limit(&self, input: &InputState) -> bool {
        input.length > self.max
    }

    /// Return the text to send for a submission, truncated when the limit
    /// is enforced.
    ///
    pub fn prepare_submission(&self, text: &str) -> String {
        if self.enforce {
            text.chars().take(self.max).collect()
        } else {
            text.to_owned()
        }
    }
}

impl Default for InputGate {
    fn default() -> Self {
        InputGate::new(DEFAULT_MAX_INPUT_LENGTH, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_input_counts_characters() {
        let gate = InputGate::default();
        assert_eq!(gate.on_input(""), "0/100");
        assert_eq!(gate.on_input("buy milk"), "8/100");
        assert_eq!(gate.on_input("καλημέρα"), "8/100");
    }

    #[test]
    fn test_on_input_past_limit_is_advisory() {
        let gate = InputGate::default();
        let long = "x".repeat(130);
        assert_eq!(gate.on_input(&long), "130/100");
        assert!(gate.is_over_limit(&InputState::new(&long)));
        assert!(gate.exceeds(&long));
        assert!(!gate.exceeds(&"x".repeat(100)));
        assert_eq!(gate.prepare_submission(&long), long);
    }

    #[test]
    fn test_enforced_limit_truncates() {
        let gate = InputGate::new(5, true);
        assert_eq!(gate.prepare_submission("abcdefgh"), "abcde");
        assert_eq!(gate.prepare_submission("abc"), "abc");
    }

    #[test]
    fn test_input_state_length() {
        let input = InputState::new("héllo");
        assert_eq!(input.length, 5);
        assert_eq!(input.raw_text, "héllo");
        assert_eq!(InputState::default().length, 0);
    }
}
