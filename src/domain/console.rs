//! Line-oriented console port used by the interactive builder

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console input closed")]
    Closed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A line-oriented console
pub trait Console {
    /// Show `prompt` and read one line, without its line terminator
    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Print one line of output
    fn print(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// Ask a question until the answer is exactly one of `options`
/// (case-insensitive, surrounding whitespace not allowed)
pub fn choice(
    console: &mut dyn Console,
    prompt: &str,
    options: &[char],
) -> Result<char, ConsoleError> {
    loop {
        let answer = console.read_line(prompt)?.to_lowercase();
        let mut chars = answer.chars();

        if let (Some(c), None) = (chars.next(), chars.next()) {
            if options.contains(&c) {
                return Ok(c);
            }
        }
    }
}

/// Ask a yes/no question, accepting only `y` or `n`
pub fn yes_no(console: &mut dyn Console, prompt: &str) -> Result<bool, ConsoleError> {
    Ok(choice(console, prompt, &['y', 'n'])? == 'y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::console::LineConsole;

    #[test]
    fn test_yes_no_reprompts_until_valid() {
        let mut console = LineConsole::scripted(&["maybe", "", "yes", "Y"]);

        assert!(yes_no(&mut console, "Continue? (Y/N)").unwrap());
        assert_eq!(console.transcript().matches("Continue? (Y/N)").count(), 4);
    }

    #[test]
    fn test_yes_no_accepts_uppercase_no() {
        let mut console = LineConsole::scripted(&["N"]);
        assert!(!yes_no(&mut console, "Continue?").unwrap());
    }

    #[test]
    fn test_yes_no_rejects_padded_answer() {
        let mut console = LineConsole::scripted(&[" y ", "y "]);
        let result = yes_no(&mut console, "Continue?");

        assert!(matches!(result, Err(ConsoleError::Closed)));
        assert_eq!(console.transcript().matches("Continue?").count(), 3);
    }

    #[test]
    fn test_choice_on_closed_input() {
        let mut console = LineConsole::scripted(&["x"]);
        let result = choice(&mut console, "Pick", &['a', 'b']);
        assert!(matches!(result, Err(ConsoleError::Closed)));
    }
}
