// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One-call prompts built on [`Terminal`], with validation and re-prompting.
//!
//! Each function opens the terminal with [`Terminal::new()`], so it works even when
//! stdin is not a terminal (plain line input is used then). The `*_with` variants take
//! a [`Terminal`] you already have, which is also how they are tested.
//!
//! Re-prompting stops at the first error, except [`PromptError::EndOfStream`]: the
//! partial line is validated once, and returned if it is acceptable. Closed input never
//! causes an endless re-prompt loop.

use crate::{PromptError, Terminal, TerminalDevice};

/// Keep asking until `test` accepts the line. `test` returns the value to hand back
/// and whether it is acceptable.
///
/// # Errors
///
/// See [module docs](self).
pub fn custom(
    prefix: &str,
    test: impl FnMut(String) -> (String, bool),
) -> Result<String, PromptError> {
    custom_with(&mut Terminal::new(), prefix, test)
}

/// [`custom`] on an existing [`Terminal`].
///
/// # Errors
///
/// See [module docs](self).
pub fn custom_with<D: TerminalDevice>(
    terminal: &mut Terminal<D>,
    prefix: &str,
    test: impl FnMut(String) -> (String, bool),
) -> Result<String, PromptError> {
    read_until_accepted(|| terminal.read_line(prefix), test)
}

/// Read a line. If `required`, keep asking until it isn't empty.
///
/// # Errors
///
/// See [module docs](self).
pub fn basic(prefix: &str, required: bool) -> Result<String, PromptError> {
    basic_with(&mut Terminal::new(), prefix, required)
}

/// [`basic`] on an existing [`Terminal`].
///
/// # Errors
///
/// See [module docs](self).
pub fn basic_with<D: TerminalDevice>(
    terminal: &mut Terminal<D>,
    prefix: &str,
    required: bool,
) -> Result<String, PromptError> {
    custom_with(terminal, prefix, |input| {
        let accepted = !(required && input.is_empty());
        (input, accepted)
    })
}

/// Read a line, using `default` if it's empty. The default is shown after the prompt.
///
/// # Errors
///
/// See [module docs](self).
pub fn basic_default(prefix: &str, default: &str) -> Result<String, PromptError> {
    basic_default_with(&mut Terminal::new(), prefix, default)
}

/// [`basic_default`] on an existing [`Terminal`].
///
/// # Errors
///
/// See [module docs](self).
pub fn basic_default_with<D: TerminalDevice>(
    terminal: &mut Terminal<D>,
    prefix: &str,
    default: &str,
) -> Result<String, PromptError> {
    let prompt = format!("{prefix}(Default: {default})");
    custom_with(terminal, &prompt, |input| {
        if input.is_empty() {
            (default.to_string(), true)
        } else {
            (input, true)
        }
    })
}

/// Ask a yes/no question. `y` or `yes` (any case) is `true`, any other answer is
/// `false`. An empty answer asks again.
///
/// # Errors
///
/// See [module docs](self).
pub fn ask(question: &str) -> Result<bool, PromptError> {
    ask_with(&mut Terminal::new(), question)
}

/// [`ask`] on an existing [`Terminal`].
///
/// # Errors
///
/// See [module docs](self).
pub fn ask_with<D: TerminalDevice>(
    terminal: &mut Terminal<D>,
    question: &str,
) -> Result<bool, PromptError> {
    let prompt = format!("{question}?(y/n)");
    let answer = custom_with(terminal, &prompt, |input| {
        let accepted = !input.is_empty();
        (input.to_lowercase(), accepted)
    })?;
    Ok(answer == "y" || answer == "yes")
}

/// Read a password without echoing it. Keeps asking until it isn't empty.
///
/// # Errors
///
/// See [module docs](self).
pub fn password(prefix: &str) -> Result<String, PromptError> {
    password_with(&mut Terminal::new(), prefix)
}

/// [`password`] on an existing [`Terminal`].
///
/// # Errors
///
/// See [module docs](self).
pub fn password_with<D: TerminalDevice>(
    terminal: &mut Terminal<D>,
    prefix: &str,
) -> Result<String, PromptError> {
    read_until_accepted(
        || terminal.read_password(prefix),
        |input| {
            let accepted = !input.is_empty();
            (input, accepted)
        },
    )
}

fn read_until_accepted(
    mut read: impl FnMut() -> Result<String, PromptError>,
    mut test: impl FnMut(String) -> (String, bool),
) -> Result<String, PromptError> {
    loop {
        match read() {
            Ok(line) => {
                let (value, accepted) = test(line);
                if accepted {
                    return Ok(value);
                }
                tracing::debug!("input rejected, asking again");
            }
            Err(PromptError::EndOfStream { partial_line }) => {
                let (value, accepted) = test(partial_line.clone());
                return if accepted {
                    Ok(value)
                } else {
                    Err(PromptError::EndOfStream { partial_line })
                };
            }
            Err(error) => return Err(error),
        }
    }
}
