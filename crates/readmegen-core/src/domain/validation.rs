//! Answer validators.
//!
//! A validator is a pure function from raw input to either success or the
//! message shown to the user when the question is asked again.

use std::sync::LazyLock;

use regex::Regex;

/// Predicate over raw input.
pub type Validator = fn(&str) -> Result<(), String>;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9]+(?:[._-][a-z0-9]+)*@[a-z0-9]+\.(?:com|org|net)(?:\.[a-z]{2})?$")
        .expect("email pattern is valid")
});

// JavaScript-style length: the prompts count characters, not bytes.
fn char_len(input: &str) -> usize {
    input.chars().count()
}

pub fn name(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("Please enter a valid name".into());
    }
    Ok(())
}

pub fn email(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("Please enter an email".into());
    }
    if !EMAIL_RE.is_match(input) {
        return Err("Please enter a valid email address.".into());
    }
    Ok(())
}

pub fn github(input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("Github link can not be blank".into());
    }
    Ok(())
}

pub fn title(input: &str) -> Result<(), String> {
    if char_len(input) < 3 {
        return Err("Title can not be less than 3 characters.".into());
    }
    Ok(())
}

pub fn description(input: &str) -> Result<(), String> {
    if char_len(input) < 2 {
        return Err("Please enter a useful description of the project.".into());
    }
    Ok(())
}

pub fn installation(input: &str) -> Result<(), String> {
    if input.split_whitespace().count() < 3 {
        return Err("Please provide a better description of the installation process for your project (at least 3 words)".into());
    }
    Ok(())
}

pub fn usage(input: &str) -> Result<(), String> {
    if input.split_whitespace().count() < 3 {
        return Err("Please give more comprehensive examples".into());
    }
    Ok(())
}

/// Target directory: a unix-style path starting with `./` or `/`.
///
/// Only syntactic. `./../..` passes.
pub fn target_dir(input: &str) -> Result<(), String> {
    if input.is_empty() || !(input.starts_with("./") || input.starts_with('/')) {
        return Err(
            "Please enter a valid unix-style file path starting with ./ (relative) or / (absolute)"
                .into(),
        );
    }
    Ok(())
}

pub fn yes_no(input: &str) -> Result<(), String> {
    match input.to_lowercase().as_str() {
        "y" | "n" => Ok(()),
        _ => Err("Please answer y or n".into()),
    }
}
