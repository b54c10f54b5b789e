//! Terminal output helpers.

use std::io::{self, BufRead, Write};

use serde::Serialize;

use backoffice_client::screens::{Confirm, Confirmation, Level, Notification};
use backoffice_core::FieldErrors;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_notification(notification: &Notification) {
    let tag = match notification.level {
        Level::Success => "ok",
        Level::Info => "info",
        Level::Warning => "aviso",
        Level::Error => "error",
    };
    eprintln!("[{tag}] {notification}");
}

pub fn print_field_errors(errors: &FieldErrors) {
    for (field, violations) in errors.iter() {
        for violation in violations {
            eprintln!("  {field}: {violation}");
        }
    }
}

/// Asks on the terminal; only an explicit "s"/"si"/"y"/"yes" confirms.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, request: &Confirmation) -> bool {
        eprint!(
            "{}\n{} [{} / {}] (s/N): ",
            request.title, request.text, request.confirm_label, request.cancel_label
        );
        let _ = io::stderr().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

/// Confirms without asking (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _request: &Confirmation) -> bool {
        true
    }
}

pub fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_answers_confirm() {
        assert!(is_yes("s\n"));
        assert!(is_yes(" Sí "));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("sure"));
    }
}
