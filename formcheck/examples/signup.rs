//! Signup Example
//!
//! Drives a three-field signup form the way an input widget would:
//! - Fields are built from a JSON definition
//! - Keystrokes go through `on_change_text`
//! - Submitting validates every field and focuses the first invalid one
//!
//! Logs are written to `signup.log`.

use std::fs::File;
use std::sync::Arc;

use formcheck::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

const USERNAME: &str = r#"{
    "name": "username",
    "rules": [
        {"type": "minlength", "min_length": 3, "message": "At least {N} characters", "placeholder": "{N}"},
        {"type": "pattern", "pattern": "^[a-z0-9_]+$", "message": "Lowercase letters, digits and _ only"}
    ]
}"#;

const EMAIL: &str = r#"{
    "name": "email",
    "immediate_validation": true,
    "rules": [
        {"type": "minlength", "min_length": 1, "message": "Email is required"},
        {"type": "email", "message": "Please enter a valid email"}
    ]
}"#;

fn field(json: &str) -> Result<Field, ConfigError> {
    Field::from_config(FieldConfig::from_json(json)?)
}

fn type_text(field: &Field, text: &str) {
    let mut typed = String::new();
    for c in text.chars() {
        typed.push(c);
        (field.props().on_change_text)(typed.clone());
    }
}

fn print_field(label: &str, field: &Field) {
    let snapshot = field.snapshot();
    let status = if snapshot.is_valid { "ok" } else { "--" };
    println!(
        "  [{}] {:<10} {:<20} {}",
        status, label, snapshot.value, snapshot.error_message
    );
}

fn main() -> Result<(), ConfigError> {
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let username = field(USERNAME)?;
    let email = field(EMAIL)?;
    let password = Field::new(vec![
        Rule::min_length(8, ""),
        Rule::predicate(
            |v| v.chars().any(|c| c.is_ascii_digit()),
            "Password needs a digit",
        ),
    ])
    .named("password");

    let fields = [("username", &username), ("email", &email), ("password", &password)];
    let focus: Vec<FocusRequest> = fields
        .iter()
        .map(|(_, f)| {
            let request = FocusRequest::new();
            f.focus_handle().bind(Arc::new(request.clone()));
            request
        })
        .collect();

    let form = Form::from_config(
        vec![username.clone(), email.clone(), password.clone()],
        &FormConfig::from_json(r#"{"focus_first_invalid": true}"#)?,
    );

    println!("Initial (email validates immediately):");
    for (label, f) in fields {
        print_field(label, f);
    }

    type_text(&username, "jo");
    type_text(&email, "jo@example.com");
    type_text(&password, "hunter");

    println!("\nAfter typing:");
    for (label, f) in fields {
        print_field(label, f);
    }
    println!("  submit enabled: {}", form.is_valid());

    let result = form.validate();
    println!("\nSubmit: {:?}", result);
    for ((label, _), request) in fields.iter().zip(&focus) {
        if request.take_focus_request() {
            println!("  focused: {}", label);
        }
    }

    type_text(&username, "joe");
    password.set_value("hunter42");

    println!("\nAfter fixing:");
    for (label, f) in fields {
        print_field(label, f);
    }
    println!("  submit enabled: {}", form.is_valid());
    println!("  submit: {:?}", form.validate());

    Ok(())
}
