//! Tests for form aggregation and focus-first-invalid.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use formcheck::{Field, FocusRequest, Focusable, Form, FormConfig, InvalidField, Rule};

/// Counts focus requests.
#[derive(Default)]
struct FocusCounter(AtomicUsize);

impl FocusCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Focusable for FocusCounter {
    fn focus(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn required(name: &str) -> Field {
    Field::new(vec![Rule::min_length(1, "required")]).named(name)
}

fn with_counter(field: &Field) -> Arc<FocusCounter> {
    let counter = Arc::new(FocusCounter::default());
    field.focus_handle().bind(counter.clone());
    counter
}

#[test]
fn test_empty_form_is_valid() {
    let form = Form::new(Vec::new());
    assert!(form.is_empty());
    assert!(form.is_valid());
    assert!(form.validate().is_valid());
}

#[test]
fn test_is_valid_is_and_of_fields() {
    let a = required("a");
    let b = required("b");
    let form = Form::new(vec![a.clone(), b.clone()]);
    assert!(!form.is_valid());

    a.set_value("x");
    assert!(!form.is_valid());

    b.set_value("y");
    assert!(form.is_valid());

    b.set_value("");
    assert!(!form.is_valid());
}

#[test]
fn test_is_valid_tracks_collection_changes() {
    let a = required("a");
    a.set_value("x");
    let mut form = Form::new(vec![a]);
    assert!(form.is_valid());

    form.push(required("b"));
    assert_eq!(form.len(), 2);
    assert!(!form.is_valid());

    form.set_fields(Vec::new());
    assert!(form.is_valid());
}

#[test]
fn test_field_without_rules_keeps_form_invalid_while_empty() {
    let form = Form::new(vec![Field::new(Vec::new())]);
    assert!(!form.is_valid());
}

#[test]
fn test_validate_visits_every_field() {
    let a = required("a");
    let b = required("b");
    let c = required("c");
    let form = Form::new(vec![a.clone(), b.clone(), c.clone()]);

    let result = form.validate();
    assert_eq!(a.error_message(), "required");
    assert_eq!(b.error_message(), "required");
    assert_eq!(c.error_message(), "required");
    assert_eq!(
        result.invalid_fields(),
        &[
            InvalidField {
                index: 0,
                name: Some("a".to_string()),
            },
            InvalidField {
                index: 1,
                name: Some("b".to_string()),
            },
            InvalidField {
                index: 2,
                name: Some("c".to_string()),
            },
        ]
    );
}

#[test]
fn test_only_first_invalid_field_is_focused() {
    let a = required("a");
    let b = required("b");
    let c = required("c");
    a.set_value("ok");

    let focus_a = with_counter(&a);
    let focus_b = with_counter(&b);
    let focus_c = with_counter(&c);

    let form = Form::new(vec![a, b, c]).focus_first_invalid(true);
    let result = form.validate();

    assert_eq!(result.first_invalid_index(), Some(1));
    assert_eq!(focus_a.count(), 0);
    assert_eq!(focus_b.count(), 1);
    assert_eq!(focus_c.count(), 0);
}

#[test]
fn test_focus_disabled_by_default() {
    let a = required("a");
    let focus_a = with_counter(&a);

    let form = Form::new(vec![a.clone()]);
    assert!(!form.focuses_first_invalid());
    assert!(form.validate().is_invalid());
    assert_eq!(focus_a.count(), 0);
    assert_eq!(a.error_message(), "required");
}

#[test]
fn test_no_focus_when_all_valid() {
    let a = required("a");
    a.set_value("x");
    let focus_a = with_counter(&a);

    let form = Form::new(vec![a]).focus_first_invalid(true);
    assert!(form.validate().is_valid());
    assert_eq!(focus_a.count(), 0);
}

#[test]
fn test_unbound_focus_handle_is_tolerated() {
    let a = required("a");
    let b = required("b");
    let focus_b = with_counter(&b);

    let form = Form::new(vec![a, b]).focus_first_invalid(true);
    let result = form.validate();

    assert_eq!(result.first_invalid_index(), Some(0));
    assert_eq!(focus_b.count(), 0);
}

#[test]
fn test_validate_clears_fixed_errors() {
    let a = required("a");
    let form = Form::new(vec![a.clone()]);
    form.validate();
    assert_eq!(a.error_message(), "required");

    a.set_value("x");
    assert!(form.validate().is_valid());
    assert_eq!(a.error_message(), "");
}

#[test]
fn test_focus_request_target() {
    let a = Field::new(vec![Rule::matches("yes", "")]);
    let request = FocusRequest::new();
    a.focus_handle().bind(Arc::new(request.clone()));

    let form = Form::from_config(vec![a.clone()], &FormConfig {
        focus_first_invalid: true,
    });
    form.validate();

    assert!(request.take_focus_request());
    assert_eq!(a.error_message(), "Re-enter password is not match.");
}

#[test]
fn test_validate_evaluates_each_field_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counting = |calls: &Arc<AtomicUsize>| {
        let calls = Arc::clone(calls);
        Field::new(vec![Rule::predicate(
            move |v| {
                calls.fetch_add(1, Ordering::SeqCst);
                !v.is_empty()
            },
            "required",
        )])
    };

    let a = counting(&calls);
    let b = counting(&calls);
    let c = counting(&calls);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let form = Form::new(vec![a, b, c]);
    assert_eq!(form.len(), 3);
    form.validate();
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    form.fields()[0].set_value("x");
    let before = calls.load(Ordering::SeqCst);
    form.validate();
    assert_eq!(calls.load(Ordering::SeqCst) - before, 3);
}
