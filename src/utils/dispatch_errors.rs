use crate::errors::DispatchError;
use crate::utils::suggest::suggest;

fn did_you_mean(input: &str, known: &[&str]) -> (Option<String>, Vec<String>) {
    let suggestions = suggest(input, known, 3);
    let list = format!("Use one of: {}.", known.join(", "));
    let hint = if suggestions.is_empty() {
        list
    } else {
        format!("Did you mean: {}? {}", suggestions.join(", "), list)
    };
    (Some(hint), suggestions)
}

pub fn unknown_resource_error(resource: &str, known: &[&str]) -> DispatchError {
    let (hint, suggestions) = did_you_mean(resource, known);
    let mut err = DispatchError::validation(format!("Unknown resource: {}", resource));
    if let Some(hint) = hint {
        err = err.with_hint(hint);
    }
    err.with_details(serde_json::json!({
        "known_resources": known,
        "did_you_mean": suggestions,
    }))
}

pub fn unknown_operation_error(
    resource_label: &str,
    operation: &str,
    known: &[&str],
) -> DispatchError {
    let (hint, suggestions) = did_you_mean(operation, known);
    let mut err = DispatchError::validation(format!(
        "Unknown {} operation: {}",
        resource_label, operation
    ));
    if let Some(hint) = hint {
        err = err.with_hint(hint);
    }
    err.with_details(serde_json::json!({
        "known_operations": known,
        "did_you_mean": suggestions,
    }))
}
