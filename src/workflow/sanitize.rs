//! Kubernetes resource-name sanitization.
//!
//! Everything the compiler emits as an identifier (workflow names, task
//! names, template names, dependency references) must be lowercase
//! alphanumeric-and-hyphen, must not start with a digit or hyphen, must not
//! end with a non-alphanumeric character, and must stay within 63 characters.

/// Lowercases the input and replaces everything outside `[a-z0-9-]` with a
/// hyphen. Building block for the public sanitizers; does not enforce the
/// first/last-character rules on its own.
pub(super) fn sanitize_fragment(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Sanitizes a user-chosen workflow name into a valid resource name.
pub fn sanitize_workflow_name(name: &str) -> String {
    let mut sanitized = sanitize_fragment(name);
    if !sanitized
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        sanitized = format!("wf-{sanitized}");
    }
    if sanitized.len() > 63 {
        // All-ASCII after sanitize_fragment, so byte truncation is safe.
        sanitized.truncate(63);
    }
    if !sanitized
        .chars()
        .last()
        .is_some_and(|c| c.is_ascii_alphanumeric())
    {
        sanitized.pop();
        sanitized.push('x');
    }
    sanitized
}

/// Sanitizes a node id into a DAG task name: stray hyphens at either end are
/// stripped, and ids that would start with a digit get a `node-` prefix.
pub fn sanitize_task_name(node_id: &str) -> String {
    let sanitized = sanitize_fragment(node_id);
    let trimmed = sanitized.trim_matches('-');
    if trimmed.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("node-{trimmed}")
    } else {
        trimmed.to_string()
    }
}
