//! Fault-code to message mapping.
//!
//! Kept as data with an explicit default so the table can be verified
//! at a glance.

/// Known provider fault codes and their user-facing messages.
pub(crate) const AUTH_FAULT_MESSAGES: &[(&str, &str)] = &[
    ("invalid-email", "Invalid email address."),
    ("user-disabled", "This account has been disabled."),
    ("user-not-found", "No account found with this email."),
    ("wrong-password", "Incorrect password."),
    ("invalid-credential", "Invalid email or password."),
    ("too-many-requests", "Too many attempts. Please try again later."),
    (
        "network-request-failed",
        "Network error. Please check your connection.",
    ),
];

/// Message for any code not in the table.
pub(crate) const GENERIC_FAULT_MESSAGE: &str = "An unexpected error occurred.";

/// Returns the user-facing message for a provider fault code.
pub(crate) fn auth_message(code: &str) -> &'static str {
    AUTH_FAULT_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
        .unwrap_or(GENERIC_FAULT_MESSAGE)
}
