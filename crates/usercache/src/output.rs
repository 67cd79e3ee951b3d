//! Output formatting functions.

use usercache_core::users::User;

use crate::cli::OutputFormat;

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    format!("{}\n  ID: {}\n  Email: {}", user.name, user.id, user.email)
}

/// Format users for display.
pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut output = format!("USERS ({})\n", users.len());
    output.push_str(&"-".repeat(40));
    for user in users {
        output.push_str(&format!("\n{}", format_user(user)));
        output.push('\n');
    }
    output
}

/// Render the result of `list`.
pub fn render_users(users: &[User], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&users),
        OutputFormat::Pretty => format_users(users),
    }
}

/// Render the result of `add`.
pub fn render_created(user: &User, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(user),
        OutputFormat::Pretty => format!("Created:\n{}", format_user(user)),
    }
}
