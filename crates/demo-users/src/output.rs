//! JSON rendering of generated users.

use std::io::Write;

use crate::error::OutputError;
use crate::user::DemoUser;

/// Renders `users` as a pretty-printed JSON array with a two-space indent.
///
/// # Errors
///
/// Returns [`OutputError::Serialize`] if serialization fails.
///
/// # Example
///
/// ```
/// use demo_users::{DemoUser, Gender, render_users_json};
///
/// let users = [DemoUser::new("Ana", "Flores", Gender::Female, "viewer")];
/// let json = render_users_json(&users).expect("rendered");
///
/// assert!(json.starts_with("[\n  {\n    \"username\": \"ana.flores\""));
/// ```
pub fn render_users_json(users: &[DemoUser]) -> Result<String, OutputError> {
    serde_json::to_string_pretty(users).map_err(|err| OutputError::Serialize {
        message: err.to_string(),
    })
}

/// Writes the rendered document and a trailing newline to `writer`.
///
/// # Errors
///
/// Returns [`OutputError`] if rendering, writing or flushing fails.
pub fn write_users_json<W>(writer: &mut W, users: &[DemoUser]) -> Result<(), OutputError>
where
    W: Write + ?Sized,
{
    let document = render_users_json(users)?;
    writeln!(writer, "{document}")
        .and_then(|()| writer.flush())
        .map_err(|err| OutputError::Write {
            message: err.to_string(),
        })
}
