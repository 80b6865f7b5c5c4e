//! Command implementations

pub mod directory;
pub mod login;
pub mod register;

use mentorship_client::{Field, ValidationErrors};

use crate::context::AppContext;

/// Print form errors, general message first.
pub fn report_errors(ctx: &AppContext, errors: &ValidationErrors) {
    if let Some(message) = errors.general_message() {
        ctx.print_error(message);
    }
    for (field, message) in errors.iter() {
        if field != Field::General {
            ctx.print_error(&format!("  {}: {}", field.label(), message));
        }
    }
}
