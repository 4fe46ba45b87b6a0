//! Client-side draft validation.
//!
//! Runs before any network round-trip; a draft with issues never leaves
//! the client.

use super::state::BookingDraft;
use boxoffice_domain::types::Ticket;
use thiserror::Error;

/// A reason the current draft cannot be submitted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// Full name is required.
    #[error("Please enter your full name")]
    MissingFullName,

    /// Email is required.
    #[error("Please enter your email address")]
    MissingEmail,

    /// Email does not look like an address.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Phone number is required.
    #[error("Please enter your phone number")]
    MissingPhoneNumber,

    /// At least one ticket must be requested.
    #[error("Quantity must be at least 1")]
    QuantityBelowMinimum,

    /// More tickets requested than remain.
    #[error("Only {available} tickets remaining")]
    QuantityExceedsAvailable {
        /// Remaining quantity on the tier.
        available: u32,
    },

    /// The tier has no remaining quantity; it is shown disabled and must
    /// not be bookable.
    #[error("This ticket is sold out")]
    TicketSoldOut,

    /// The tier is no longer publicly available.
    #[error("This ticket is no longer available")]
    TicketUnavailable,
}

/// Minimal shape check: one `@`, non-empty local part, a dot somewhere in
/// the domain, no whitespace. Real validation is the API's job.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.split('.').count() >= 2 && !domain.starts_with('.') && !domain.ends_with('.') && !domain.is_empty()
}

/// Validate a draft against the chosen ticket tier.
///
/// Returns every issue found, in display order; an empty vector means the
/// draft may be submitted.
#[must_use]
pub fn validate_draft(draft: &BookingDraft, ticket: &Ticket) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if draft.full_name.trim().is_empty() {
        issues.push(ValidationIssue::MissingFullName);
    }
    if draft.email.trim().is_empty() {
        issues.push(ValidationIssue::MissingEmail);
    } else if !looks_like_email(draft.email.trim()) {
        issues.push(ValidationIssue::InvalidEmail);
    }
    if draft.phone_number.trim().is_empty() {
        issues.push(ValidationIssue::MissingPhoneNumber);
    }

    if !ticket.status.is_active() {
        issues.push(ValidationIssue::TicketUnavailable);
    } else if ticket.is_sold_out() {
        issues.push(ValidationIssue::TicketSoldOut);
    } else if draft.quantity == 0 {
        issues.push(ValidationIssue::QuantityBelowMinimum);
    } else if draft.quantity > ticket.available_quantity {
        issues.push(ValidationIssue::QuantityExceedsAvailable {
            available: ticket.available_quantity,
        });
    }

    issues
}
