//! Domain-level constants.
//!
//! These constants define the business rules of the confirmation mail query.

// =============================================================================
// Roles
// =============================================================================

/// Realm role required to query the directory
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Attributes
// =============================================================================

/// Custom attribute tracking whether the confirmation mail went out
pub const ATTR_CONFIRMATION_MAIL_SENT: &str = "confirmation_mail_sent";

/// Stored value of `confirmation_mail_sent` for users still waiting on the mail.
///
/// Attributes are string-typed; matching is exact, so `"False"` does not match.
pub const CONFIRMATION_MAIL_NOT_SENT: &str = "false";

// =============================================================================
// Authentication
// =============================================================================

/// Authorization scheme advertised on 401 responses
pub const AUTH_SCHEME_BEARER: &str = "Bearer";

/// Path segment separating the issuer base URL from the realm name
pub const REALMS_PATH_SEGMENT: &str = "/realms/";
