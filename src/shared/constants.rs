/// Listening port when `PORT` is unset
pub const DEFAULT_PORT: u16 = 5000;

/// Display name on outgoing report mail when `EMAIL_SENDER_NAME` is unset
pub const DEFAULT_MAIL_SENDER_NAME: &str = "Väktarrapport";

// =============================================================================
// API MESSAGES
// =============================================================================

pub const MSG_USERNAME_REQUIRED: &str = "Användarnamn krävs";

pub const MSG_LOGIN_RECORDED: &str = "✅ Inloggning registrerad";

pub const MSG_REPORT_FIELDS_REQUIRED: &str = "Alla fält måste fyllas i";

pub const MSG_REPORT_SENT: &str = "✅ Rapport sparad och skickad via e-post";

pub const MSG_REPORT_SAVED_MAIL_FAILED: &str = "Rapport sparad, men kunde inte skicka e-post";

/// Generic 500 body; storage details stay in the logs
pub const MSG_SERVER_ERROR: &str = "Serverfel, försök igen senare";

// =============================================================================
// REPORT MAIL PLACEHOLDERS
// =============================================================================

pub const REPORT_SUBJECT_PREFIX: &str = "📝 Ny rapport från";

pub const UNKNOWN_GUARD: &str = "okänd väktare";

pub const PATROL_NUMBER_MISSING: &str = "Ej angivet";

pub const POSITION_UNKNOWN: &str = "Okänd";

pub const FLAG_YES: &str = "Ja";

pub const FLAG_NO: &str = "Nej";
