use fractic_server_error::{define_client_error, define_internal_error};

use crate::entities::RequestId;

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(WriteError, "Error writing file '{path}'.", { path: &str });

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidAmount, "Invalid amount: '{value}'.", { value: &str });
define_client_error!(InvalidCategory, "Unknown request category: '{label}'.", { label: &str });
define_client_error!(
    InvalidApprovalAction,
    "Unknown approval action: '{label}'.",
    { label: &str }
);
define_client_error!(
    ConfidenceOutOfRange,
    "Confidence {value} is outside the range [0, 1].",
    { value: f64 }
);

// Store-related.
define_client_error!(
    DuplicateRequestId,
    "Request id '{id}' appears more than once in the request list.",
    { id: &RequestId }
);

// Export-related.
define_client_error!(
    InvalidExportFilename,
    "Export filename '{filename}' must be a plain file name.",
    { filename: &str }
);
define_internal_error!(
    CsvEncodingFailed,
    "Failed to encode CSV document '{filename}'.",
    { filename: &str }
);
