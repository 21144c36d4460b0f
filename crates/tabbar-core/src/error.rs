//! Error types for the tab bar

use thiserror::Error;

/// Result type alias for tab bar operations
pub type TabBarResult<T> = Result<T, TabBarError>;

/// Error type for tab bar operations
///
/// Validation errors are raised on the host before anything crosses the
/// bridge. The remaining variants travel through response envelopes using
/// their numeric codes.
#[derive(Error, Debug)]
pub enum TabBarError {
    /// More tabs than the native widgets can display
    #[error(
        "tab bar supports a maximum of {max} tabs, {count} provided; \
         UITabBar and BottomNavigationView do not support more than {max} items"
    )]
    TooManyTabs { count: usize, max: usize },

    /// No tabs were provided
    #[error("tab bar requires at least one tab")]
    EmptyTabSet,

    /// Two or more tabs share an id
    #[error("duplicate tab ids found: {}; each tab must have a unique id", .0.join(", "))]
    DuplicateTabIds(Vec<String>),

    /// More than one tab is flagged as initially active
    #[error("only one tab can be marked as active, found {0} active tabs")]
    MultipleActiveTabs(usize),

    /// A bridge call is missing a required parameter
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    /// No native surface is available to render into
    #[error("no active host context")]
    NoActiveHostContext,

    /// Tab bar is not in a valid state for the requested operation
    #[error("invalid tab bar state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// Unknown bridge method name
    #[error("unknown bridge method: {0}")]
    UnknownMethod(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A registered action callback returned an error
    #[error("action '{action}' failed: {message}")]
    ActionFailed { action: String, message: String },

    /// The bridge channel itself failed
    #[error("bridge error: {0}")]
    BridgeError(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl TabBarError {
    /// Returns an error code suitable for response envelopes
    pub fn error_code(&self) -> u32 {
        match self {
            TabBarError::TooManyTabs { .. } => 1,
            TabBarError::EmptyTabSet => 2,
            TabBarError::DuplicateTabIds(_) => 3,
            TabBarError::MultipleActiveTabs(_) => 4,
            TabBarError::MissingParameter(_) => 5,
            TabBarError::NoActiveHostContext => 6,
            TabBarError::InvalidState { .. } => 7,
            TabBarError::UnknownMethod(_) => 8,
            TabBarError::SerializationError(_) => 9,
            TabBarError::ActionFailed { .. } => 10,
            TabBarError::BridgeError(_) => 11,
            TabBarError::Internal(_) => 12,
        }
    }

    /// Create an error from an error code and message (for envelope decoding)
    ///
    /// Validation errors never cross the bridge, so their codes decode to
    /// [`TabBarError::Internal`].
    pub fn from_code(code: u32, message: String) -> Self {
        match code {
            5 => TabBarError::MissingParameter(message),
            6 => TabBarError::NoActiveHostContext,
            7 => TabBarError::InvalidState {
                expected: String::new(),
                actual: message,
            },
            8 => TabBarError::UnknownMethod(message),
            9 => TabBarError::SerializationError(message),
            10 => TabBarError::ActionFailed {
                action: String::new(),
                message,
            },
            11 => TabBarError::BridgeError(message),
            _ => TabBarError::Internal(message),
        }
    }

    /// Whether this error was raised by host-side validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TabBarError::TooManyTabs { .. }
                | TabBarError::EmptyTabSet
                | TabBarError::DuplicateTabIds(_)
                | TabBarError::MultipleActiveTabs(_)
        )
    }
}

impl From<serde_json::Error> for TabBarError {
    fn from(err: serde_json::Error) -> Self {
        TabBarError::SerializationError(err.to_string())
    }
}
