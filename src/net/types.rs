//! Wire types shared with the RlARndG HTTP API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in account as returned by `/api/auth/user` and the login endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
}

/// Body posted to `/api/auth/login` and `/api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// One API key owned by the current user. Tokens are never listed; they are
/// only revealed once by a reset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiKeySummary {
    pub id: i64,
}

/// Envelope every `/random/*` endpoint answers with.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TimedValue {
    /// Owner of the API key used for the request, if any.
    pub author: Option<i64>,
    /// Unix seconds at generation time.
    pub timestamp: i64,
    pub value: serde_json::Value,
}

impl TimedValue {
    /// Value as shown to readers: strings unquoted, everything else as JSON.
    pub fn display_value(&self) -> String {
        match &self.value {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormat {
    Rgb,
    Hex,
}

impl ColorFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Hex => "hex",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "rgb" => Some(Self::Rgb),
            "hex" => Some(Self::Hex),
            _ => None,
        }
    }
}

/// The random-value endpoints exposed under `/random`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomKind {
    Unsigned,
    Signed,
    Boolean,
    Color(ColorFormat),
}

impl RandomKind {
    /// Endpoint path without any query string.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Unsigned => "/random/unsigned",
            Self::Signed => "/random/signed",
            Self::Boolean => "/random/boolean",
            Self::Color(_) => "/random/color",
        }
    }

    pub fn endpoint(self) -> String {
        match self {
            Self::Color(format) => format!("{}?format={}", self.path(), format.as_str()),
            _ => self.path().to_owned(),
        }
    }
}
