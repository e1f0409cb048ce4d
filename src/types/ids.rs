use super::ValidationError;
use std::fmt;
use uuid::Uuid;

/// Platform-issued identifier of a list or document library.
///
/// SharePoint hands these out as GUIDs, but the value is opaque to us: it is
/// kept exactly as the server returned it and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListId(String);

impl ListId {
    /// Parse an identifier as returned in the `Id` field of list metadata.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::EmptyField("list Id"));
        }

        // Would break out of the guid'...' literal in the items URL.
        if input.contains('\'') {
            return Err(ValidationError::InvalidListId(input.to_string()));
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is a well-formed GUID, braced or not.
    pub fn is_guid(&self) -> bool {
        Uuid::parse_str(self.0.trim_matches(|c| c == '{' || c == '}')).is_ok()
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
