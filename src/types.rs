use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::fmt;

/// Subject of a permission check.
///
/// A role carries nothing beyond a stable identifier; its lifecycle is owned
/// by the host application. Role equality is identifier equality.
pub trait Role: Send + Sync {
    /// Returns the stable identifier of this role.
    fn identifier(&self) -> &str;
}

/// Target of a permission check.
///
/// A resource is identified by a type tag plus an identifier, so identifier
/// collisions across kinds (say, a document and a folder both named
/// `"inbox"`) cannot alias each other. Lifecycle is owned by the host.
pub trait Resource: Send + Sync {
    /// Returns the type tag of this resource.
    fn kind(&self) -> &str;

    /// Returns the stable identifier of this resource within its kind.
    fn identifier(&self) -> &str;
}

/// Role identifier.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoleId(String);

impl RoleId {
    /// Creates a validated role identifier.
    pub fn new(value: impl AsRef<str>) -> Result<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidRole(
                "role identifier must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Creates a role identifier from a trusted string without validation.
    pub fn from_string(value: String) -> Self {
        Self(value)
    }

    /// Returns the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for RoleId {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<String> for RoleId {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl Role for RoleId {
    fn identifier(&self) -> &str {
        &self.0
    }
}

/// Resource identifier: a type tag plus an identifier within that kind.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceId {
    kind: String,
    id: String,
}

impl ResourceId {
    /// Creates a validated resource identifier.
    pub fn new(kind: impl AsRef<str>, id: impl AsRef<str>) -> Result<Self> {
        let kind = kind.as_ref().trim();
        if kind.is_empty() {
            return Err(Error::InvalidResource(
                "resource kind must not be empty".to_string(),
            ));
        }
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(Error::InvalidResource(
                "resource identifier must not be empty".to_string(),
            ));
        }
        Ok(Self {
            kind: kind.to_string(),
            id: id.to_string(),
        })
    }

    /// Creates a resource identifier from trusted strings without validation.
    pub fn from_parts(kind: String, id: String) -> Self {
        Self { kind, id }
    }

    /// Returns the type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the identifier within the kind.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl Resource for ResourceId {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn identifier(&self) -> &str {
        &self.id
    }
}

/// Extracts an owned key from a role provider, rejecting blank identities.
pub(crate) fn role_key(role: &dyn Role) -> Result<RoleId> {
    let id = role.identifier();
    if id.trim().is_empty() {
        return Err(Error::InvalidRole(
            "role identifier must not be empty".to_string(),
        ));
    }
    Ok(RoleId::from_string(id.to_string()))
}

/// Extracts an owned key from a resource provider, rejecting blank identities.
pub(crate) fn resource_key(resource: &dyn Resource) -> Result<ResourceId> {
    let kind = resource.kind();
    if kind.trim().is_empty() {
        return Err(Error::InvalidResource(
            "resource kind must not be empty".to_string(),
        ));
    }
    let id = resource.identifier();
    if id.trim().is_empty() {
        return Err(Error::InvalidResource(
            "resource identifier must not be empty".to_string(),
        ));
    }
    Ok(ResourceId::from_parts(kind.to_string(), id.to_string()))
}
