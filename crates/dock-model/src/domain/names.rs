use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Name of an ECS cluster.
///
/// An empty name is allowed: the control plane then falls back to its default cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterRef(String);

impl ClusterRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClusterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            f.write_str("default")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Name of a managed service inside a cluster. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceRef(String);

impl ServiceRef {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        non_empty(name.into(), "service").map(Self)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Name of a container as declared in the task definition. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContainerName(String);

impl ContainerName {
    pub fn new(name: impl Into<String>) -> Result<Self, ModelError> {
        non_empty(name.into(), "container").map(Self)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_empty(value: String, what: &'static str) -> Result<String, ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Empty(what));
    }
    Ok(value)
}

macro_rules! string_newtype {
    ($ty:ident) => {
        impl TryFrom<String> for $ty {
            type Error = ModelError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_newtype!(ServiceRef);
string_newtype!(ContainerName);
