//! Identifiers and dotted object names shared by every other node.

use serde::{Deserialize, Serialize};

use crate::error::AstError;

/// A bare SQL identifier. Rendered verbatim, quoting is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ident(pub String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A possibly qualified name such as `schema.table`.
///
/// Always holds at least one segment: the only fallible constructor is
/// [`ObjectName::new`], and deserialization goes through it as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Ident>", into = "Vec<Ident>")]
pub struct ObjectName(Vec<Ident>);

impl ObjectName {
    pub fn new(parts: Vec<Ident>) -> Result<Self, AstError> {
        if parts.is_empty() {
            return Err(AstError::EmptyObjectName);
        }
        Ok(Self(parts))
    }

    /// Appends one more segment, e.g. `public` -> `public.users`.
    pub fn child(mut self, part: impl Into<Ident>) -> Self {
        self.0.push(part.into());
        self
    }

    pub fn parts(&self) -> &[Ident] {
        &self.0
    }
}

impl From<Ident> for ObjectName {
    fn from(ident: Ident) -> Self {
        Self(vec![ident])
    }
}

impl From<&str> for ObjectName {
    fn from(name: &str) -> Self {
        Self(vec![Ident::new(name)])
    }
}

impl TryFrom<Vec<Ident>> for ObjectName {
    type Error = AstError;

    fn try_from(parts: Vec<Ident>) -> Result<Self, Self::Error> {
        Self::new(parts)
    }
}

impl From<ObjectName> for Vec<Ident> {
    fn from(name: ObjectName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Ident, ObjectName};
    use crate::error::AstError;

    #[test]
    fn test_empty_object_name_is_rejected() {
        let err = ObjectName::new(vec![]).unwrap_err();
        assert!(matches!(err, AstError::EmptyObjectName));
    }

    #[test]
    fn test_child_appends_segment() {
        let name = ObjectName::from("public").child("users");
        assert_eq!(name.parts(), &[Ident::new("public"), Ident::new("users")]);
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let result: Result<ObjectName, _> = serde_json::from_str("[]");
        assert!(result.is_err());

        let name: ObjectName = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(name.parts().len(), 2);
    }
}
