//! Attribute - a named column of the analyzed dataset

use serde::{Deserialize, Serialize};

/// Statistical type of an attribute.
///
/// The type decides which descriptive column ordering applies and which
/// per-attribute exports (histogram vs. value counts) are produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// Continuous or discrete numeric values
    Numerical,
    /// Values drawn from a finite label set
    Categorical,
}

/// A dataset attribute referenced by analysis records.
///
/// The name is the unique key within one analysis run; records refer to
/// attributes by value, so equality is name + type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Attribute {
    name: String,
    attribute_type: AttributeType,
}

impl Attribute {
    /// Create a new attribute reference.
    #[must_use]
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
        }
    }

    /// Get the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the attribute's statistical type.
    #[must_use]
    pub const fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }
}
