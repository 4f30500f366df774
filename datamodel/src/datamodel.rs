//! The normalized datamodel handed to the transpiler.
//!
//! Produced by [`crate::parse_schema`]; immutable for the duration of a
//! generation run.

use indexmap::IndexMap;

/// A parsed schema: record types and enumerations, in declaration order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Datamodel {
    pub models: IndexMap<String, Model>,
    pub enums: IndexMap<String, Enum>,
}

impl Datamodel {
    /// Model names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    /// True if `name` refers to a declared model or enum, i.e. the name
    /// renders as an object type or enum rather than a scalar.
    pub fn is_declared_type(&self, name: &str) -> bool {
        self.models.contains_key(name) || self.enums.contains_key(name)
    }
}

/// A named record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub fields: Vec<Field>,
    pub primary_key: Option<PrimaryKey>,
    pub unique_fields: Vec<Vec<String>>,
}

/// A compound primary key declared with `@@id`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKey {
    pub fields: Vec<String>,
}

/// A single field of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// The native type name as written in the schema. Relation fields
    /// carry the referenced model's name, enum fields the enum's name.
    pub field_type: String,
    pub arity: FieldArity,
    pub is_id: bool,
    pub is_unique: bool,
    /// For relation fields, the scalar fields on this model backing the
    /// relation (`@relation(fields: [...])`).
    pub relation_from_fields: Option<Vec<String>>,
    /// The fields on the other side referenced by the relation.
    pub relation_references: Option<Vec<String>>,
}

impl Field {
    pub fn is_relation(&self) -> bool {
        self.relation_from_fields.is_some()
    }
}

/// Datamodel field arity.
#[derive(Debug, PartialEq, Copy, Clone, Eq, Hash)]
pub enum FieldArity {
    Required,
    Optional,
    List,
}

impl FieldArity {
    pub fn is_required(&self) -> bool {
        self == &Self::Required
    }

    pub fn is_optional(&self) -> bool {
        self == &Self::Optional
    }

    pub fn is_list(&self) -> bool {
        self == &Self::List
    }
}

/// A named set of ordered value labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: String,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: String,
}
