//! The typed intermediate representation produced by resolution. All of these
//! values are immutable once built and cheap to share behind `Arc`.

use std::fmt;

use crate::declarations::{ParameterKind, ScalarKind};
use crate::ids::ClassId;

/// The underlying value of a resolved type, stripped of its modifiers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TypeValue {
    Scalar(ScalarKind),
    Class(ClassId),
    /// A nested composite, e.g. the element type of a list of lists whose
    /// inner modifiers differ from the outer ones.
    Composite(Box<TypeDescriptor>),
}

impl TypeValue {
    /// Whether the value ultimately refers to a declared class rather than a
    /// scalar. Spread-arguments parameters require this.
    pub fn is_class_reference(&self) -> bool {
        match self {
            TypeValue::Class(_) => true,
            TypeValue::Scalar(_) => false,
            TypeValue::Composite(inner) => inner.value.is_class_reference(),
        }
    }
}

/// Normalized type information: an underlying value plus nullability and
/// list nesting.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TypeDescriptor {
    pub value: TypeValue,
    pub nullable: bool,
    /// 0 for a plain value, N for a list nested N levels deep.
    pub list_depth: u8,
}

impl TypeDescriptor {
    pub fn is_list(&self) -> bool {
        self.list_depth > 0
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.list_depth {
            f.write_str("[")?;
        }
        match &self.value {
            TypeValue::Scalar(scalar) => write!(f, "{scalar}")?,
            TypeValue::Class(class) => write!(f, "{class}")?,
            TypeValue::Composite(inner) => write!(f, "{inner}")?,
        }
        for _ in 0..self.list_depth {
            f.write_str("]")?;
        }
        if !self.nullable {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// A resolved field of an object or input type.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FieldMetadata {
    pub name: String,
    pub ty: TypeDescriptor,
    pub description: Option<String>,
}

/// A resolved object type: its declaration plus its resolved fields, in
/// declaration order. Always has at least one field.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ObjectTypeMetadata {
    pub class: ClassId,
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldMetadata>,
}

impl ObjectTypeMetadata {
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A resolved input type. Same shape as [`ObjectTypeMetadata`], kept separate
/// because the two draw from distinct declaration categories and caches.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct InputTypeMetadata {
    pub class: ClassId,
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldMetadata>,
}

impl InputTypeMetadata {
    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// A resolved query method parameter.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParameterMetadata {
    pub name: String,
    pub kind: ParameterKind,
    /// `Some` for argument-carrying kinds. `Context` and `Info` parameters
    /// are typed by the execution engine, not here.
    pub ty: Option<TypeDescriptor>,
}

/// A resolved query method: return type plus parameters in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct QueryMetadata {
    pub name: String,
    pub return_type: TypeDescriptor,
    pub parameters: Vec<ParameterMetadata>,
    pub description: Option<String>,
}

/// A resolved resolver class. Always declares at least one query.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolverMetadata {
    pub class: ClassId,
    pub target_type_name: String,
    pub description: Option<String>,
    pub queries: Vec<QueryMetadata>,
}

impl ResolverMetadata {
    pub fn query(&self, name: &str) -> Option<&QueryMetadata> {
        self.queries.iter().find(|query| query.name == name)
    }
}
