//! Type reflection: turning raw declared type expressions into normalized
//! [`TypeDescriptor`]s, applying the build-wide defaults.

use crate::config::BuildConfig;
use crate::declarations::{FieldDeclaration, ParameterDeclaration, QueryDeclaration, TypeExpression};
use crate::metadata::{TypeDescriptor, TypeValue};
use crate::registry::DeclarationRegistry;

/// List nesting deeper than this is rejected as a declaration mistake.
const MAX_LIST_DEPTH: u8 = 8;

/// A declared type expression could not be normalized. These failures
/// propagate unchanged through metadata resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeReflectionError {
    #[error("the declared type refers to {name}, which is not a registered type")]
    UnknownType { name: String },
    #[error("parameter {parameter} does not declare a type")]
    MissingTypeExpression { parameter: String },
    #[error("list nesting of depth {depth} is deeper than the supported maximum")]
    UnsupportedListDepth { depth: u8 },
}

/// Turns raw declared type expressions into normalized type descriptors.
///
/// Implemented by [`RegistryTypeReflector`] for the common case; embedders
/// with their own reflection source can bring their own implementation.
pub trait TypeReflector {
    fn resolve_field_type(
        &self,
        field: &FieldDeclaration,
        config: BuildConfig,
    ) -> Result<TypeDescriptor, TypeReflectionError>;

    fn resolve_query_return_type(
        &self,
        query: &QueryDeclaration,
        config: BuildConfig,
    ) -> Result<TypeDescriptor, TypeReflectionError>;

    fn resolve_parameter_type(
        &self,
        parameter: &ParameterDeclaration,
        config: BuildConfig,
    ) -> Result<TypeDescriptor, TypeReflectionError>;
}

/// The standard reflector: resolves named references against a
/// [`DeclarationRegistry`] and falls back to the build-wide defaults for
/// modifiers without an explicit override.
pub struct RegistryTypeReflector<'a> {
    registry: &'a DeclarationRegistry,
}

impl<'a> RegistryTypeReflector<'a> {
    pub fn new(registry: &'a DeclarationRegistry) -> Self {
        RegistryTypeReflector { registry }
    }

    fn descriptor(
        &self,
        expression: &TypeExpression,
        nullable: Option<bool>,
        list_depth: Option<u8>,
        config: BuildConfig,
    ) -> Result<TypeDescriptor, TypeReflectionError> {
        let value = match expression {
            TypeExpression::Scalar(scalar) => TypeValue::Scalar(*scalar),
            TypeExpression::Class(class) => TypeValue::Class(*class),
            TypeExpression::Named(name) => {
                let class = self.registry.class_id_by_name(name).ok_or_else(|| {
                    TypeReflectionError::UnknownType { name: name.clone() }
                })?;
                TypeValue::Class(class)
            }
        };

        let list_depth = list_depth.unwrap_or(0);
        if list_depth > MAX_LIST_DEPTH {
            return Err(TypeReflectionError::UnsupportedListDepth { depth: list_depth });
        }

        Ok(TypeDescriptor {
            value,
            nullable: nullable.unwrap_or(config.default_nullable),
            list_depth,
        })
    }
}

impl TypeReflector for RegistryTypeReflector<'_> {
    fn resolve_field_type(
        &self,
        field: &FieldDeclaration,
        config: BuildConfig,
    ) -> Result<TypeDescriptor, TypeReflectionError> {
        self.descriptor(&field.type_expression, field.nullable, field.list_depth, config)
    }

    fn resolve_query_return_type(
        &self,
        query: &QueryDeclaration,
        config: BuildConfig,
    ) -> Result<TypeDescriptor, TypeReflectionError> {
        self.descriptor(&query.return_type, query.nullable, query.list_depth, config)
    }

    fn resolve_parameter_type(
        &self,
        parameter: &ParameterDeclaration,
        config: BuildConfig,
    ) -> Result<TypeDescriptor, TypeReflectionError> {
        let expression = parameter.type_expression.as_ref().ok_or_else(|| {
            TypeReflectionError::MissingTypeExpression {
                parameter: parameter.name.clone(),
            }
        })?;
        self.descriptor(expression, parameter.nullable, parameter.list_depth, config)
    }
}
