use std::collections::HashMap;
use std::sync::Arc;

use itertools::Itertools;

use crate::config::BuildConfig;
use crate::declarations::{
    DeclarationKind, DeclarationStore, ParameterDeclaration, ParameterKind, QueryDeclaration,
    TypeDeclaration,
};
use crate::error::ResolveError;
use crate::ids::ClassId;
use crate::metadata::{
    FieldMetadata, InputTypeMetadata, ObjectTypeMetadata, ParameterMetadata, QueryMetadata,
    ResolverMetadata,
};
use crate::reflection::TypeReflector;

/// Resolves raw class declarations into typed, validated metadata.
///
/// Results are memoized per class id: the second resolution of the same class
/// returns the cached value without consulting the store again. The three
/// caches (object types, input types, resolvers) are independent and never
/// cross-invalidate. Failed resolutions are never cached, so a retry after
/// fixing the declaration starts from scratch.
///
/// One resolver instance covers one schema-build pass. Dropping it discards
/// all cached metadata; callers keep what they need through the returned
/// `Arc`s.
pub struct MetadataResolver<'a, S, R> {
    store: &'a S,
    reflector: &'a R,
    config: BuildConfig,
    object_types: HashMap<ClassId, Arc<ObjectTypeMetadata>>,
    input_types: HashMap<ClassId, Arc<InputTypeMetadata>>,
    resolvers: HashMap<ClassId, Arc<ResolverMetadata>>,
}

impl<'a, S, R> MetadataResolver<'a, S, R>
where
    S: DeclarationStore,
    R: TypeReflector,
{
    pub fn new(store: &'a S, reflector: &'a R, config: BuildConfig) -> Self {
        MetadataResolver {
            store,
            reflector,
            config,
            object_types: HashMap::new(),
            input_types: HashMap::new(),
            resolvers: HashMap::new(),
        }
    }

    pub fn config(&self) -> BuildConfig {
        self.config
    }

    /// Resolves the object type declared by `class`.
    pub fn resolve_object_type(
        &mut self,
        class: ClassId,
    ) -> Result<Arc<ObjectTypeMetadata>, ResolveError> {
        if let Some(cached) = self.object_types.get(&class) {
            tracing::debug!(%class, "object type cache hit");
            return Ok(Arc::clone(cached));
        }

        let declaration = self.store.object_type_declaration(class).ok_or(
            ResolveError::MissingClassMetadata {
                class,
                expected: DeclarationKind::ObjectType,
            },
        )?;
        let fields = self.resolve_fields(class, declaration)?;

        let metadata = Arc::new(ObjectTypeMetadata {
            class,
            name: declaration.name.clone(),
            description: declaration.description.clone(),
            fields,
        });
        self.object_types.insert(class, Arc::clone(&metadata));
        tracing::debug!(%class, name = %metadata.name, "resolved object type");
        Ok(metadata)
    }

    /// Resolves the input type declared by `class`.
    pub fn resolve_input_type(
        &mut self,
        class: ClassId,
    ) -> Result<Arc<InputTypeMetadata>, ResolveError> {
        if let Some(cached) = self.input_types.get(&class) {
            tracing::debug!(%class, "input type cache hit");
            return Ok(Arc::clone(cached));
        }

        let declaration = self.store.input_type_declaration(class).ok_or(
            ResolveError::MissingClassMetadata {
                class,
                expected: DeclarationKind::InputType,
            },
        )?;
        let fields = self.resolve_fields(class, declaration)?;

        let metadata = Arc::new(InputTypeMetadata {
            class,
            name: declaration.name.clone(),
            description: declaration.description.clone(),
            fields,
        });
        self.input_types.insert(class, Arc::clone(&metadata));
        tracing::debug!(%class, name = %metadata.name, "resolved input type");
        Ok(metadata)
    }

    /// Resolves the resolver class `class`, including every declared query
    /// and each query's parameters.
    pub fn resolve_resolver(
        &mut self,
        class: ClassId,
    ) -> Result<Arc<ResolverMetadata>, ResolveError> {
        if let Some(cached) = self.resolvers.get(&class) {
            tracing::debug!(%class, "resolver cache hit");
            return Ok(Arc::clone(cached));
        }

        let declaration = self.store.resolver_declaration(class).ok_or(
            ResolveError::MissingClassMetadata {
                class,
                expected: DeclarationKind::Resolver,
            },
        )?;

        // TODO: run the same non-empty check on mutation and subscription
        // declarations once those categories are collected.
        let raw_queries = self
            .store
            .query_declarations(class)
            .filter(|queries| !queries.is_empty())
            .ok_or(ResolveError::MissingResolverMethods { class })?;

        if let Some(duplicate) = raw_queries
            .iter()
            .map(|query| query.method_name.as_str())
            .duplicates()
            .next()
        {
            return Err(ResolveError::DuplicateQuery {
                class,
                query: duplicate.to_owned(),
            });
        }

        let queries = raw_queries
            .iter()
            .map(|query| self.resolve_query(class, query))
            .collect::<Result<Vec<_>, _>>()?;

        let metadata = Arc::new(ResolverMetadata {
            class,
            target_type_name: declaration.target_type_name.clone(),
            description: declaration.description.clone(),
            queries,
        });
        self.resolvers.insert(class, Arc::clone(&metadata));
        tracing::debug!(%class, target = %metadata.target_type_name, "resolved resolver");
        Ok(metadata)
    }

    fn resolve_fields(
        &self,
        class: ClassId,
        declaration: &TypeDeclaration,
    ) -> Result<Vec<FieldMetadata>, ResolveError> {
        let raw_fields = self
            .store
            .field_declarations(class)
            .filter(|fields| !fields.is_empty())
            .ok_or_else(|| ResolveError::MissingFields {
                class,
                type_name: declaration.name.clone(),
            })?;

        if let Some(duplicate) = raw_fields
            .iter()
            .map(|field| field.name.as_str())
            .duplicates()
            .next()
        {
            return Err(ResolveError::DuplicateField {
                type_name: declaration.name.clone(),
                field: duplicate.to_owned(),
            });
        }

        raw_fields
            .iter()
            .map(|field| {
                let ty = self.reflector.resolve_field_type(field, self.config)?;
                Ok(FieldMetadata {
                    name: field.name.clone(),
                    ty,
                    description: field.description.clone(),
                })
            })
            .collect()
    }

    fn resolve_query(
        &self,
        class: ClassId,
        query: &QueryDeclaration,
    ) -> Result<QueryMetadata, ResolveError> {
        let return_type = self
            .reflector
            .resolve_query_return_type(query, self.config)?;

        // Methods without collected parameters simply take none.
        let raw_parameters = self
            .store
            .parameter_declarations(class, &query.method_name)
            .unwrap_or_default();

        validate_argument_styles(&query.method_name, raw_parameters)?;

        let parameters = raw_parameters
            .iter()
            .map(|parameter| self.resolve_parameter(&query.method_name, parameter))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(QueryMetadata {
            name: query.method_name.clone(),
            return_type,
            parameters,
            description: query.description.clone(),
        })
    }

    fn resolve_parameter(
        &self,
        query: &str,
        parameter: &ParameterDeclaration,
    ) -> Result<ParameterMetadata, ResolveError> {
        let ty = match parameter.kind {
            ParameterKind::SingleArgument => {
                Some(self.reflector.resolve_parameter_type(parameter, self.config)?)
            }
            ParameterKind::SpreadArguments => {
                let ty = self.reflector.resolve_parameter_type(parameter, self.config)?;
                // A spread bag must be an input-shaped class, never a scalar
                // or a list.
                if !ty.value.is_class_reference() || ty.is_list() {
                    return Err(ResolveError::WrongArgsType {
                        query: query.to_owned(),
                        parameter: parameter.name.clone(),
                    });
                }
                Some(ty)
            }
            ParameterKind::Context | ParameterKind::Info => None,
        };

        Ok(ParameterMetadata {
            name: parameter.name.clone(),
            kind: parameter.kind,
            ty,
        })
    }
}

fn validate_argument_styles(
    query: &str,
    parameters: &[ParameterDeclaration],
) -> Result<(), ResolveError> {
    let spread_count = parameters
        .iter()
        .filter(|parameter| parameter.kind == ParameterKind::SpreadArguments)
        .count();
    if spread_count > 1 {
        return Err(ResolveError::MultipleArgsUsage {
            query: query.to_owned(),
        });
    }

    let has_single = parameters
        .iter()
        .any(|parameter| parameter.kind == ParameterKind::SingleArgument);
    if spread_count > 0 && has_single {
        return Err(ResolveError::SimultaneousArgsUsage {
            query: query.to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::{ScalarKind, TypeExpression};

    fn parameter(name: &str, kind: ParameterKind) -> ParameterDeclaration {
        ParameterDeclaration {
            name: name.to_owned(),
            kind,
            type_expression: Some(TypeExpression::Scalar(ScalarKind::Int)),
            nullable: None,
            list_depth: None,
        }
    }

    #[test]
    fn at_most_one_spread_parameter_per_method() {
        let parameters = vec![
            parameter("a", ParameterKind::SpreadArguments),
            parameter("b", ParameterKind::SpreadArguments),
        ];
        assert_eq!(
            validate_argument_styles("getUser", &parameters),
            Err(ResolveError::MultipleArgsUsage {
                query: "getUser".to_owned()
            })
        );
    }

    #[test]
    fn argument_styles_are_mutually_exclusive() {
        let parameters = vec![
            parameter("id", ParameterKind::SingleArgument),
            parameter("rest", ParameterKind::SpreadArguments),
        ];
        assert_eq!(
            validate_argument_styles("getUser", &parameters),
            Err(ResolveError::SimultaneousArgsUsage {
                query: "getUser".to_owned()
            })
        );
    }

    #[test]
    fn context_and_info_parameters_do_not_count_as_arguments() {
        let parameters = vec![
            parameter("ctx", ParameterKind::Context),
            parameter("info", ParameterKind::Info),
            parameter("rest", ParameterKind::SpreadArguments),
        ];
        assert_eq!(validate_argument_styles("getUser", &parameters), Ok(()));
    }
}
