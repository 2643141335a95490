//! Resolution of raw, annotation-collected GraphQL schema declarations into
//! fully typed, validated metadata.
//!
//! Annotation collection (done elsewhere) populates a [`DeclarationStore`]
//! with loosely-structured declarations for object types, input types and
//! resolver classes. This crate is the semantic-analysis pass over that
//! store: it resolves forward references between declared types, normalizes
//! nullability and list-depth modifiers against the build-wide defaults,
//! enforces the mutual-exclusion rules between parameter styles, and
//! memoizes the resulting metadata per declaring class so repeated
//! schema-build requests are cheap and idempotent.
//!
//! The resolved metadata describes the schema statically; executing queries
//! against it is the job of an execution engine, not of this crate.
//!
//! ```
//! use graphql_metadata_resolver::{
//!     BuildConfig, DeclarationRegistry, FieldDeclaration, MetadataResolver,
//!     RegistryTypeReflector, ScalarKind, TypeDeclaration, TypeExpression,
//! };
//!
//! let mut registry = DeclarationRegistry::new();
//! let user = registry.register_object_type(TypeDeclaration {
//!     name: "User".to_owned(),
//!     description: None,
//! });
//! registry.add_field(user, FieldDeclaration {
//!     name: "id".to_owned(),
//!     type_expression: TypeExpression::Scalar(ScalarKind::Id),
//!     nullable: None,
//!     list_depth: None,
//!     description: None,
//! });
//!
//! let reflector = RegistryTypeReflector::new(&registry);
//! let mut resolver = MetadataResolver::new(&registry, &reflector, BuildConfig::default());
//!
//! let metadata = resolver.resolve_object_type(user).unwrap();
//! assert_eq!(metadata.name, "User");
//! assert!(!metadata.fields[0].ty.nullable);
//! ```

mod config;
mod declarations;
mod error;
mod ids;
mod metadata;
mod reflection;
mod registry;
mod resolve;

pub use config::BuildConfig;
pub use declarations::{
    DeclarationKind, DeclarationStore, FieldDeclaration, ParameterDeclaration, ParameterKind,
    QueryDeclaration, ResolverDeclaration, ScalarKind, TypeDeclaration, TypeExpression,
};
pub use error::ResolveError;
pub use ids::ClassId;
pub use metadata::{
    FieldMetadata, InputTypeMetadata, ObjectTypeMetadata, ParameterMetadata, QueryMetadata,
    ResolverMetadata, TypeDescriptor, TypeValue,
};
pub use reflection::{RegistryTypeReflector, TypeReflectionError, TypeReflector};
pub use registry::DeclarationRegistry;
pub use resolve::MetadataResolver;
