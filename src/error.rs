use crate::declarations::DeclarationKind;
use crate::ids::ClassId;
use crate::reflection::TypeReflectionError;

/// A fatal resolution failure.
///
/// Every variant points at a declaration-time mistake and carries enough
/// context to locate the offending declaration. Nothing is cached for the
/// failed class, so fixing the declaration and re-running the build gets a
/// fresh attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No raw declaration of the requested category exists for the class.
    #[error("no {expected} declaration was collected for class {class}")]
    MissingClassMetadata {
        class: ClassId,
        expected: DeclarationKind,
    },
    /// A declared object or input type has zero fields.
    #[error("type {type_name} (class {class}) does not declare any field")]
    MissingFields { class: ClassId, type_name: String },
    /// A resolver class declares no query method.
    #[error("resolver class {class} does not declare any query method")]
    MissingResolverMethods { class: ClassId },
    /// The same field name appears twice on one type.
    #[error("field {field} is declared more than once on type {type_name}")]
    DuplicateField { type_name: String, field: String },
    /// The same method name appears twice on one resolver class.
    #[error("query {query} is declared more than once on resolver class {class}")]
    DuplicateQuery { class: ClassId, query: String },
    /// A method may declare at most one spread-arguments parameter.
    #[error("query {query} declares more than one spread-arguments parameter")]
    MultipleArgsUsage { query: String },
    /// Single-argument and spread-arguments styles are mutually exclusive on
    /// one method.
    #[error("query {query} mixes single-argument and spread-arguments parameters")]
    SimultaneousArgsUsage { query: String },
    /// A spread-arguments parameter must resolve to a non-list class
    /// reference.
    #[error(
        "parameter {parameter} of query {query} cannot be spread: its type is not a non-list class reference"
    )]
    WrongArgsType { query: String, parameter: String },
    #[error(transparent)]
    TypeReflection(#[from] TypeReflectionError),
}
