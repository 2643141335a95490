//! Raw declarations, as harvested from source-level annotations before any
//! semantic analysis, and the store trait resolution reads them through.

use crate::ids::ClassId;

/// The GraphQL built-in scalars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, strum::Display)]
pub enum ScalarKind {
    Int,
    Float,
    String,
    Boolean,
    #[strum(serialize = "ID")]
    Id,
}

/// The category of raw declaration a resolution operation draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, strum::Display)]
pub enum DeclarationKind {
    ObjectType,
    InputType,
    Resolver,
}

/// A raw declared type, prior to reflection.
///
/// `Named` is a reference by type name. Forward references are fine: the name
/// is only looked up when reflection runs, by which point declaration
/// collection has seen every class.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TypeExpression {
    Scalar(ScalarKind),
    Class(ClassId),
    Named(String),
}

/// Raw object or input type declaration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub description: Option<String>,
}

/// Raw resolver class declaration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolverDeclaration {
    /// Name of the schema type the resolver's queries are exposed for.
    pub target_type_name: String,
    pub description: Option<String>,
}

/// Raw per-field declaration of an object or input type.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FieldDeclaration {
    pub name: String,
    pub type_expression: TypeExpression,
    /// Explicit nullability override. `None` falls back to the build default.
    pub nullable: Option<bool>,
    /// Explicit list nesting override. `None` means not a list.
    pub list_depth: Option<u8>,
    pub description: Option<String>,
}

/// Raw query method declaration on a resolver class.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct QueryDeclaration {
    pub method_name: String,
    pub return_type: TypeExpression,
    /// Explicit nullability override for the return type.
    pub nullable: Option<bool>,
    /// Explicit list nesting override for the return type.
    pub list_depth: Option<u8>,
    pub description: Option<String>,
}

/// How a resolver method parameter is bound at execution time.
///
/// The set is closed on purpose: every consumer matches exhaustively, so a
/// new kind forces each validation and resolution site to take a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum ParameterKind {
    /// One named argument bound directly to the parameter.
    SingleArgument,
    /// A whole input-shaped argument bag splatted into the method. At most
    /// one per method, and never together with `SingleArgument` parameters.
    SpreadArguments,
    /// The per-request execution context. Typed by the execution engine.
    Context,
    /// Metadata about the current selection. Typed by the execution engine.
    Info,
}

/// Raw parameter declaration on a query method.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ParameterDeclaration {
    pub name: String,
    pub kind: ParameterKind,
    /// Absent for kinds whose type is supplied by the execution engine.
    pub type_expression: Option<TypeExpression>,
    pub nullable: Option<bool>,
    pub list_depth: Option<u8>,
}

/// Read access to the raw declarations harvested by annotation collection.
///
/// `None` means no declaration of that category was collected for the class.
/// That is distinct from `Some` of an empty sequence, and the two states
/// surface as differently named resolution errors.
pub trait DeclarationStore {
    fn object_type_declaration(&self, class: ClassId) -> Option<&TypeDeclaration>;

    fn input_type_declaration(&self, class: ClassId) -> Option<&TypeDeclaration>;

    fn resolver_declaration(&self, class: ClassId) -> Option<&ResolverDeclaration>;

    fn field_declarations(&self, class: ClassId) -> Option<&[FieldDeclaration]>;

    fn query_declarations(&self, class: ClassId) -> Option<&[QueryDeclaration]>;

    fn parameter_declarations(
        &self,
        class: ClassId,
        method_name: &str,
    ) -> Option<&[ParameterDeclaration]>;
}
