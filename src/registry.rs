use indexmap::IndexMap;

use crate::declarations::{
    DeclarationStore, FieldDeclaration, ParameterDeclaration, QueryDeclaration,
    ResolverDeclaration, TypeDeclaration,
};
use crate::ids::ClassId;

/// In-memory store of raw declarations, populated by the annotation
/// collection side of a build.
///
/// Class ids are handed out in registration order and stay stable for the
/// lifetime of the registry. Type names registered here back the forward
/// reference resolution done by
/// [`RegistryTypeReflector`](crate::RegistryTypeReflector).
#[derive(Debug, Default)]
pub struct DeclarationRegistry {
    classes: Vec<ClassEntry>,
    types_by_name: IndexMap<String, ClassId>,
}

#[derive(Debug, Default)]
struct ClassEntry {
    object_type: Option<TypeDeclaration>,
    input_type: Option<TypeDeclaration>,
    resolver: Option<ResolverDeclaration>,
    fields: Option<Vec<FieldDeclaration>>,
    queries: Option<Vec<QueryDeclaration>>,
    parameters: IndexMap<String, Vec<ParameterDeclaration>>,
}

impl DeclarationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an object type class and returns its id.
    pub fn register_object_type(&mut self, declaration: TypeDeclaration) -> ClassId {
        let id = self.allocate();
        self.types_by_name.insert(declaration.name.clone(), id);
        self.classes[usize::from(id)].object_type = Some(declaration);
        id
    }

    /// Registers an input type class and returns its id.
    pub fn register_input_type(&mut self, declaration: TypeDeclaration) -> ClassId {
        let id = self.allocate();
        self.types_by_name.insert(declaration.name.clone(), id);
        self.classes[usize::from(id)].input_type = Some(declaration);
        id
    }

    /// Registers a resolver class and returns its id. Resolver classes are
    /// not referenceable from type expressions, so they take no name slot.
    pub fn register_resolver(&mut self, declaration: ResolverDeclaration) -> ClassId {
        let id = self.allocate();
        self.classes[usize::from(id)].resolver = Some(declaration);
        id
    }

    pub fn add_field(&mut self, class: ClassId, field: FieldDeclaration) {
        self.classes[usize::from(class)]
            .fields
            .get_or_insert_with(Vec::new)
            .push(field);
    }

    /// Replaces the collected field sequence wholesale. Unlike never calling
    /// [`add_field`](Self::add_field), setting an empty sequence records that
    /// collection ran and found nothing.
    pub fn set_field_declarations(&mut self, class: ClassId, fields: Vec<FieldDeclaration>) {
        self.classes[usize::from(class)].fields = Some(fields);
    }

    pub fn add_query(&mut self, class: ClassId, query: QueryDeclaration) {
        self.classes[usize::from(class)]
            .queries
            .get_or_insert_with(Vec::new)
            .push(query);
    }

    /// Replaces the collected query sequence wholesale, empty included.
    pub fn set_query_declarations(&mut self, class: ClassId, queries: Vec<QueryDeclaration>) {
        self.classes[usize::from(class)].queries = Some(queries);
    }

    pub fn add_parameter(
        &mut self,
        class: ClassId,
        method_name: &str,
        parameter: ParameterDeclaration,
    ) {
        self.classes[usize::from(class)]
            .parameters
            .entry(method_name.to_owned())
            .or_default()
            .push(parameter);
    }

    /// Looks up the class registered under a type name.
    pub fn class_id_by_name(&self, name: &str) -> Option<ClassId> {
        self.types_by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn allocate(&mut self) -> ClassId {
        let id = ClassId::from(self.classes.len() as u32);
        self.classes.push(ClassEntry::default());
        id
    }

    fn entry(&self, class: ClassId) -> Option<&ClassEntry> {
        self.classes.get(usize::from(class))
    }
}

impl DeclarationStore for DeclarationRegistry {
    fn object_type_declaration(&self, class: ClassId) -> Option<&TypeDeclaration> {
        self.entry(class)?.object_type.as_ref()
    }

    fn input_type_declaration(&self, class: ClassId) -> Option<&TypeDeclaration> {
        self.entry(class)?.input_type.as_ref()
    }

    fn resolver_declaration(&self, class: ClassId) -> Option<&ResolverDeclaration> {
        self.entry(class)?.resolver.as_ref()
    }

    fn field_declarations(&self, class: ClassId) -> Option<&[FieldDeclaration]> {
        self.entry(class)?.fields.as_deref()
    }

    fn query_declarations(&self, class: ClassId) -> Option<&[QueryDeclaration]> {
        self.entry(class)?.queries.as_deref()
    }

    fn parameter_declarations(
        &self,
        class: ClassId,
        method_name: &str,
    ) -> Option<&[ParameterDeclaration]> {
        self.entry(class)?
            .parameters
            .get(method_name)
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::{ScalarKind, TypeExpression};

    fn type_declaration(name: &str) -> TypeDeclaration {
        TypeDeclaration {
            name: name.to_owned(),
            description: None,
        }
    }

    #[test]
    fn ids_are_allocated_in_registration_order() {
        let mut registry = DeclarationRegistry::new();
        let user = registry.register_object_type(type_declaration("User"));
        let filter = registry.register_input_type(type_declaration("UserFilter"));

        assert_eq!(user.as_u32(), 0);
        assert_eq!(filter.as_u32(), 1);
        assert_eq!(registry.class_id_by_name("User"), Some(user));
        assert_eq!(registry.class_id_by_name("UserFilter"), Some(filter));
        assert_eq!(registry.class_id_by_name("Missing"), None);
    }

    #[test]
    fn absent_and_empty_member_sequences_are_distinct() {
        let mut registry = DeclarationRegistry::new();
        let untouched = registry.register_object_type(type_declaration("A"));
        let emptied = registry.register_object_type(type_declaration("B"));
        registry.set_field_declarations(emptied, Vec::new());

        assert!(registry.field_declarations(untouched).is_none());
        assert_eq!(registry.field_declarations(emptied), Some(&[][..]));
    }

    #[test]
    fn unknown_class_id_yields_no_declarations() {
        let registry = DeclarationRegistry::new();
        assert!(registry.object_type_declaration(ClassId::from(7)).is_none());
        assert!(registry.parameter_declarations(ClassId::from(7), "getUser").is_none());
    }

    #[test]
    fn parameters_are_stored_per_method() {
        let mut registry = DeclarationRegistry::new();
        let resolver = registry.register_resolver(ResolverDeclaration {
            target_type_name: "User".to_owned(),
            description: None,
        });
        registry.add_parameter(
            resolver,
            "getUser",
            ParameterDeclaration {
                name: "id".to_owned(),
                kind: crate::declarations::ParameterKind::SingleArgument,
                type_expression: Some(TypeExpression::Scalar(ScalarKind::Id)),
                nullable: None,
                list_depth: None,
            },
        );

        assert_eq!(
            registry
                .parameter_declarations(resolver, "getUser")
                .map(<[_]>::len),
            Some(1)
        );
        assert!(registry.parameter_declarations(resolver, "getUsers").is_none());
    }
}
