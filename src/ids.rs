use std::fmt;

/// A stable, opaque handle for a declaring class.
///
/// Ids are assigned at declaration-collection time, either by
/// [`DeclarationRegistry`](crate::DeclarationRegistry) or by whatever store
/// the embedder brings. Equality is identity equality: two ids are equal only
/// when they refer to the same registered class, never because two classes
/// happen to look alike. All three metadata caches are keyed by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct ClassId(u32);

impl ClassId {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for ClassId {
    fn from(index: u32) -> Self {
        ClassId(index)
    }
}

impl From<ClassId> for usize {
    fn from(id: ClassId) -> usize {
        id.0 as usize
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
