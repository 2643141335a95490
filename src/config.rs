/// Schema-wide build settings.
///
/// The configuration is immutable for the lifetime of a
/// [`MetadataResolver`](crate::MetadataResolver) and is passed by value into
/// every reflection call, so resolution stays a pure function of the class
/// id, the store contents and this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BuildConfig {
    /// Nullability applied to any declaration without an explicit override.
    pub default_nullable: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            default_nullable: false,
        }
    }
}
