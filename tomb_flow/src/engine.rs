//! Collaborators the engine lends to a configuration load.
//!
//! The loader never inspects engine internals; it only asks yes/no questions
//! through these traits while registering tables.

use crate::catalog::{IdentifierCatalog, ItemId};

/// Decides whether an identifier has behaviour in the engine's object-type system.
pub trait ObjectTypeResolver {
    fn resolves(&self, id: &ItemId) -> bool;
}

/// Answers whether an asset reference exists on the engine's side.
pub trait AssetLookup {
    fn exists(&self, asset: &str) -> bool;
}

impl<F> ObjectTypeResolver for F
where
    F: Fn(&ItemId) -> bool,
{
    fn resolves(&self, id: &ItemId) -> bool {
        self(id)
    }
}

impl<F> AssetLookup for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, asset: &str) -> bool {
        self(asset)
    }
}

/// Everything a full load needs from the engine, bundled.
pub trait EngineServices {
    fn catalog(&self) -> &dyn IdentifierCatalog;
    fn object_types(&self) -> &dyn ObjectTypeResolver;
    fn assets(&self) -> &dyn AssetLookup;
}
