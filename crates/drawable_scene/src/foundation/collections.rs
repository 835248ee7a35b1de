//! Handle types for resources owned outside this crate
//!
//! Drawables never own geometry. They hold small copyable keys into storage
//! managed by the asset subsystem, which decides resource lifetime.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Key of a vertex array held in external geometry storage
    pub struct GeometryKey;
}

/// Geometry storage keyed by [`GeometryKey`]
pub type GeometryMap<T> = SlotMap<GeometryKey, T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_keys_are_stable() {
        let mut storage: GeometryMap<&'static str> = GeometryMap::with_key();
        let quad = storage.insert("quad");
        let cube = storage.insert("cube");

        storage.remove(quad);
        assert_eq!(storage.get(cube), Some(&"cube"));
        assert!(storage.get(quad).is_none());
    }
}
