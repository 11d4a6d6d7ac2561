//! Declared field sets: the read-only view both capabilities work from.

use core::any::Any;
use core::fmt::Debug;
use core::hash::{Hash, Hasher};

/// A value that can be stored in a value object's field.
///
/// Implemented for every `'static` type with `Debug + PartialEq + Hash`, so
/// a field whose type is itself a value object compares through its own
/// equality.
pub trait FieldValue: Any + Debug {
    /// Compares against another field value; values of another type are unequal.
    fn eq_field(&self, other: &dyn FieldValue) -> bool;

    /// Feeds this value's `Hash` contribution into `state`.
    fn hash_field(&self, state: &mut dyn Hasher);

    fn as_any(&self) -> &dyn Any;
}

impl<T> FieldValue for T
where
    T: Any + Debug + PartialEq + Hash,
{
    fn eq_field(&self, other: &dyn FieldValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn hash_field(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One named field of an instance, borrowed for inspection.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    value: &'a dyn FieldValue,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn FieldValue) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &'a dyn FieldValue {
        self.value
    }

    /// Downcasts the value to a concrete type.
    pub fn get<V: Any>(&self) -> Option<&'a V> {
        self.value.as_any().downcast_ref::<V>()
    }
}

/// The ordered, declared field set of a host type.
///
/// `fields()` must yield exactly one entry per name in [`Fields::NAMES`], in
/// the same order.
pub trait Fields: Any {
    /// Declared field names, in declaration order.
    const NAMES: &'static [&'static str];

    fn fields(&self) -> Vec<Field<'_>>;

    /// Returns the named field, if declared.
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.fields().into_iter().find(|f| f.name() == name)
    }

    fn is_declared(name: &str) -> bool {
        Self::NAMES.contains(&name)
    }

    /// Unqualified type name (`Point` rather than `my_crate::geo::Point`).
    fn type_name() -> &'static str {
        let full = core::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }
}
