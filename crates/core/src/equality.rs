//! Value equality: structural, type-exact comparison and a hash surrogate
//! consistent with it.

use core::any::Any;
use core::hash::Hasher;
use std::collections::hash_map::DefaultHasher;

use crate::fields::Fields;

/// Value equality capability.
///
/// Two instances are equal iff they share the exact concrete type and every
/// declared field compares equal, each field using its own equality.
///
/// # Construction responsibility
///
/// No input validation happens here. If a host admits field values that its
/// field types consider equal while they mean different things (an
/// "unset" sentinel next to a legitimate default, for instance), the equal
/// verdict is the host's fault: reject such values at construction.
pub trait ValueEquality: Fields {
    /// Structural equality against a value of any type.
    ///
    /// Returns `false` (never fails) when `other` is not a `Self`.
    fn equals(&self, other: &dyn Any) -> bool
    where
        Self: Sized,
    {
        let Some(other) = other.downcast_ref::<Self>() else {
            return false;
        };
        self.fields()
            .iter()
            .zip(other.fields().iter())
            .all(|(mine, theirs)| {
                mine.name() == theirs.name() && mine.value().eq_field(theirs.value())
            })
    }

    /// Hash surrogate: equal instances always produce equal values.
    fn identity_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for field in self.fields() {
            hasher.write(field.name().as_bytes());
            field.value().hash_field(&mut hasher);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Offset, Point, Segment};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn equal_fields_mean_equal_values() {
        let a = Point::new(3, 4);
        let b = Point::new(3, 4);
        assert!(a.equals(&b));
        assert_eq!(a.identity_hash(), b.identity_hash());
    }

    #[test]
    fn any_differing_field_breaks_equality() {
        let a = Point::new(3, 4);
        assert!(!a.equals(&Point::new(3, 5)));
        assert!(!a.equals(&Point::new(4, 4)));
    }

    #[test]
    fn other_types_are_never_equal() {
        let p = Point::new(1, 2);
        assert!(!p.equals(&Offset::new(1, 2)));
        assert!(!p.equals(&(1_i32, 2_i32)));
        assert!(!p.equals(&"Point { x: 1, y: 2 }"));
    }

    #[test]
    fn nested_value_objects_compare_structurally() {
        let a = Segment::new(Point::new(0, 0), Point::new(2, 2), "d");
        let b = Segment::new(Point::new(0, 0), Point::new(2, 2), "d");
        let c = Segment::new(Point::new(0, 0), Point::new(2, 3), "d");
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
        assert_eq!(a.identity_hash(), b.identity_hash());
    }

    #[test]
    fn std_traits_route_through_value_equality() {
        let mut set = HashSet::new();
        set.insert(Point::new(1, 1));
        set.insert(Point::new(1, 1));
        set.insert(Point::new(2, 1));
        assert_eq!(set.len(), 2);
        assert_eq!(Point::new(9, 9), Point::new(9, 9));
    }

    #[test]
    fn comparison_leaves_both_sides_untouched() {
        let a = Point::new(1, 2);
        let b = a.clone();
        let _ = a.equals(&b);
        assert_eq!((a.x(), a.y()), (1, 2));
        assert_eq!((b.x(), b.y()), (1, 2));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn equality_is_reflexive(x in any::<i32>(), y in any::<i32>()) {
            let p = Point::new(x, y);
            prop_assert!(p.equals(&p));
        }

        #[test]
        fn equality_is_symmetric(
            a in (-2i32..2, -2i32..2),
            b in (-2i32..2, -2i32..2)
        ) {
            let p = Point::new(a.0, a.1);
            let q = Point::new(b.0, b.1);
            prop_assert_eq!(p.equals(&q), q.equals(&p));
        }

        #[test]
        fn equality_is_transitive(a in 0i32..3, b in 0i32..3, c in 0i32..3) {
            let p = Point::new(a, 0);
            let q = Point::new(b, 0);
            let r = Point::new(c, 0);
            if p.equals(&q) && q.equals(&r) {
                prop_assert!(p.equals(&r));
            }
        }

        #[test]
        fn equal_values_hash_equally(x in -3i32..3, y in -3i32..3, u in -3i32..3, v in -3i32..3) {
            let p = Point::new(x, y);
            let q = Point::new(u, v);
            if p.equals(&q) {
                prop_assert_eq!(p.identity_hash(), q.identity_hash());
            }
        }
    }
}
