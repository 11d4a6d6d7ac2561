//! Value object capability: immutable + compared by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use crate::equality::ValueEquality;
use crate::immutable::Immutable;

/// Marker trait for value objects.
///
/// A value object is **immutable** ([`Immutable`]) and **compared by value**
/// ([`ValueEquality`]). Neither capability alone is enough: the blanket
/// implementation below only applies once a type adopts both.
///
/// ## Identity
///
/// Which instance you hold never matters: two instances with equal fields are
/// interchangeable, and comparing them never looks at their addresses.
///
/// ## Immutability
///
/// Value objects never change once constructed. To "modify" a value object,
/// create a new one with the new values. Fields stay private, there is no
/// `&mut self` API, and every write attempt through [`Immutable`] is rejected.
///
/// ## Usage Pattern
///
/// ```
/// use valueobject_core::{impl_value_object, ValueEquality, ValueObject};
///
/// #[derive(Debug, Clone)]
/// pub struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl_value_object!(Money { amount, currency });
///
/// fn assert_value_object<T: ValueObject>(_: &T) {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert_value_object(&m1);
/// assert!(m1.equals(&m2));
/// assert_eq!(m1, m2);
/// ```
pub trait ValueObject: Immutable + ValueEquality {}

impl<T> ValueObject for T where T: Immutable + ValueEquality {}

/// Declares a host type as a value object.
///
/// Implements [`Fields`](crate::Fields) for the listed fields (in order),
/// adopts [`Immutable`] and [`ValueEquality`], and routes `PartialEq`, `Eq`
/// and `Hash` through value equality. Every listed field must be
/// `Debug + PartialEq + Hash`; the host type itself needs nothing else.
#[macro_export]
macro_rules! impl_value_object {
    ($t:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::Fields for $t {
            const NAMES: &'static [&'static str] = &[$(stringify!($field)),+];

            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![$($crate::Field::new(stringify!($field), &self.$field)),+]
            }
        }

        impl $crate::Immutable for $t {}

        impl $crate::ValueEquality for $t {}

        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::ValueEquality::equals(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::ValueEquality::identity_hash(self));
            }
        }
    };
}
