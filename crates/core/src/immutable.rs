//! Immutability guard: field writes after construction fail instead of
//! silently succeeding.
//!
//! A host type keeps its fields private and exposes no `&mut self` API, so a
//! constructed instance cannot change. [`Immutable`] is the write contract for
//! such an instance: every write or removal is reported as an
//! [`ImmutableError`]. [`Draft`] is the only state in which writes succeed.

use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use crate::error::{ImmutableError, InvalidArgumentError};
use crate::fields::Fields;

/// Construction state of an instance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Field writes are permitted (a [`Draft`]).
    Constructing,
    /// Read-only for the rest of the instance's lifetime.
    Sealed,
}

impl Lifecycle {
    /// `Constructing → Sealed`. Sealing twice is a no-op.
    pub fn seal(self) -> Self {
        Lifecycle::Sealed
    }

    pub fn is_sealed(self) -> bool {
        matches!(self, Lifecycle::Sealed)
    }
}

/// Immutability guard capability.
///
/// Every provided method rejects the operation; the receiver is only ever
/// borrowed shared, so the instance is unchanged after a rejection.
pub trait Immutable: Fields {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::Sealed
    }

    /// Attempts to assign `value` to `field`.
    ///
    /// Declared fields fail with [`ImmutableError::SealedField`]; any other
    /// name fails with [`ImmutableError::UndeclaredField`].
    fn try_set(&self, field: &str, _value: &dyn Any) -> Result<(), ImmutableError> {
        Err(rejection::<Self>(field))
    }

    /// Attempts to remove `field`. Fails exactly like [`Immutable::try_set`].
    fn try_unset(&self, field: &str) -> Result<(), ImmutableError> {
        Err(rejection::<Self>(field))
    }
}

fn rejection<T: Fields + ?Sized>(field: &str) -> ImmutableError {
    if T::is_declared(field) {
        ImmutableError::sealed_field(T::type_name(), field)
    } else {
        ImmutableError::undeclared_field(T::type_name(), field)
    }
}

/// Host types that can be built from a [`Draft`].
pub trait Construct: Fields + Sized {
    /// Builds the sealed instance, validating every value taken from the draft.
    fn construct(draft: &mut Draft<Self>) -> Result<Self, InvalidArgumentError>;
}

struct Slot {
    name: &'static str,
    value: Option<Box<dyn Any>>,
}

/// An instance of `T` under construction, holding named field values.
///
/// `seal` consumes the draft, so the transition happens at most once.
pub struct Draft<T> {
    slots: Vec<Slot>,
    _host: PhantomData<fn() -> T>,
}

impl<T: Construct> Draft<T> {
    pub fn new() -> Self {
        let slots = T::NAMES
            .iter()
            .map(|&name| Slot { name, value: None })
            .collect();
        Self {
            slots,
            _host: PhantomData,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::Constructing
    }

    /// Records `value` for a declared field, replacing any earlier value.
    pub fn write<V: Any>(&mut self, field: &str, value: V) -> Result<(), ImmutableError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.name == field)
            .ok_or_else(|| ImmutableError::undeclared_field(T::type_name(), field))?;
        slot.value = Some(Box::new(value));
        Ok(())
    }

    /// Builder-style [`Draft::write`].
    pub fn with<V: Any>(mut self, field: &str, value: V) -> Result<Self, ImmutableError> {
        self.write(field, value)?;
        Ok(self)
    }

    pub fn is_written(&self, field: &str) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.name == field && slot.value.is_some())
    }

    /// Moves the recorded value of `field` out of the draft.
    pub fn take<V: Any>(&mut self, field: &'static str) -> Result<V, InvalidArgumentError> {
        let missing = || InvalidArgumentError::MissingField {
            type_name: T::type_name(),
            field,
        };
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.name == field)
            .ok_or_else(missing)?;
        let value = slot.value.take().ok_or_else(missing)?;
        value
            .downcast::<V>()
            .map(|value| *value)
            .map_err(|_| InvalidArgumentError::WrongType {
                type_name: T::type_name(),
                field,
                expected: core::any::type_name::<V>(),
            })
    }

    /// `Constructing → Sealed`: runs the host's construction validation.
    pub fn seal(mut self) -> Result<T, InvalidArgumentError> {
        T::construct(&mut self)
    }
}

impl<T: Construct> Default for Draft<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Construct> fmt::Debug for Draft<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let written: Vec<_> = self
            .slots
            .iter()
            .filter(|slot| slot.value.is_some())
            .map(|slot| slot.name)
            .collect();
        f.debug_struct("Draft")
            .field("type", &T::type_name())
            .field("written", &written)
            .finish()
    }
}
