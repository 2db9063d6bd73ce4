use std::marker::PhantomData;

use once_cell::sync::OnceCell;

use crate::modulus::Modulus;
use crate::ModularError;

/// A tag owning one piece of process-wide modulus state.
///
/// Declare tags with the [`modulus_tag!`](crate::modulus_tag) macro; each
/// tag owns a [`OnceCell`] that holds its modulus once set.
pub trait ModulusTag: 'static {
    /// The tag name, used in error and panic messages.
    const NAME: &'static str;

    /// Returns the cell backing this tag.
    fn cell() -> &'static OnceCell<u64>;
}

/// A tag-keyed, set-once modulus.
///
/// All instances of a type bound to `OnceModulus<T>` share the modulus
/// stored in the tag `T`'s cell. The cell must be set exactly once, via
/// [`OnceModulus::set`], before any arithmetic is performed; it keeps
/// that value for the remainder of the process.
pub struct OnceModulus<T: ModulusTag> {
    phantom: PhantomData<T>,
}

impl<T: ModulusTag> OnceModulus<T> {
    /// Sets the modulus for the tag `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ModularError::ZeroModulus`] for a zero modulus and
    /// [`ModularError::AlreadySet`] if the tag's modulus was set before.
    #[inline]
    pub fn set(modulus: u64) -> Result<(), ModularError> {
        if modulus == 0 {
            return Err(ModularError::ZeroModulus);
        }
        T::cell()
            .set(modulus)
            .map_err(|_| ModularError::AlreadySet { tag: T::NAME })
    }

    /// Returns the modulus for the tag `T`, or an error if it was never set.
    #[inline]
    pub fn get() -> Result<u64, ModularError> {
        T::cell()
            .get()
            .copied()
            .ok_or(ModularError::UninitializedModulus { tag: T::NAME })
    }
}

impl<T: ModulusTag> std::fmt::Debug for OnceModulus<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnceModulus").field("tag", &T::NAME).finish()
    }
}

impl<T: ModulusTag> Default for OnceModulus<T> {
    #[inline(always)]
    fn default() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<T: ModulusTag> Clone for OnceModulus<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ModulusTag> Copy for OnceModulus<T> {}

impl<T: ModulusTag> PartialEq for OnceModulus<T> {
    #[inline(always)]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ModulusTag> Eq for OnceModulus<T> {}

impl<T: ModulusTag> Modulus for OnceModulus<T> {
    #[inline]
    fn value(self) -> u64 {
        match T::cell().get() {
            Some(&modulus) => modulus,
            None => panic!("the modulus for tag `{}` was read before being set", T::NAME),
        }
    }

    #[inline]
    fn try_value(self) -> Result<u64, ModularError> {
        Self::get()
    }
}

/// Declares a modulus tag: a unit struct owning one process-wide
/// set-once modulus cell.
///
/// ```
/// use modular::{modulus_tag, ModInt, OnceModulus};
///
/// modulus_tag!(pub struct Fp);
///
/// OnceModulus::<Fp>::set(17).unwrap();
/// let a = ModInt::<OnceModulus<Fp>>::new(20);
/// assert_eq!(a.value(), 3);
/// ```
#[macro_export]
macro_rules! modulus_tag {
    ($(#[$meta:meta])* $vis:vis struct $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::ModulusTag for $name {
            const NAME: &'static str = stringify!($name);

            fn cell() -> &'static $crate::once_cell::sync::OnceCell<u64> {
                static CELL: $crate::once_cell::sync::OnceCell<u64> =
                    $crate::once_cell::sync::OnceCell::new();
                &CELL
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    modulus_tag!(struct TestTag);
    modulus_tag!(struct UnsetTag);
    modulus_tag!(struct PanicTag);

    #[test]
    fn test_set_once() {
        assert_eq!(OnceModulus::<TestTag>::set(0), Err(ModularError::ZeroModulus));
        assert!(OnceModulus::<TestTag>::set(97).is_ok());
        assert_eq!(
            OnceModulus::<TestTag>::set(101),
            Err(ModularError::AlreadySet { tag: "TestTag" })
        );
        assert_eq!(OnceModulus::<TestTag>::get(), Ok(97));
        assert_eq!(OnceModulus::<TestTag>::default().value(), 97);
    }

    #[test]
    fn test_unset_read() {
        assert_eq!(
            OnceModulus::<UnsetTag>::get(),
            Err(ModularError::UninitializedModulus { tag: "UnsetTag" })
        );
    }

    #[test]
    #[should_panic(expected = "read before being set")]
    fn test_unset_read_panics() {
        let _ = OnceModulus::<PanicTag>::default().value();
    }
}
