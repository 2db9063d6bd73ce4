use crate::ModularError;

/// The modulo operation.
pub trait Reduce<Modulus> {
    /// Output type.
    type Output;

    /// Calculates `self (mod modulus)`.
    fn reduce(self, modulus: Modulus) -> Self::Output;
}

/// The modular addition.
pub trait AddReduce<Modulus, Rhs = Self> {
    /// Output type.
    type Output;

    /// Calculates `self + rhs (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn add_reduce(self, rhs: Rhs, modulus: Modulus) -> Self::Output;
}

/// The modular addition assignment.
pub trait AddReduceAssign<Modulus, Rhs = Self> {
    /// Calculates `self += rhs (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn add_reduce_assign(&mut self, rhs: Rhs, modulus: Modulus);
}

/// The modular subtraction.
pub trait SubReduce<Modulus, Rhs = Self> {
    /// Output type.
    type Output;

    /// Calculates `self - rhs (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn sub_reduce(self, rhs: Rhs, modulus: Modulus) -> Self::Output;
}

/// The modular subtraction assignment.
pub trait SubReduceAssign<Modulus, Rhs = Self> {
    /// Calculates `self -= rhs (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn sub_reduce_assign(&mut self, rhs: Rhs, modulus: Modulus);
}

/// The modular negation.
pub trait NegReduce<Modulus> {
    /// Output type.
    type Output;

    /// Calculates `-self (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    fn neg_reduce(self, modulus: Modulus) -> Self::Output;
}

/// The modular negation assignment.
pub trait NegReduceAssign<Modulus> {
    /// Calculates `-self (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    fn neg_reduce_assign(&mut self, modulus: Modulus);
}

/// The modular multiplication.
pub trait MulReduce<Modulus, Rhs = Self> {
    /// Output type.
    type Output;

    /// Calculates `self * rhs (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn mul_reduce(self, rhs: Rhs, modulus: Modulus) -> Self::Output;
}

/// The modular multiplication assignment.
pub trait MulReduceAssign<Modulus, Rhs = Self> {
    /// Calculates `self *= rhs (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    fn mul_reduce_assign(&mut self, rhs: Rhs, modulus: Modulus);
}

/// The modular exponentiation.
pub trait PowReduce<Modulus, Exponent> {
    /// Calculates `self ^ exp (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    fn pow_reduce(self, exp: Exponent, modulus: Modulus) -> Self;
}

/// Calculate the multiplicative inverse element when there is a field.
pub trait InvReduce<Modulus = Self>: Sized {
    /// Calculates `self^(-1) (mod modulus)`.
    ///
    /// # Panics
    ///
    /// Panics if `self` and `modulus` are not coprime.
    fn inv_reduce(self, modulus: Modulus) -> Self;
}

/// Try to calculate the multiplicative inverse element when there is not a field.
pub trait TryInvReduce<Modulus = Self>: Sized {
    /// Tries to calculate `self^(-1) (mod modulus)`.
    ///
    /// # Errors
    ///
    /// If there does not exist such an inverse, a [`ModularError`] will be returned.
    fn try_inv_reduce(self, modulus: Modulus) -> Result<Self, ModularError>;
}

/// The modular division.
pub trait DivReduce<Modulus, Rhs = Self> {
    /// Output type.
    type Output;

    /// Calculates `self / rhs (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    ///
    /// # Panics
    ///
    /// Panics if `rhs` and `modulus` are not coprime.
    fn div_reduce(self, rhs: Rhs, modulus: Modulus) -> Self::Output;
}

/// The modular division assignment.
pub trait DivReduceAssign<Modulus, Rhs = Self> {
    /// Calculates `self /= rhs (mod modulus)`.
    ///
    /// # Correctness
    ///
    /// - `self < modulus`
    /// - `rhs < modulus`
    ///
    /// # Panics
    ///
    /// Panics if `rhs` and `modulus` are not coprime.
    fn div_reduce_assign(&mut self, rhs: Rhs, modulus: Modulus);
}
