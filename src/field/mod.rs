//! Finite field arithmetic module
//!
//! A [`Field`] fixes one (assumed prime) modulus and acts as the factory for
//! every [`FieldElement`] and polynomial over it. There are no module-level
//! field singletons: each commitment scheme instance owns its field and
//! threads it through every call.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use crate::errors::{PolycommitError, Result};

/// A finite field of a fixed order.
///
/// Cheap to clone (the order is shared behind an [`Arc`]); two fields compare
/// equal exactly when their orders do.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    order: Arc<BigUint>,
}

impl Field {
    /// Creates a field of the given order. The order is assumed prime; values
    /// below 2 are rejected.
    pub fn new(order: BigUint) -> Result<Self> {
        if order < BigUint::from(2u32) {
            return Err(PolycommitError::InvalidFieldOrder);
        }
        Ok(Self {
            order: Arc::new(order),
        })
    }

    /// The order of the field.
    pub fn order(&self) -> &BigUint {
        self.order.as_ref()
    }

    /// The additive identity.
    pub fn zero(&self) -> FieldElement {
        FieldElement {
            field: self.clone(),
            value: BigUint::zero(),
        }
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FieldElement {
        FieldElement {
            field: self.clone(),
            value: BigUint::one(),
        }
    }

    /// Coerces an integer into the field, reducing it into `[0, order)`.
    /// Negative inputs wrap around, so `element(-1) == element(order - 1)`.
    pub fn element<T: Into<BigInt>>(&self, value: T) -> FieldElement {
        let order = BigInt::from(self.order().clone());
        let reduced = value.into().mod_floor(&order);
        FieldElement {
            field: self.clone(),
            value: reduced.to_biguint().expect("non-negative remainder"),
        }
    }

    /// Samples an element uniformly from `[0, order)`.
    ///
    /// The caller chooses the generator: a CSPRNG for trapdoor and blinding
    /// material, a seeded generator for tests.
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement {
            field: self.clone(),
            value: rng.gen_biguint_below(self.order.as_ref()),
        }
    }
}

/// An immutable element of a [`Field`], stored reduced into `[0, order)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    field: Field,
    value: BigUint,
}

impl FieldElement {
    /// The field this element belongs to.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The canonical representative in `[0, order)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Canonical little-endian byte encoding of the representative.
    pub fn to_bytes_le(&self) -> Vec<u8> {
        self.value.to_bytes_le()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// The multiplicative inverse, found with the extended Euclidean
    /// algorithm: the `t` with `t * self == 1 (mod order)`.
    ///
    /// Fails with [`PolycommitError::NonInvertibleElement`] for zero (and for
    /// non-units, should the order not be prime).
    pub fn inverse(&self) -> Result<FieldElement> {
        if self.value.is_zero() {
            return Err(PolycommitError::NonInvertibleElement);
        }
        let order = BigInt::from(self.field.order().clone());
        let (mut t, mut new_t) = (BigInt::zero(), BigInt::one());
        let (mut r, mut new_r) = (order.clone(), BigInt::from(self.value.clone()));
        while !new_r.is_zero() {
            let quotient = &r / &new_r;
            let next_t = &t - &quotient * &new_t;
            t = std::mem::replace(&mut new_t, next_t);
            let next_r = &r - &quotient * &new_r;
            r = std::mem::replace(&mut new_r, next_r);
        }
        if !r.is_one() {
            return Err(PolycommitError::NonInvertibleElement);
        }
        let value = t
            .mod_floor(&order)
            .to_biguint()
            .expect("non-negative remainder");
        Ok(FieldElement {
            field: self.field.clone(),
            value,
        })
    }

    /// `self / rhs`, i.e. multiplication by the inverse of `rhs`.
    pub fn divide(&self, rhs: &FieldElement) -> Result<FieldElement> {
        Ok(self * &rhs.inverse()?)
    }

    /// Raises the element to a nonnegative power by square-and-multiply.
    pub fn pow(&self, exponent: u64) -> FieldElement {
        let mut result = self.field.one();
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            e >>= 1;
        }
        result
    }

    fn assert_same_field(&self, other: &FieldElement) {
        assert_eq!(
            self.field, other.field,
            "field elements come from different fields"
        );
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        // Both operands are reduced, so one conditional subtraction suffices.
        let mut sum = &self.value + &rhs.value;
        if sum >= *self.field.order() {
            sum -= self.field.order();
        }
        FieldElement {
            field: self.field.clone(),
            value: sum,
        }
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        let value = if self.value >= rhs.value {
            &self.value - &rhs.value
        } else {
            self.field.order() - (&rhs.value - &self.value)
        };
        FieldElement {
            field: self.field.clone(),
            value,
        }
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        self.assert_same_field(rhs);
        FieldElement {
            field: self.field.clone(),
            value: (&self.value * &rhs.value) % self.field.order(),
        }
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        let value = if self.value.is_zero() {
            BigUint::zero()
        } else {
            self.field.order() - &self.value
        };
        FieldElement {
            field: self.field.clone(),
            value,
        }
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        &self + &rhs
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        &self - &rhs
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        &self * &rhs
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}
