//! Dense univariate polynomials over a [`Field`]
//!
//! Coefficients are stored least-significant first: `coeffs[i]` is the
//! coefficient of `x^i`. Every constructor canonicalizes by trimming trailing
//! zeros, so the zero polynomial is the empty coefficient vector and
//! `degree()` is always the canonical coefficient count minus one.

pub mod lagrange;

pub use lagrange::{interpolate, lagrange_basis, vanishing_polynomial};

use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{PolycommitError, Result};
use crate::field::{Field, FieldElement};

/// A dense polynomial in canonical form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    field: Field,
    coeffs: Vec<FieldElement>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients (least-significant first),
    /// trimming trailing zeros. All coefficients must belong to `field`.
    pub fn new(field: Field, mut coeffs: Vec<FieldElement>) -> Self {
        for c in &coeffs {
            assert_eq!(
                c.field(),
                &field,
                "polynomial coefficient from a different field"
            );
        }
        while coeffs.last().map_or(false, FieldElement::is_zero) {
            coeffs.pop();
        }
        Self { field, coeffs }
    }

    /// The field the coefficients live in.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Canonical coefficients, least-significant first. Empty for the zero
    /// polynomial.
    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coeffs
    }

    /// `-1` for the zero polynomial, otherwise the highest power with a
    /// nonzero coefficient.
    pub fn degree(&self) -> isize {
        self.coeffs.len() as isize - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// The coefficient of `x^n`, zero beyond the degree.
    pub fn coefficient(&self, n: usize) -> FieldElement {
        self.coeffs.get(n).cloned().unwrap_or_else(|| self.field.zero())
    }

    /// The coefficient of the highest power, if any.
    pub fn leading_coefficient(&self) -> Option<&FieldElement> {
        self.coeffs.last()
    }

    /// Multiplies every coefficient by `scalar`.
    pub fn scalar_mul(&self, scalar: &FieldElement) -> Polynomial {
        let coeffs = self.coeffs.iter().map(|c| c * scalar).collect();
        Polynomial::new(self.field.clone(), coeffs)
    }

    /// Raises the polynomial to a nonnegative power by repeated squaring.
    pub fn pow(&self, exponent: u64) -> Polynomial {
        let mut result = self.field.constant(self.field.one());
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e == 0 {
                break;
            }
            base = &base * &base;
        }
        result
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `self = quotient * divisor + remainder` and
    /// `degree(remainder) < degree(divisor)`.
    ///
    /// The leading term of the running remainder is eliminated from the top
    /// down using the inverse of the divisor's leading coefficient.
    pub fn divmod(&self, divisor: &Polynomial) -> Result<(Polynomial, Polynomial)> {
        self.assert_same_field(divisor);
        let lead_inv = divisor
            .leading_coefficient()
            .ok_or(PolycommitError::ZeroPolynomialDivisor)?
            .inverse()?;
        if self.coeffs.len() < divisor.coeffs.len() {
            return Ok((self.field.polynomial(Vec::new()), self.clone()));
        }

        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![self.field.zero(); self.coeffs.len() - divisor.coeffs.len() + 1];
        while remainder.len() >= divisor.coeffs.len() {
            let shift = remainder.len() - divisor.coeffs.len();
            let factor = &remainder[remainder.len() - 1] * &lead_inv;
            for (i, c) in divisor.coeffs.iter().enumerate() {
                remainder[shift + i] = &remainder[shift + i] - &(&factor * c);
            }
            quotient[shift] = factor;
            // The top term cancels exactly, so the remainder shrinks every
            // round; drop it along with any newly exposed zeros.
            while remainder.last().map_or(false, FieldElement::is_zero) {
                remainder.pop();
            }
        }
        Ok((
            Polynomial::new(self.field.clone(), quotient),
            Polynomial::new(self.field.clone(), remainder),
        ))
    }

    /// Exact division: fails with [`PolycommitError::InexactDivision`] unless
    /// the remainder is zero.
    pub fn div_exact(&self, divisor: &Polynomial) -> Result<Polynomial> {
        let (quotient, remainder) = self.divmod(divisor)?;
        if !remainder.is_zero() {
            return Err(PolycommitError::InexactDivision);
        }
        Ok(quotient)
    }

    /// Horner evaluation at `point`.
    pub fn eval(&self, point: &FieldElement) -> FieldElement {
        assert_eq!(
            point.field(),
            &self.field,
            "evaluation point from a different field"
        );
        let mut acc = self.field.zero();
        for c in self.coeffs.iter().rev() {
            acc = &(&acc * point) + c;
        }
        acc
    }

    /// Substitutes `other` for the variable, Horner-style. Quadratic in the
    /// degree, so rarely the right tool for large polynomials.
    pub fn compose(&self, other: &Polynomial) -> Polynomial {
        self.assert_same_field(other);
        let mut result = self.field.polynomial(Vec::new());
        for c in self.coeffs.iter().rev() {
            result = &(&result * other) + &self.field.constant(c.clone());
        }
        result
    }

    fn assert_same_field(&self, other: &Polynomial) {
        assert_eq!(
            self.field, other.field,
            "polynomials over different fields"
        );
    }

    fn zip_with<F>(&self, rhs: &Polynomial, op: F) -> Polynomial
    where
        F: Fn(&FieldElement, &FieldElement) -> FieldElement,
    {
        self.assert_same_field(rhs);
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let zero = self.field.zero();
        let coeffs = (0..len)
            .map(|i| {
                op(
                    self.coeffs.get(i).unwrap_or(&zero),
                    rhs.coeffs.get(i).unwrap_or(&zero),
                )
            })
            .collect();
        Polynomial::new(self.field.clone(), coeffs)
    }
}

/// Polynomial factories, making a [`Field`] the single entry point for
/// building values over itself.
impl Field {
    pub fn polynomial(&self, coeffs: Vec<FieldElement>) -> Polynomial {
        Polynomial::new(self.clone(), coeffs)
    }

    /// The constant polynomial `value`, the explicit scalar-to-polynomial
    /// coercion used at API boundaries.
    pub fn constant(&self, value: FieldElement) -> Polynomial {
        self.polynomial(vec![value])
    }

    /// The monomial `coefficient * x^degree`.
    pub fn monomial(&self, degree: usize, coefficient: FieldElement) -> Polynomial {
        let mut coeffs = vec![self.zero(); degree];
        coeffs.push(coefficient);
        self.polynomial(coeffs)
    }

    /// The polynomial `x`.
    pub fn x(&self) -> Polynomial {
        self.monomial(1, self.one())
    }

    /// The polynomial whose roots are exactly `roots`:
    /// `(X - r_1)(X - r_2)...(X - r_n)`.
    pub fn vanishing_polynomial(&self, roots: &[FieldElement]) -> Polynomial {
        lagrange::vanishing_polynomial(self, roots)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        let coeffs = self.coeffs.iter().map(|c| -c).collect();
        Polynomial::new(self.field.clone(), coeffs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Full convolution. The inner products are accumulated as raw integers
    /// and reduced once per output coefficient.
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.assert_same_field(rhs);
        if self.is_zero() || rhs.is_zero() {
            return self.field.polynomial(Vec::new());
        }
        let mut acc = vec![BigUint::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                acc[i + j] += a.value() * b.value();
            }
        }
        let coeffs = acc.into_iter().map(|v| self.field.element(v)).collect();
        Polynomial::new(self.field.clone(), coeffs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}
