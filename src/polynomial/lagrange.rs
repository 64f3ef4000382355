//! Lagrange interpolation
//!
//! Builds the unique polynomial of degree `< n` through `n` distinct points.
//! The caller guarantees distinctness; a repeated point surfaces as a
//! [`PolycommitError::NonInvertibleElement`] from the pairwise-difference
//! inverse.

use crate::errors::{PolycommitError, Result};
use crate::field::{Field, FieldElement};

use super::Polynomial;

/// The polynomial `(X - r_1)(X - r_2)...(X - r_n)`, assembled by balanced
/// divide-and-conquer multiplication to keep the intermediate factors small.
pub fn vanishing_polynomial(field: &Field, roots: &[FieldElement]) -> Polynomial {
    let factors: Vec<Polynomial> = roots
        .iter()
        .map(|r| &field.x() - &field.constant(r.clone()))
        .collect();
    balanced_product(field, &factors)
}

fn balanced_product(field: &Field, factors: &[Polynomial]) -> Polynomial {
    match factors.len() {
        0 => field.constant(field.one()),
        1 => factors[0].clone(),
        n => {
            let (left, right) = factors.split_at(n / 2);
            &balanced_product(field, left) * &balanced_product(field, right)
        }
    }
}

/// The Lagrange basis for the evaluation domain `xs`: `basis[j]` is the
/// polynomial that is 1 at `xs[j]` and 0 at every other `xs[i]`.
///
/// Each basis polynomial is obtained by exactly dividing the global vanishing
/// polynomial by `(X - x_j)` and scaling by the inverse of
/// `prod_{i != j} (x_j - x_i)`.
pub fn lagrange_basis(xs: &[FieldElement]) -> Result<Vec<Polynomial>> {
    let first = xs.first().ok_or(PolycommitError::InterpolationShape {
        points: 0,
        values: 0,
    })?;
    let field = first.field().clone();
    let numerator = vanishing_polynomial(&field, xs);

    let mut basis = Vec::with_capacity(xs.len());
    for (j, x_j) in xs.iter().enumerate() {
        let linear = &field.x() - &field.constant(x_j.clone());
        let quotient = numerator.div_exact(&linear)?;
        let mut denominator = field.one();
        for (i, x_i) in xs.iter().enumerate() {
            if i != j {
                denominator = &denominator * &(x_j - x_i);
            }
        }
        basis.push(quotient.scalar_mul(&denominator.inverse()?));
    }
    Ok(basis)
}

/// Interpolates the unique polynomial of degree `< n` with
/// `p(xs[i]) == ys[i]` for all `i`.
pub fn interpolate(xs: &[FieldElement], ys: &[FieldElement]) -> Result<Polynomial> {
    if xs.is_empty() || xs.len() != ys.len() {
        return Err(PolycommitError::InterpolationShape {
            points: xs.len(),
            values: ys.len(),
        });
    }
    let field = xs[0].field().clone();
    let basis = lagrange_basis(xs)?;
    let mut poly = field.polynomial(Vec::new());
    for (y, ell) in ys.iter().zip(&basis) {
        poly = &poly + &ell.scalar_mul(y);
    }
    Ok(poly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::test_rng;
    use num_bigint::BigUint;

    fn field() -> Field {
        Field::new(BigUint::from(2_305_843_009_213_693_951u64)).unwrap()
    }

    #[test]
    fn vanishing_polynomial_vanishes_exactly_on_its_roots() {
        let f = field();
        let mut rng = test_rng();
        let roots: Vec<_> = (1u64..=8).map(|i| f.element(i)).collect();
        let t = f.vanishing_polynomial(&roots);

        assert_eq!(t.degree(), roots.len() as isize);
        assert!(t.leading_coefficient().unwrap().is_one());
        for r in &roots {
            assert!(t.eval(r).is_zero());
        }
        let off_domain = f.element(1000u64) + f.random_element(&mut rng);
        if !roots.contains(&off_domain) {
            assert!(!t.eval(&off_domain).is_zero());
        }
    }

    #[test]
    fn empty_root_set_gives_the_unit_polynomial() {
        let f = field();
        assert_eq!(f.vanishing_polynomial(&[]), f.constant(f.one()));
    }

    #[test]
    fn basis_polynomials_are_indicator_functions() {
        let f = field();
        let xs: Vec<_> = (0u64..5).map(|i| f.element(3u64).pow(i)).collect();
        let basis = lagrange_basis(&xs).unwrap();
        for (j, ell) in basis.iter().enumerate() {
            for (i, x) in xs.iter().enumerate() {
                let expected = if i == j { f.one() } else { f.zero() };
                assert_eq!(ell.eval(x), expected);
            }
        }
    }

    #[test]
    fn interpolation_round_trip() {
        let f = field();
        let mut rng = test_rng();
        for n in 1usize..=10 {
            let xs: Vec<_> = (0..n as u64).map(|i| f.element(i)).collect();
            let ys: Vec<_> = (0..n).map(|_| f.random_element(&mut rng)).collect();
            let p = interpolate(&xs, &ys).unwrap();
            assert!(p.degree() < n as isize);
            for (x, y) in xs.iter().zip(&ys) {
                assert_eq!(&p.eval(x), y);
            }
        }
    }

    #[test]
    fn single_point_interpolates_to_a_constant() {
        let f = field();
        let p = interpolate(&[f.element(4u64)], &[f.element(9u64)]).unwrap();
        assert_eq!(p, f.constant(f.element(9u64)));
    }

    #[test]
    fn repeated_points_are_rejected() {
        let f = field();
        let xs = vec![f.element(1u64), f.element(2u64), f.element(1u64)];
        let ys = vec![f.element(5u64), f.element(6u64), f.element(7u64)];
        assert_eq!(
            interpolate(&xs, &ys),
            Err(PolycommitError::NonInvertibleElement)
        );
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let f = field();
        assert_eq!(
            interpolate(&[], &[]),
            Err(PolycommitError::InterpolationShape {
                points: 0,
                values: 0
            })
        );
        assert_eq!(
            interpolate(&[f.one()], &[f.one(), f.zero()]),
            Err(PolycommitError::InterpolationShape {
                points: 1,
                values: 2
            })
        );
    }
}
