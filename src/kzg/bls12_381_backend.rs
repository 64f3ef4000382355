//! Symmetric adaptor for the BLS12-381 curve
//!
//! The scheme's pairing equations place the same commitment on either input
//! side of `e`, so each group value carries both its G1 and its G2
//! representation and the two are kept in lockstep by every operation.

use ark_bls12_381::{Bls12_381, Fr, G1Projective, G2Projective};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::PrimeGroup;
use ark_ff::{BigInteger, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use num_bigint::BigUint;

use crate::field::FieldElement;
use crate::traits::{CommitmentGroup, TargetGroup};

/// A commitment group element represented in G1 and G2 simultaneously.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Bls381Symmetric {
    pub g1: G1Projective,
    pub g2: G2Projective,
}

impl Bls381Symmetric {
    /// Whether the two representations encode the same scalar multiple of
    /// the generator: `e(G1, g2) == e(g1, G2)`.
    pub fn is_consistent(&self) -> bool {
        Bls12_381::pairing(G1Projective::generator(), self.g2)
            == Bls12_381::pairing(self.g1, G2Projective::generator())
    }
}

/// A value in the pairing target group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Bls381Target(pub PairingOutput<Bls12_381>);

impl TargetGroup for Bls381Target {
    fn combine(&self, rhs: &Self) -> Self {
        Bls381Target(self.0 + rhs.0)
    }
}

impl CommitmentGroup for Bls381Symmetric {
    type Target = Bls381Target;

    fn scalar_order() -> BigUint {
        BigUint::from_bytes_le(&Fr::MODULUS.to_bytes_le())
    }

    fn generator() -> Self {
        Self {
            g1: G1Projective::generator(),
            g2: G2Projective::generator(),
        }
    }

    fn identity() -> Self {
        Self {
            g1: G1Projective::zero(),
            g2: G2Projective::zero(),
        }
    }

    fn add(&self, rhs: &Self) -> Self {
        Self {
            g1: self.g1 + rhs.g1,
            g2: self.g2 + rhs.g2,
        }
    }

    fn neg(&self) -> Self {
        Self {
            g1: -self.g1,
            g2: -self.g2,
        }
    }

    fn scale(&self, scalar: &FieldElement) -> Self {
        let k = Fr::from_le_bytes_mod_order(&scalar.to_bytes_le());
        Self {
            g1: self.g1 * k,
            g2: self.g2 * k,
        }
    }

    fn pair(lhs: &Self, rhs: &Self) -> Bls381Target {
        Bls381Target(Bls12_381::pairing(lhs.g1, rhs.g2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use ark_std::test_rng;

    fn scalar_field() -> Field {
        Field::new(Bls381Symmetric::scalar_order()).unwrap()
    }

    #[test]
    fn scalar_order_matches_the_curve() {
        // The BLS12-381 scalar field modulus.
        let expected: BigUint = BigUint::parse_bytes(
            b"52435875175126190479447740508185965837690552500527637822603658699938581184513",
            10,
        )
        .unwrap();
        assert_eq!(Bls381Symmetric::scalar_order(), expected);
    }

    #[test]
    fn group_laws() {
        let field = scalar_field();
        let mut rng = test_rng();
        let g = Bls381Symmetric::generator();
        let a = g.scale(&field.random_element(&mut rng));
        let b = g.scale(&field.random_element(&mut rng));

        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.add(&Bls381Symmetric::identity()), a);
        assert_eq!(a.add(&a.neg()), Bls381Symmetric::identity());
    }

    #[test]
    fn scalar_multiplication_is_linear() {
        let field = scalar_field();
        let mut rng = test_rng();
        let g = Bls381Symmetric::generator();
        let a = field.random_element(&mut rng);
        let b = field.random_element(&mut rng);

        assert_eq!(g.scale(&(&a + &b)), g.scale(&a).add(&g.scale(&b)));
        assert_eq!(g.scale(&field.zero()), Bls381Symmetric::identity());
        assert_eq!(g.scale(&field.one()), g);
    }

    #[test]
    fn pairing_is_bilinear() {
        let field = scalar_field();
        let mut rng = test_rng();
        let g = Bls381Symmetric::generator();
        let a = field.random_element(&mut rng);
        let b = field.random_element(&mut rng);

        // e(aG, bG) = e(G, abG) = e(abG, G)
        let left = Bls381Symmetric::pair(&g.scale(&a), &g.scale(&b));
        let ab = &a * &b;
        assert_eq!(left, Bls381Symmetric::pair(&g, &g.scale(&ab)));
        assert_eq!(left, Bls381Symmetric::pair(&g.scale(&ab), &g));
    }

    #[test]
    fn target_combine_accumulates_pairings() {
        let field = scalar_field();
        let mut rng = test_rng();
        let g = Bls381Symmetric::generator();
        let a = field.random_element(&mut rng);
        let b = field.random_element(&mut rng);

        // e(G,G)^a * e(G,G)^b = e(G,G)^(a+b)
        let lhs = Bls381Symmetric::pair(&g.scale(&a), &g)
            .combine(&Bls381Symmetric::pair(&g.scale(&b), &g));
        let rhs = Bls381Symmetric::pair(&g.scale(&(&a + &b)), &g);
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn scaled_generators_stay_consistent() {
        let field = scalar_field();
        let mut rng = test_rng();
        let g = Bls381Symmetric::generator();
        assert!(g.is_consistent());
        assert!(Bls381Symmetric::identity().is_consistent());

        let a = g.scale(&field.random_element(&mut rng));
        let b = g.scale(&field.random_element(&mut rng));
        assert!(a.is_consistent());
        assert!(a.add(&b).is_consistent());
        assert!(a.neg().is_consistent());

        // Mixing representations of different scalars breaks consistency.
        let mixed = Bls381Symmetric { g1: a.g1, g2: b.g2 };
        assert!(!mixed.is_consistent());
    }
}
