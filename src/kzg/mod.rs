//! KZG polynomial commitment scheme
//!
//! The Kate-Zaverucha-Goldberg scheme lets a prover commit to a polynomial
//! and later convince a verifier of evaluation or root-sharing facts about it
//! without revealing the polynomial itself.
//!
//! Three roles:
//!
//! - **Setup** draws the trapdoor scalars `s` and `alpha`, derives the
//!   proving and verification keys, and discards the trapdoor. The secret
//!   material is returned inside a zeroizing [`Trapdoor`] as a test-only
//!   convenience; retaining it in production breaks the scheme's binding.
//! - The **Prover** derives quotient polynomials with exact division and
//!   turns them into [`Commitment`]s by linear combination against the
//!   proving key.
//! - The **Verifier** checks pairing equations over commitments and the
//!   verification key; it never sees polynomials or secrets.
//!
//! Setup, commit, and prove abort on structural misuse (an oversized
//! polynomial, an inexact division implying a false statement). Verify
//! operations return plain booleans: a false statement is an ordinary
//! negative result, not an error.

pub mod bls12_381_backend;

use std::fmt;
use std::marker::PhantomData;

use num_bigint::BigUint;
use rand::Rng;
use zeroize::Zeroizing;

use crate::errors::{PolycommitError, Result};
use crate::field::{Field, FieldElement};
use crate::polynomial::Polynomial;
use crate::traits::CommitmentGroup;

/// Prover-private key material: the commitment bases derived from the
/// trapdoor at setup.
#[derive(Clone, Debug)]
pub struct ProvingKey<G: CommitmentGroup> {
    /// The primary basis `[G, G*s, G*s^2, ...]`.
    pub basis: Vec<G>,
    /// The alpha-shifted basis `[G*alpha, G*s*alpha, ...]`, enabling shift
    /// (polynomial restriction) proofs.
    pub shifted_basis: Vec<G>,
}

/// Public key material for the verifier.
#[derive(Clone, Debug)]
pub struct VerificationKey<G: CommitmentGroup> {
    /// `G * s`.
    pub g_s: G,
    /// `G * t(s)` for the target polynomial `t` supplied at setup, enabling
    /// root-sharing checks without revealing `s` or factoring `t`.
    pub g_target: Option<G>,
    /// `G * alpha`.
    pub g_alpha: G,
}

/// The trapdoor scalars drawn at setup.
///
/// The byte buffers are wiped on drop. Accessing the scalars is a test-only
/// convenience; production callers must [`discard`](Trapdoor::discard) this
/// value immediately after setup.
pub struct Trapdoor {
    field: Field,
    s: Zeroizing<Vec<u8>>,
    alpha: Zeroizing<Vec<u8>>,
}

impl Trapdoor {
    fn new(field: &Field, s: &FieldElement, alpha: &FieldElement) -> Self {
        Self {
            field: field.clone(),
            s: Zeroizing::new(s.to_bytes_le()),
            alpha: Zeroizing::new(alpha.to_bytes_le()),
        }
    }

    /// The secret evaluation point `s`. Test-only convenience.
    pub fn s(&self) -> FieldElement {
        self.field.element(BigUint::from_bytes_le(self.s.as_slice()))
    }

    /// The shift scalar `alpha`. Test-only convenience.
    pub fn alpha(&self) -> FieldElement {
        self.field
            .element(BigUint::from_bytes_le(self.alpha.as_slice()))
    }

    /// Consumes the trapdoor, zeroizing the secret scalars.
    pub fn discard(self) {}
}

impl fmt::Debug for Trapdoor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trapdoor(<redacted>)")
    }
}

/// A commitment: one group element binding to a polynomial's identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment<G: CommitmentGroup>(pub G);

impl<G: CommitmentGroup> Commitment<G> {
    /// The commitment scaled by a blinding factor. Only sound where every
    /// verification equation applies the relation to each commitment exactly
    /// once, as the equations in this module do.
    pub fn blinded(&self, delta: &FieldElement) -> Commitment<G> {
        Commitment(self.0.scale(delta))
    }
}

/// Proof that a committed polynomial shares all roots of the target
/// polynomial, bound to its shifted twin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootsProof<G: CommitmentGroup> {
    /// Commitment to `f` under the primary basis.
    pub f: Commitment<G>,
    /// Commitment to the quotient `f / t`.
    pub h: Commitment<G>,
    /// Commitment to `f` under the alpha-shifted basis.
    pub f_shifted: Commitment<G>,
}

/// One instance of the KZG scheme over a commitment group `G`.
///
/// Holds the scalar field tied to `G`'s order; constructed once and threaded
/// through every call, so independent instances never share state.
#[derive(Clone, Debug)]
pub struct KzgScheme<G: CommitmentGroup> {
    field: Field,
    _group: PhantomData<G>,
}

impl<G: CommitmentGroup> KzgScheme<G> {
    pub fn new() -> Result<Self> {
        Ok(Self {
            field: Field::new(G::scalar_order())?,
            _group: PhantomData,
        })
    }

    /// The scalar field of this instance.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Trusted setup for polynomials with up to `max_coefficients`
    /// coefficients.
    ///
    /// Draws the secret evaluation point `s` and shift scalar `alpha`,
    /// derives both commitment bases and the verification key, and hands the
    /// secrets back only inside the zeroizing [`Trapdoor`]. Supplying a
    /// `target` polynomial additionally places `G * t(s)` in the
    /// verification key for root-sharing proofs.
    #[tracing::instrument(skip_all, name = "kzg::setup", fields(n = max_coefficients))]
    pub fn setup<R: Rng + ?Sized>(
        &self,
        max_coefficients: usize,
        target: Option<&Polynomial>,
        rng: &mut R,
    ) -> (ProvingKey<G>, VerificationKey<G>, Trapdoor) {
        let s = self.field.random_element(rng);
        let alpha = self.field.random_element(rng);
        let g = G::generator();

        let mut basis = Vec::with_capacity(max_coefficients);
        let mut shifted_basis = Vec::with_capacity(max_coefficients);
        let mut power = self.field.one();
        for _ in 0..max_coefficients {
            basis.push(g.scale(&power));
            shifted_basis.push(g.scale(&(&power * &alpha)));
            power = &power * &s;
        }

        let vk = VerificationKey {
            g_s: g.scale(&s),
            g_target: target.map(|t| g.scale(&t.eval(&s))),
            g_alpha: g.scale(&alpha),
        };
        let trapdoor = Trapdoor::new(&self.field, &s, &alpha);
        (
            ProvingKey {
                basis,
                shifted_basis,
            },
            vk,
            trapdoor,
        )
    }

    /// Commits to `f` against a basis: `sum_i f_i * basis_i`, an evaluation
    /// of `f` in the exponent.
    #[tracing::instrument(skip_all, name = "kzg::commit", fields(coefficients = f.coefficients().len()))]
    pub fn commit(&self, basis: &[G], f: &Polynomial) -> Result<Commitment<G>> {
        let coeffs = f.coefficients();
        if basis.len() < coeffs.len() {
            return Err(PolycommitError::BasisTooSmall {
                basis: basis.len(),
                coefficients: coeffs.len(),
            });
        }
        let mut acc = G::identity();
        for (c, h) in coeffs.iter().zip(basis) {
            acc = acc.add(&h.scale(c));
        }
        Ok(Commitment(acc))
    }

    /// Proves `f(u) = v` by committing to the quotient
    /// `q = (f - v) / (X - u)`.
    ///
    /// Fails with [`PolycommitError::InexactDivision`] when `f(u) != v`; only
    /// call this with true statements.
    #[tracing::instrument(skip_all, name = "kzg::prove_eval")]
    pub fn prove_eval(
        &self,
        pk: &ProvingKey<G>,
        f: &Polynomial,
        u: &FieldElement,
        v: &FieldElement,
    ) -> Result<Commitment<G>> {
        let numerator = f - &self.field.constant(v.clone());
        let denominator = &self.field.x() - &self.field.constant(u.clone());
        let q = numerator.div_exact(&denominator)?;
        self.commit(&pk.basis, &q)
    }

    /// Checks `e(G*s, com_q) == e(com_f - v*G + u*com_q, G)`, which holds
    /// exactly when `f(X) - v = q(X) * (X - u)` as polynomials.
    #[tracing::instrument(skip_all, name = "kzg::verify_eval")]
    pub fn verify_eval(
        &self,
        vk: &VerificationKey<G>,
        com_f: &Commitment<G>,
        u: &FieldElement,
        v: &FieldElement,
        com_q: &Commitment<G>,
    ) -> bool {
        let g = G::generator();
        let lhs = G::pair(&vk.g_s, &com_q.0);
        let opened = com_f.0.add(&g.scale(v).neg()).add(&com_q.0.scale(u));
        let rhs = G::pair(&opened, &g);
        lhs == rhs
    }

    /// Proves that `f` shares all roots of `t` by committing to the exact
    /// quotient `h = f / t`. Fails if `t` does not divide `f`.
    #[tracing::instrument(skip_all, name = "kzg::prove_roots")]
    pub fn prove_roots(
        &self,
        pk: &ProvingKey<G>,
        f: &Polynomial,
        t: &Polynomial,
    ) -> Result<Commitment<G>> {
        let h = f.div_exact(t)?;
        self.commit(&pk.basis, &h)
    }

    /// Checks `e(com_f, G) == e(com_h, G*t(s))`.
    ///
    /// # Panics
    ///
    /// If the verification key was built without a target polynomial; that is
    /// a caller bug, distinct from an honest negative verification.
    #[tracing::instrument(skip_all, name = "kzg::verify_roots")]
    pub fn verify_roots(
        &self,
        vk: &VerificationKey<G>,
        com_f: &Commitment<G>,
        com_h: &Commitment<G>,
    ) -> bool {
        let g_target = vk
            .g_target
            .as_ref()
            .expect("verification key carries no target polynomial commitment");
        G::pair(&com_f.0, &G::generator()) == G::pair(&com_h.0, g_target)
    }

    /// Commits to `f` a second time, under the alpha-shifted basis.
    #[tracing::instrument(skip_all, name = "kzg::prove_shift")]
    pub fn prove_shift(&self, pk: &ProvingKey<G>, f: &Polynomial) -> Result<Commitment<G>> {
        self.commit(&pk.shifted_basis, f)
    }

    /// Checks `e(com_f_shifted, G) == e(com_f, G*alpha)`, binding the two
    /// commitments to the same polynomial and preventing mix-and-match across
    /// proof components.
    #[tracing::instrument(skip_all, name = "kzg::verify_shift")]
    pub fn verify_shift(
        &self,
        vk: &VerificationKey<G>,
        com_f: &Commitment<G>,
        com_f_shifted: &Commitment<G>,
    ) -> bool {
        G::pair(&com_f_shifted.0, &G::generator()) == G::pair(&com_f.0, &vk.g_alpha)
    }

    /// The combined root-sharing proof: commitments to `f`, to `h = f / t`,
    /// and to `f` under the shifted basis, all blinded by one fresh `delta`.
    ///
    /// Every check in [`verify`](Self::verify) applies its relation to each
    /// commitment exactly once, so the shared blinding factor cancels while
    /// unlinking repeated proofs over the same polynomial.
    #[tracing::instrument(skip_all, name = "kzg::prove")]
    pub fn prove<R: Rng + ?Sized>(
        &self,
        pk: &ProvingKey<G>,
        f: &Polynomial,
        t: &Polynomial,
        rng: &mut R,
    ) -> Result<RootsProof<G>> {
        let h = f.div_exact(t)?;
        let com_f = self.commit(&pk.basis, f)?;
        let com_h = self.commit(&pk.basis, &h)?;
        let com_f_shifted = self.commit(&pk.shifted_basis, f)?;

        let delta = self.field.random_element(rng);
        Ok(RootsProof {
            f: com_f.blinded(&delta),
            h: com_h.blinded(&delta),
            f_shifted: com_f_shifted.blinded(&delta),
        })
    }

    /// Verifies a [`RootsProof`]: the root-sharing check and the shift check.
    #[tracing::instrument(skip_all, name = "kzg::verify")]
    pub fn verify(&self, vk: &VerificationKey<G>, proof: &RootsProof<G>) -> bool {
        self.verify_roots(vk, &proof.f, &proof.h)
            && self.verify_shift(vk, &proof.f, &proof.f_shifted)
    }
}
