//! # polycommit: polynomial commitments over pairing-friendly curves
//!
//! Finite-field and polynomial algebra combined with the KZG polynomial
//! commitment scheme: a prover commits to a polynomial and later proves
//! evaluation or root-sharing facts about it without revealing the
//! polynomial, using pairing equation checks "in the exponent".
//!
//! ## Structure
//!
//! - `field`: modular arithmetic over a fixed prime order
//! - `polynomial`: dense univariate polynomials; arithmetic, exact division,
//!   Lagrange interpolation
//! - `traits`: the commitment group capability the core consumes
//! - `kzg`: setup/commit/prove/verify protocol core, plus the BLS12-381
//!   symmetric backend
//!
//! ## Architecture
//!
//! The scheme is generic over the pairing backend:
//! ```ignore
//! let scheme = KzgScheme::<Bls381Symmetric>::new()?;
//! let (pk, vk, trapdoor) = scheme.setup(32, Some(&t), &mut rng);
//! trapdoor.discard();
//! ```
//! One scheme instance owns its scalar field; independent instances never
//! share state.

pub mod errors;
pub mod field;
pub mod kzg;
pub mod polynomial;
pub mod traits;

// Re-exports
pub use errors::{PolycommitError, Result};
pub use field::{Field, FieldElement};
pub use kzg::{Commitment, KzgScheme, ProvingKey, RootsProof, Trapdoor, VerificationKey};
pub use polynomial::{interpolate, lagrange_basis, vanishing_polynomial, Polynomial};
pub use traits::{CommitmentGroup, TargetGroup};

// =============================================================================
// Backend type aliases - Public API
// =============================================================================

pub use kzg::bls12_381_backend::{Bls381Symmetric, Bls381Target};

/// The KZG scheme over the symmetric BLS12-381 adaptor.
pub type Bls381Kzg = KzgScheme<Bls381Symmetric>;
