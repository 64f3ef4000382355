//! End-to-end single-multiplication protocol
//!
//! The prover knows a witness `wit` and claims `stmt = a * wit` for a public
//! input `a`. The operation is encoded as polynomials agreeing at a public
//! root `r` (`p_l(r) = a`, `p_r(r) = wit`, `p_o(r) = stmt`) with
//! `p_l * p_r - p_o` divisible by the target `t = X - r`. The verifier checks
//! the shift bindings and the pairing identity
//! `e(com_l, com_r) == e(G*t(s), com_h) * e(com_o, G)`.

use ark_std::test_rng;
use polycommit::{
    Bls381Kzg, Bls381Symmetric, Commitment, CommitmentGroup, FieldElement, Polynomial,
    ProvingKey, Result, TargetGroup, VerificationKey,
};
use rand::Rng;

struct SingleOpProof {
    l: Commitment<Bls381Symmetric>,
    r: Commitment<Bls381Symmetric>,
    o: Commitment<Bls381Symmetric>,
    l_shifted: Commitment<Bls381Symmetric>,
    r_shifted: Commitment<Bls381Symmetric>,
    o_shifted: Commitment<Bls381Symmetric>,
    h: Commitment<Bls381Symmetric>,
}

fn protocol_setup(
    scheme: &Bls381Kzg,
    root: &FieldElement,
    rng: &mut impl Rng,
) -> (
    ProvingKey<Bls381Symmetric>,
    VerificationKey<Bls381Symmetric>,
    Polynomial,
) {
    let field = scheme.field();
    let t = &field.x() - &field.constant(root.clone());
    let (pk, vk, trapdoor) = scheme.setup(2, Some(&t), rng);
    trapdoor.discard();
    (pk, vk, t)
}

fn prove(
    scheme: &Bls381Kzg,
    pk: &ProvingKey<Bls381Symmetric>,
    t: &Polynomial,
    root: &FieldElement,
    a: &FieldElement,
    wit: &FieldElement,
) -> Result<(FieldElement, SingleOpProof)> {
    let field = scheme.field();
    let stmt = a * wit;

    let x = field.x();
    let p_l = x.scalar_mul(&a.divide(root)?);
    let p_r = x.scalar_mul(&wit.divide(root)?);
    let p_o = x.scalar_mul(&stmt.divide(root)?);
    let h = (&(&p_l * &p_r) - &p_o).div_exact(t)?;

    Ok((
        stmt,
        SingleOpProof {
            l: scheme.commit(&pk.basis, &p_l)?,
            r: scheme.commit(&pk.basis, &p_r)?,
            o: scheme.commit(&pk.basis, &p_o)?,
            l_shifted: scheme.commit(&pk.shifted_basis, &p_l)?,
            r_shifted: scheme.commit(&pk.shifted_basis, &p_r)?,
            o_shifted: scheme.commit(&pk.shifted_basis, &p_o)?,
            h: scheme.commit(&pk.basis, &h)?,
        },
    ))
}

fn verify(
    scheme: &Bls381Kzg,
    vk: &VerificationKey<Bls381Symmetric>,
    proof: &SingleOpProof,
) -> bool {
    // Polynomial restriction checks: each commitment pair refers to the same
    // polynomial under both bases.
    if !scheme.verify_shift(vk, &proof.l, &proof.l_shifted)
        || !scheme.verify_shift(vk, &proof.r, &proof.r_shifted)
        || !scheme.verify_shift(vk, &proof.o, &proof.o_shifted)
    {
        return false;
    }

    // Operation check: p_l(s) * p_r(s) == t(s) * h(s) + p_o(s) in the
    // exponent.
    let g = Bls381Symmetric::generator();
    let g_target = vk.g_target.as_ref().expect("setup supplied a target");
    let lhs = Bls381Symmetric::pair(&proof.l.0, &proof.r.0);
    let rhs = Bls381Symmetric::pair(g_target, &proof.h.0)
        .combine(&Bls381Symmetric::pair(&proof.o.0, &g));
    lhs == rhs
}

#[test]
fn honest_transcript_is_accepted() {
    let scheme = Bls381Kzg::new().unwrap();
    let mut rng = test_rng();
    let field = scheme.field();

    let root = field.element(7u64);
    let a = field.element(11_748_457_154_244_067_814u64);
    let (pk, vk, t) = protocol_setup(&scheme, &root, &mut rng);

    let wit = field.random_element(&mut rng);
    let (stmt, proof) = prove(&scheme, &pk, &t, &root, &a, &wit).unwrap();
    assert_eq!(stmt, &a * &wit);
    assert!(verify(&scheme, &vk, &proof));
}

#[test]
fn substituted_commitments_are_rejected() {
    let scheme = Bls381Kzg::new().unwrap();
    let mut rng = test_rng();
    let field = scheme.field();

    let root = field.element(7u64);
    let a = field.element(1123u64);
    let (pk, vk, t) = protocol_setup(&scheme, &root, &mut rng);

    let wit = field.random_element(&mut rng);
    let (_, proof) = prove(&scheme, &pk, &t, &root, &a, &wit).unwrap();
    assert!(verify(&scheme, &vk, &proof));

    // A transcript for an unrelated witness, spliced one component at a time.
    let other_wit = field.random_element(&mut rng);
    let (_, other) = prove(&scheme, &pk, &t, &root, &a, &other_wit).unwrap();

    // Replacing a commitment alone trips the shift binding.
    let mut forged = SingleOpProof {
        l: proof.l.clone(),
        r: other.r.clone(),
        o: proof.o.clone(),
        l_shifted: proof.l_shifted.clone(),
        r_shifted: proof.r_shifted.clone(),
        o_shifted: proof.o_shifted.clone(),
        h: proof.h.clone(),
    };
    assert!(!verify(&scheme, &vk, &forged));

    // Replacing the pair consistently still fails the operation check.
    forged.r_shifted = other.r_shifted.clone();
    assert!(!verify(&scheme, &vk, &forged));

    // A wrong quotient commitment fails the operation check directly.
    let forged_h = SingleOpProof {
        h: other.h.clone(),
        l: proof.l.clone(),
        r: proof.r.clone(),
        o: proof.o.clone(),
        l_shifted: proof.l_shifted.clone(),
        r_shifted: proof.r_shifted.clone(),
        o_shifted: proof.o_shifted.clone(),
    };
    assert!(!verify(&scheme, &vk, &forged_h));
}
