//! Single-multiplication protocol walkthrough
//!
//! A prover convinces a verifier that it knows a witness `wit` with
//! `stmt = a * wit` for a public input `a`, without revealing `wit` beyond
//! the statement itself. Run with:
//!
//! ```text
//! cargo run --example single_multiplication
//! ```

use ark_serialize::CanonicalSerialize;
use polycommit::{Bls381Kzg, Bls381Symmetric, Commitment, CommitmentGroup, TargetGroup};
use rand::thread_rng;

fn short_hex(label: &str, commitment: &Commitment<Bls381Symmetric>) {
    let mut bytes = Vec::new();
    commitment
        .0
        .serialize_compressed(&mut bytes)
        .expect("serialization into a Vec cannot fail");
    let hex: String = bytes[..16].iter().map(|b| format!("{:02x}", b)).collect();
    println!("  {}: {}... ({} bytes)", label, hex, bytes.len());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scheme = Bls381Kzg::new()?;
    let field = scheme.field();
    let mut rng = thread_rng();

    println!("Field order: {}", field.order());

    // Fixed public configuration: the root encoding the operation, and the
    // public left operand.
    let root = field.element(7u64);
    let a = field.element(11_748_457_154_244_067_814u64);

    println!("Setting up...");
    let t = &field.x() - &field.constant(root.clone());
    let (pk, vk, trapdoor) = scheme.setup(2, Some(&t), &mut rng);
    trapdoor.discard();

    // Prover: sample the witness, derive the statement, encode the operation
    // `l * r = o` as polynomials agreeing at the public root.
    let wit = field.random_element(&mut rng);
    let stmt = &a * &wit;
    println!("stmt: {}", stmt);

    let x = field.x();
    let p_l = x.scalar_mul(&a.divide(&root)?);
    let p_r = x.scalar_mul(&wit.divide(&root)?);
    let p_o = x.scalar_mul(&stmt.divide(&root)?);
    let h = (&(&p_l * &p_r) - &p_o).div_exact(&t)?;

    println!("Proving...");
    let com_l = scheme.commit(&pk.basis, &p_l)?;
    let com_r = scheme.commit(&pk.basis, &p_r)?;
    let com_o = scheme.commit(&pk.basis, &p_o)?;
    let com_l2 = scheme.commit(&pk.shifted_basis, &p_l)?;
    let com_r2 = scheme.commit(&pk.shifted_basis, &p_r)?;
    let com_o2 = scheme.commit(&pk.shifted_basis, &p_o)?;
    let com_h = scheme.commit(&pk.basis, &h)?;
    short_hex("com_l", &com_l);
    short_hex("com_r", &com_r);
    short_hex("com_o", &com_o);
    short_hex("com_h", &com_h);

    println!("Verifying...");
    let restricted = scheme.verify_shift(&vk, &com_l, &com_l2)
        && scheme.verify_shift(&vk, &com_r, &com_r2)
        && scheme.verify_shift(&vk, &com_o, &com_o2);
    assert!(restricted, "polynomial restriction check failed");

    let g = Bls381Symmetric::generator();
    let g_target = vk.g_target.as_ref().expect("setup supplied a target");
    let lhs = Bls381Symmetric::pair(&com_l.0, &com_r.0);
    let rhs = Bls381Symmetric::pair(g_target, &com_h.0)
        .combine(&Bls381Symmetric::pair(&com_o.0, &g));
    assert!(lhs == rhs, "operation check failed");

    println!("Success!");
    Ok(())
}
