//! End-to-end tests of the pairing driver: bilinearity, non-degeneracy
//! and the order-`r` property spec out the optimal ate pairing, run
//! against the actual curve generators rather than synthetic field
//! elements.

use bn_pairing::curve::{G1Affine, G2Affine};
use bn_pairing::error::PairingError;
use bn_pairing::fp12::Fp12;
use bn_pairing::params::R_ORDER;
use bn_pairing::{map, multi_map};
use field_core::BigInteger256;

fn scalar(k: u64) -> BigInteger256 {
    BigInteger256::new([k, 0, 0, 0])
}

fn pow(base: Fp12, exp: &BigInteger256) -> Fp12 {
    let mut acc = Fp12::one();
    for i in (0..exp.num_bits()).rev() {
        acc = acc.square();
        if exp.get_bit(i as usize) {
            acc = acc * base;
        }
    }
    acc
}

#[test]
fn pairing_of_infinity_is_one() {
    let q = G2Affine::generator();
    let p = G1Affine::generator();
    assert_eq!(map(&G1Affine::identity(), &q).unwrap(), Fp12::one());
    assert_eq!(map(&p, &G2Affine::identity()).unwrap(), Fp12::one());
}

#[test]
fn pairing_is_non_degenerate() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let e = map(&p, &q).unwrap();
    assert_ne!(e, Fp12::one());
}

#[test]
fn pairing_output_has_order_r() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let e = map(&p, &q).unwrap();
    assert_eq!(pow(e, &R_ORDER), Fp12::one());
}

#[test]
fn doubling_first_argument_squares_the_pairing() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let e = map(&p, &q).unwrap();
    let e2 = map(&p.double(), &q).unwrap();
    assert_eq!(e2, e.square());
}

#[test]
fn doubling_second_argument_squares_the_pairing() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let e = map(&p, &q).unwrap();
    let e2 = map(&p, &q.double()).unwrap();
    assert_eq!(e2, e.square());
}

#[test]
fn pairing_is_bilinear_in_both_arguments() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let a = 3u64;
    let b = 5u64;

    let ap = p.mul_scalar(&scalar(a));
    let bq = q.mul_scalar(&scalar(b));

    let lhs = map(&ap, &bq).unwrap();
    let rhs = pow(map(&p, &q).unwrap(), &scalar(a * b));
    assert_eq!(lhs, rhs);
}

#[test]
fn multi_map_matches_product_of_individual_pairings() {
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let p2 = p.mul_scalar(&scalar(2));
    let q3 = q.mul_scalar(&scalar(3));

    let expected = map(&p, &q).unwrap() * map(&p2, &q3).unwrap();
    let actual = multi_map(&[(p, q), (p2, q3)]).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn multi_map_of_no_finite_pairs_is_one() {
    let q = G2Affine::generator();
    let p = G1Affine::generator();
    let out = multi_map(&[(G1Affine::identity(), q), (p, G2Affine::identity())]).unwrap();
    assert_eq!(out, Fp12::one());
}

#[test]
fn map_emits_tracing_spans() {
    let subscriber = tracing_subscriber::fmt().with_test_writer().finish();
    let _guard = tracing::subscriber::set_default(subscriber);
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    assert!(map(&p, &q).is_ok());
}

#[test]
fn map_rejects_a_point_off_the_curve() {
    let mut p = G1Affine::generator();
    p.y = p.y + field_core::Fp256::<bn_pairing::params::FqParameters>::one();
    let q = G2Affine::generator();
    assert_eq!(map(&p, &q).unwrap_err(), PairingError::PointNotOnCurve);
}
