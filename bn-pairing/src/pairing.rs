//! `map`: the optimal ate pairing driver, wiring the Miller loop and
//! final exponentiation behind a single validated entry point.

use crate::curve::{G1Affine, G2Affine};
use crate::error::PairingError;
use crate::final_exp::final_exponentiation;
use crate::fp12::Fp12;
use crate::miller::miller_loop;
use bench_utils::{timer_end, timer_start};

/// Computes the optimal ate pairing `e: G1 x G2 -> GT`.
///
/// Returns `Fp12::one()` if either input is the point at infinity,
/// matching the bilinear convention `e(O, Q) = e(P, O) = 1`.
#[tracing::instrument(target = "bn_pairing", skip_all)]
pub fn map(p: &G1Affine, q: &G2Affine) -> Result<Fp12, PairingError> {
    if !p.is_on_curve() || !q.is_on_curve() {
        return Err(PairingError::PointNotOnCurve);
    }
    if !p.is_in_subgroup() || !q.is_in_subgroup() {
        return Err(PairingError::PointNotInSubgroup);
    }
    if p.infinity || q.infinity {
        tracing::debug!("pairing input is the point at infinity, short-circuiting to 1");
        return Ok(Fp12::one());
    }

    let timer = timer_start!(|| "optimal ate pairing");
    let miller_timer = timer_start!(|| "Miller loop");
    let f = miller_loop(p, q);
    timer_end!(miller_timer);

    let exp_timer = timer_start!(|| "final exponentiation");
    let out = final_exponentiation(&f);
    timer_end!(exp_timer);
    timer_end!(timer);

    Ok(out)
}

/// `prod_i e(P_i, Q_i)`, computed by accumulating all Miller loops
/// before running a single final exponentiation — the final
/// exponentiation's cost does not scale with the number of pairs.
#[tracing::instrument(target = "bn_pairing", skip_all, fields(pairs = pairs.len()))]
pub fn multi_map(pairs: &[(G1Affine, G2Affine)]) -> Result<Fp12, PairingError> {
    let mut acc = Fp12::one();
    let mut any_finite = false;
    for (p, q) in pairs {
        if !p.is_on_curve() || !q.is_on_curve() {
            return Err(PairingError::PointNotOnCurve);
        }
        if !p.is_in_subgroup() || !q.is_in_subgroup() {
            return Err(PairingError::PointNotInSubgroup);
        }
        if p.infinity || q.infinity {
            continue;
        }
        any_finite = true;
        acc = acc * miller_loop(p, q);
    }
    if !any_finite {
        return Ok(Fp12::one());
    }
    Ok(final_exponentiation(&acc))
}
