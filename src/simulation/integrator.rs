//! Fixed-step explicit Euler integrator for the ensemble
//!
//! One step is two passes: accumulate accelerations from the previous
//! step's positions into a scratch buffer, then kick velocities and drift
//! positions. Nothing is mutated until the force pass has succeeded, so a
//! degenerate-geometry error leaves the ensemble at its last good state

use crate::error::SimError;
use super::forces::AccelSet;
use super::states::{Ensemble, NVec3};

/// Advance the ensemble by one fixed time step
///
/// Enabled bodies get a unit-step velocity kick (`vel += a`) followed by a
/// position drift scaled by `dt`; the new position is appended to the
/// trail, evicting the oldest entry at capacity. Disabled bodies are
/// visited but skipped in both passes and keep their trail frozen
pub fn euler_step(ens: &mut Ensemble, forces: &AccelSet) -> Result<(), SimError> {
    let n = ens.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    // a_n from x_n; read-only, so an error here aborts the whole step
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(&*ens, &mut acc)?;

    // Kick: v_n+1 = v_n + a_n
    for (b, a) in ens.bodies_mut().iter_mut().zip(acc.iter()) {
        if b.enabled {
            b.vel += *a;
        }
    }

    // Drift: x_n+1 = x_n + dt * v_n+1, appended to the trail
    let dt = ens.params().dt;
    for b in ens.bodies_mut().iter_mut() {
        if !b.enabled {
            continue;
        }

        let new_pos = b.trail.latest() + b.vel * dt;
        b.trail.push(new_pos);
    }

    // Increment the ensemble time by one full step
    ens.advance_clock();

    Ok(())
}
