use std::time::Instant;

use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Ensemble, NVec3};

/// Helper to build an ensemble of `n` enabled unit-mass bodies
fn make_ensemble(n: usize) -> Ensemble {
    let params = Parameters {
        g: 0.1,
        dt: 0.001,
        eps2: 1e-4,
        trail: 16,
    };

    let mut ens = Ensemble::new(params);
    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        ens.add_body(format!("body-{i}"), true, 1.0, x, NVec3::zeros());
    }

    ens
}

/// Benchmark the direct-sum step for a range of ensemble sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 10; // steps per size (tune as needed)

    println!("N,step_ms");

    for n in ns {
        let mut ens = make_ensemble(n);
        let forces = AccelSet::new().with(NewtonianGravity {
            g: ens.params().g,
            eps2: ens.params().eps2,
        });

        // Warm up
        euler_step(&mut ens, &forces).expect("bench ensemble is non-degenerate");

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_step(&mut ens, &forces).expect("bench ensemble is non-degenerate");
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
