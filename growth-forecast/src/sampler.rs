use rand::Rng;
use rand_distr::StandardNormal;

use growth_core::types::Posterior;

/// Draw `count` independent theta samples from a posterior.
pub fn draw_posterior<R: Rng + ?Sized>(
    posterior: Posterior,
    count: usize,
    rng: &mut R,
) -> Vec<f64> {
    let std = posterior.std();
    (0..count)
        .map(|_| posterior.mean + std * rng.sample::<f64, _>(StandardNormal))
        .collect()
}

/// Add one month of random-walk process noise to every sample in place.
pub fn add_process_noise<R: Rng + ?Sized>(samples: &mut [f64], process_std: f64, rng: &mut R) {
    for s in samples.iter_mut() {
        *s += process_std * rng.sample::<f64, _>(StandardNormal);
    }
}
