use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::info;
use virmac::{MacAddress, MacPrefix};

pub fn handle(prefix: MacPrefix, count: usize, seed: Option<u64>) -> Result<()> {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => {
            info!("Using seeded generator (seed {})", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    info!("Generating {} address(es) with prefix {}", count, prefix);
    for mac in generate(prefix, count, &mut *rng) {
        println!("{}", mac);
    }

    Ok(())
}

pub fn generate<R: Rng + ?Sized>(prefix: MacPrefix, count: usize, rng: &mut R) -> Vec<MacAddress> {
    (0..count)
        .map(|_| MacAddress::generate(prefix, &mut *rng))
        .collect()
}
