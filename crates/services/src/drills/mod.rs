//! Random question generators, one module per drill.
//!
//! Every generator takes `&mut impl Rng` so tests can drive it with a seeded
//! `StdRng`; the drill session supplies `rand::rng()`. Generators use bounded
//! sampling with rejection: a draw whose derived scale positions leave the
//! table is discarded and retried.

pub mod exposure;
pub mod flash;
pub mod hyperfocal;
pub mod inverse_square;
