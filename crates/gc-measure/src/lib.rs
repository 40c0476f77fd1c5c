//! `gc-measure` — density sampling over polygonal measurement regions.
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`history`] | `DensitySample`, append-only `DensityHistory`    |
//! | [`sampler`] | `DensitySampler` — count ÷ area per region       |

pub mod history;
pub mod sampler;


pub use history::{DensityHistory, DensitySample};
pub use sampler::DensitySampler;
