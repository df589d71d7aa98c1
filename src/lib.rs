// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed-point currency conversion with static stablecoin, fiat, and
//! network metadata.
//!
//! The crate is a pure, synchronous library: a static registry maps
//! currency codes to their decimals and display metadata, and a small codec
//! converts exactly between decimal-string display amounts and integer
//! smallest units (cents, micro-units). There is no I/O, no shared mutable
//! state, and no floating point on any conversion path, so every function
//! is safe to call from any number of threads.
//!
//! # Examples
//!
//! ```
//! use centavo::{from_smallest_units, parse_amount};
//!
//! let units = parse_amount("$10.50", "USD")?;
//! assert_eq!(units.to_string(), "1050");
//! assert_eq!(from_smallest_units(units, "USD")?, "10.50");
//! # Ok::<(), centavo::CentavoError>(())
//! ```

mod codec;
mod errors;
mod network;
mod registry;
mod types;

pub use codec::*;
pub use errors::*;
pub use network::*;
pub use registry::*;
pub use types::*;
