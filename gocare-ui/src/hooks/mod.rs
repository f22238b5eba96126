// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod use_location_hash;

pub use use_location_hash::use_location_hash;
