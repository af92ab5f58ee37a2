// SPDX-License-Identifier: MPL-2.0
pub mod positioned;

pub use positioned::{positioned, Positioned};
