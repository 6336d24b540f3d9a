//! IPv4 subnetting and VLSM planning.
//!
//! Pure, synchronous address arithmetic layered bottom-up:
//! dotted-quad codec and address classification ([`addr`]),
//! prefix/mask/wildcard algebra ([`mask`]), CIDR blocks and
//! subnet descriptors ([`subnet`]), and the greedy largest-first
//! VLSM allocator ([`planner`]). Plans can be loaded from and
//! saved to YAML files through [`cfg`].
//!
//! Every failure is a typed [`Error`] value; nothing here does
//! network I/O or holds state between calls.

pub mod addr;
pub mod cfg;
pub mod error;
pub mod mask;
pub mod planner;
pub mod subnet;

pub use error::Error;
