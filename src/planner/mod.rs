pub mod request;
pub mod vlsm;

pub use request::{required_prefix, SubnetRequest};
pub use vlsm::{allocate, AllocationResult, PlannedSubnet, UnallocatedBlock};
