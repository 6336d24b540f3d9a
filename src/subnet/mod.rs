pub mod cidr;
pub mod descriptor;

pub use cidr::CidrV4;
pub use descriptor::{describe, SubnetDescriptor};
