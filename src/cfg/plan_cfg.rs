use std::fs;

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::planner::request::SubnetRequest;
use crate::planner::vlsm::{allocate, AllocationResult};
use crate::subnet::cidr::CidrV4;

/// A VLSM plan as stored on disk: the major network block and the
/// named host-count requests to carve out of it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanCfg {
    pub major: CidrV4,
    pub requests: Vec<SubnetRequest>,
}

impl PlanCfg {
    /// Runs the allocator over the configured plan.
    pub fn allocate(&self) -> Result<AllocationResult, Error> {
        allocate(self.major, &self.requests)
    }
}

pub fn load_plan_cfg(path: &str) -> Result<PlanCfg, Error> {
    let raw = fs::read_to_string(path).map_err(|err| {
        error!("failed to read plan file {}: {}", path, err);
        Error::Cfg(err.to_string())
    })?;
    serde_yaml::from_str(&raw).map_err(|err| {
        error!("failed to parse plan file {}: {}", path, err);
        Error::Cfg(err.to_string())
    })
}

pub fn save_plan_cfg(path: &str, cfg: &PlanCfg) -> Result<(), Error> {
    let data = serde_yaml::to_string(cfg).map_err(|err| {
        error!("failed to serialize plan for {}: {}", path, err);
        Error::Cfg(err.to_string())
    })?;
    fs::write(path, data).map_err(|err| {
        error!("failed to write plan file {}: {}", path, err);
        Error::Cfg(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    #[test]
    fn test_load_plan_cfg() {
        let plan = load_plan_cfg("tests/plan.yml").unwrap();

        assert!(plan.major.network() == Ipv4Addr::new(192, 168, 0, 0));
        assert!(plan.major.prefix() == 24);
        assert_eq!(plan.requests.len(), 4);
        assert_eq!(plan.requests[0], SubnetRequest::new("engineering", 55));
        assert_eq!(plan.requests[3], SubnetRequest::new("uplink", 2));
    }

    #[test]
    fn test_loaded_plan_allocates() {
        let plan = load_plan_cfg("tests/plan.yml").unwrap();
        let result = plan.allocate().unwrap();
        assert_eq!(result.subnets().len(), 4);
        assert!(result.subnets()[0].subnet().prefix() == 26);
    }

    #[test]
    fn test_save_round_trip() {
        let plan = load_plan_cfg("tests/plan.yml").unwrap();
        let path = std::env::temp_dir().join("ipcalc-plan-round-trip.yml");
        let path = path.to_str().unwrap();

        save_plan_cfg(path, &plan).unwrap();
        let reloaded = load_plan_cfg(path).unwrap();
        assert_eq!(reloaded, plan);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_plan_cfg("tests/does-not-exist.yml"),
            Err(Error::Cfg(_))
        ));
    }
}
