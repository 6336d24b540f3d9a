pub mod plan_cfg;

pub use plan_cfg::{load_plan_cfg, save_plan_cfg, PlanCfg};
