use crate::config::GsfConfig;
use sawplan::io::ext_repr::{ExtInstance, ExtPlan};
use serde::{Deserialize, Serialize};

/// Content of the solution file: the job it was computed from, every computed plan
/// and the config that was used.
#[derive(Serialize, Deserialize, Clone)]
pub struct Output {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub plans: Vec<ExtPlan>,
    pub config: GsfConfig,
}
