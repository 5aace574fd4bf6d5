use crate::scenario::Scenario;
use serde::Serialize;

/// Small-scale fading layered on top of a scenario.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Fading<'a> {
    pub model: FadingModel,
    pub scenario: &'a Scenario,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FadingModel {
    /// TR 38.901 clustered delay line fading.
    ThreeGpp,
}

impl<'a> Fading<'a> {
    pub fn three_gpp(scenario: &'a Scenario) -> Self {
        Self {
            model: FadingModel::ThreeGpp,
            scenario,
        }
    }
}
