use sawplan::io::svg::SvgDrawOptions;
use sawplan::pack::Strategy;
use serde::{Deserialize, Serialize};

/// Configuration for the gsf CLI
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GsfConfig {
    /// Strategy to pack with. If undefined, all strategies are computed and compared
    #[serde(default)]
    pub strategy: Option<Strategy>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for GsfConfig {
    fn default() -> Self {
        Self {
            strategy: None,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
