//! Configuration loaded from `.wqindex.toml`.
//!
//! The file is searched for in the working directory and its ancestors.
//! Every section is optional; an absent file means built-in standards,
//! built-in classification scales and µg/L input.

mod core;
mod loader;

pub use self::core::{
    InputConfig, OutputConfig, ParallelConfig, StandardOverride, StandardsConfig, WqConfig,
};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Contents written by `wqindex init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# wqindex configuration

[input]
# Unit of concentrations in input tables: mg/L, ppm, µg/L (ug/L) or ppb
unit = "µg/L"

[standards]
include_defaults = true

# Site specific limits in ppb. Unset fields keep the built-in value.
# [standards.overrides.Pb]
# mac = 10.0
#
# [standards.overrides.U]
# name = "Uranium"
# category = "heavy_metal"
# permissible = 30.0

# Replace a built-in classification scale. Bounds are inclusive and the
# lower range wins where two ranges touch.
# [[classification.hpi]]
# max = 100.0
# label = "Low pollution"
# severity = 1
#
# [[classification.hpi]]
# min = 100.0
# label = "High pollution"
# severity = 3

[output]
default_format = "terminal"
detailed = false

[parallel]
jobs = 0
"#;
