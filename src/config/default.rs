// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::RulesConfig;

/// Get the default configuration.
pub fn default_config() -> RulesConfig {
    RulesConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# tlint rule options
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# ZT1 (title-doesn't-end-with-dot) has no options.

# ZT2: titles look like "area[/subarea]: Summary."
[rules.area-formatting]
# Area tokens allowed to be other than lower case.
# Also accepted as a comma-separated string: exclusions = "WIP, RFC"
exclusions = ["WIP"]
"#
}
