//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# glayout configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[tiling]
# master_width_fraction = 0.5   # 0.1-0.9, share of width for the master window
# vertical_offset = 80          # 0-400, pixels reserved above tiled windows
# fraction_step = 0.1           # 0.01-0.8, grow/shrink amount per keypress

[keybinds]
# focus_up = "Super+K"
# focus_down = "Super+J"
# switch_master = "Super+Return"
# increase_mw_fact = "Super+L"
# decrease_mw_fact = "Super+H"

[logging]
# level = "info"                # trace, debug, info, warn, error
"##
    .to_string()
}
