//! Tiling parameter validation (master fraction, step, panel offset).

use crate::schema::GlayoutConfig;

use super::helpers::check_range;

pub(crate) fn validate_tiling(errors: &mut Vec<String>, config: &GlayoutConfig) {
    let tiling = &config.tiling;
    check_range(
        errors,
        "tiling.master_width_fraction",
        tiling.master_width_fraction,
        0.1..=0.9,
    );
    check_range(errors, "tiling.fraction_step", tiling.fraction_step, 0.01..=0.8);
    check_range(errors, "tiling.vertical_offset", tiling.vertical_offset, 0..=400);
}
