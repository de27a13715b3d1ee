//! Master/stack layout parameters.

/// Smallest share of the work-area width the master column may take.
pub const MIN_MASTER_FRACTION: f64 = 0.1;
/// Largest share of the work-area width the master column may take.
pub const MAX_MASTER_FRACTION: f64 = 0.9;

/// Computes master/stack rectangles for an ordered window list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasterStackLayout {
    /// Share of the width given to the master column, always within
    /// `[MIN_MASTER_FRACTION, MAX_MASTER_FRACTION]`.
    pub(crate) master_width_fraction: f64,
    /// Pixels reserved above every tiled window.
    pub vertical_offset: u32,
}

impl MasterStackLayout {
    pub fn new(master_width_fraction: f64, vertical_offset: u32) -> Self {
        Self {
            master_width_fraction: clamp_fraction(master_width_fraction),
            vertical_offset,
        }
    }

    pub fn master_width_fraction(&self) -> f64 {
        self.master_width_fraction
    }

    /// Set the master fraction, clamped into the valid range.
    pub fn set_master_width_fraction(&mut self, fraction: f64) {
        self.master_width_fraction = clamp_fraction(fraction);
    }
}

impl Default for MasterStackLayout {
    fn default() -> Self {
        Self {
            master_width_fraction: 0.5,
            vertical_offset: 80,
        }
    }
}

/// NaN collapses to the lower bound.
pub(crate) fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        return MIN_MASTER_FRACTION;
    }
    fraction.clamp(MIN_MASTER_FRACTION, MAX_MASTER_FRACTION)
}
