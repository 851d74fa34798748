use micromath::F32Ext;

/// Above this magnitude of x, y follows the outer branch of the curve.
const OUTER_BRANCH_X: f32 = 0.812;
/// Squared radius of the curve, i.e 1.3^2.
const RADIUS_SQ: f32 = 1.69;
/// Headroom of the inner branch, keeping y pinned at 1 near the center.
const INNER_HEADROOM: f32 = 1.05;

/// The range of spectrum bins a whistle is expected to sweep, for a given
/// frame resolution. Bins are log-frequency indices, not Hz.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequencyBand {
    pub min_bin: f32,
    pub max_bin: f32,
}

impl FrequencyBand {
    /// Returns the band for one of the supported resolutions (256, 512 or
    /// 1024 bins), or `None` for any other resolution.
    pub fn for_resolution(resolution: usize) -> Option<Self> {
        let (min_bin, max_bin) = match resolution {
            256 => (90.0, 130.0),
            512 => (215.0, 270.0),
            1024 => (500.0, 600.0),
            _ => return None,
        };
        Some(FrequencyBand { min_bin, max_bin })
    }

    pub fn span(&self) -> f32 {
        self.max_bin - self.min_bin
    }
}

/// Maps a locked whistle bin to a 2D stick position.
///
/// x sweeps linearly from -1 at the bottom of the [FrequencyBand] to 1 at the
/// top. y stays at 1 around the center and bends down to 0 towards both ends
/// of the band, so the stick traces an arc rather than a straight line.
/// Both components are clamped, x to [-1, 1] and y to [0, 1].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisMapper {
    band: FrequencyBand,
}

impl AxisMapper {
    pub fn new(band: FrequencyBand) -> Self {
        AxisMapper { band }
    }

    /// Returns a mapper for one of the supported resolutions.
    pub fn for_resolution(resolution: usize) -> Option<Self> {
        FrequencyBand::for_resolution(resolution).map(AxisMapper::new)
    }

    pub fn band(&self) -> FrequencyBand {
        self.band
    }

    /// Maps `bin` to an `[x, y]` stick position.
    pub fn map(&self, bin: usize) -> [f32; 2] {
        let span = self.band.span();
        let x = if span > 0.0 {
            let current = (bin as f32) - self.band.min_bin;
            (2.0 * current / span - 1.0).clamp(-1.0, 1.0)
        } else {
            0.0
        };
        [x, arc_height(x)]
    }

    /// The stick position reported once a whistle is released.
    pub fn rest() -> [f32; 2] {
        [0.0, 0.0]
    }
}

/// The y component of the stick for a normalized x in [-1, 1].
pub fn arc_height(x: f32) -> f32 {
    let x_sq = x * x;
    let y = if F32Ext::abs(x) > OUTER_BRANCH_X {
        sqrt(RADIUS_SQ * (1.0 - f32::min(x_sq, 1.0)))
    } else {
        sqrt(INNER_HEADROOM - f32::min(x_sq / RADIUS_SQ, INNER_HEADROOM))
    };
    y.clamp(0.0, 1.0)
}

/// micromath's square root is a bit-level estimate that is off by a few
/// percent and never returns exactly 0. Two Newton steps bring it within
/// f32 precision for the [0, 1.69] range used here.
fn sqrt(value: f32) -> f32 {
    if value <= 0.0 {
        return 0.0;
    }
    let mut estimate = F32Ext::sqrt(value);
    for _ in 0..2 {
        estimate = 0.5 * (estimate + value / estimate);
    }
    estimate
}
