/// Unit used to scale file sizes in the long listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockSize {
    #[default]
    None,
    K,
    M,
    G,
    T,
}

impl BlockSize {
    /// Power of the base this unit divides by.
    fn exponent(self) -> i32 {
        match self {
            Self::None => 0,
            Self::K => 1,
            Self::M => 2,
            Self::G => 3,
            Self::T => 4,
        }
    }

    /// Suffix printed right after a scaled size (empty for raw bytes).
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::K => "K",
            Self::M => "M",
            Self::G => "G",
            Self::T => "T",
        }
    }
}

/// Scales `bytes` to the requested unit, rounding to the nearest integer.
///
/// The base is 1024 unless `kibibytes` is set, in which case it is 1000.
/// The result never drops below 1, so a small (or empty) file never shows as `0`.
pub fn format_size(bytes: u64, block_size: BlockSize, kibibytes: bool) -> u64 {
    let base: f64 = if kibibytes { 1000.0 } else { 1024.0 };
    let factor = base.powi(-block_size.exponent());

    let scaled = (bytes as f64 * factor).round() as u64;
    scaled.max(1)
}

/// Number of decimal digits needed to print `n`.
#[inline]
pub fn digit_width(n: u64) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Formats a Unix file mode into a human-readable string (e.g., "rwxr-xr-x").
pub fn format_permissions(mode: u32) -> String {
    const PERMISSIONS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'), // user
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'), // group
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'), // others
    ];

    PERMISSIONS.iter().map(|&(bit, c)| if mode & bit != 0 { c } else { '-' }).collect()
}
