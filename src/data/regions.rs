//! Bundled regional surveillance profiles

use crate::models::region::RegionProfile;
use crate::models::types::Region;

/// Build the bundled region table, one profile per defined region
pub(super) fn regions() -> Vec<RegionProfile> {
    vec![
        RegionProfile::new(
            Region::East,
            &["Uganda", "Kenya", "Tanzania", "Rwanda", "Ethiopia", "Eritrea"],
            "#3b82f6",
            39_480_000,
            42.5,
            48,
        ),
        RegionProfile::new(
            Region::West,
            &["Nigeria", "Ghana", "Burkina Faso", "Mali", "Senegal"],
            "#10b981",
            89_900_000,
            38.2,
            52,
        ),
        RegionProfile::new(
            Region::Central,
            &["DR Congo", "Cameroon", "Central African Republic", "Gabon"],
            "#f59e0b",
            32_880_000,
            45.8,
            28,
        ),
        RegionProfile::new(
            Region::South,
            &["Mozambique", "Zambia", "Malawi", "Angola", "Zimbabwe"],
            "#8b5cf6",
            27_580_000,
            35.4,
            35,
        ),
    ]
}
