//! Bundled country surveillance profiles
//!
//! Values follow the 2023 WHO-style surveillance snapshot the platform ships
//! with: 20 Sub-Saharan countries across four regions.

use crate::models::country::{Country, MarkerObservation};
use crate::models::types::{MarkerSignificance, Region, ResistanceLevel, Trend};

use MarkerSignificance::{Candidate, Validated};
use Trend::{Decreasing, Increasing, Stable};

/// Build the bundled country table
pub(super) fn countries() -> Vec<Country> {
    vec![
        // East Africa
        Country::new(
            "UG",
            "Uganda",
            Region::East,
            ResistanceLevel::High,
            87.5,
            13_800_000,
            4500,
            "Artemether-Lumefantrine (First-line), Artesunate-Amodiaquine (Alternative)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfkelch13 R561H", 52.0, Increasing, Validated),
            MarkerObservation::new("Pfkelch13 C469Y", 59.0, Increasing, Validated),
            MarkerObservation::new("Pfkelch13 P441L", 69.0, Increasing, Candidate),
            MarkerObservation::new("Pfcrt K76T", 38.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 35.0, Decreasing, Validated),
        ]),
        Country::new(
            "KE",
            "Kenya",
            Region::East,
            ResistanceLevel::High,
            89.2,
            8_900_000,
            3200,
            "Artemether-Lumefantrine (First-line)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfkelch13 R561H", 28.0, Increasing, Validated),
            MarkerObservation::new("Pfkelch13 A675V", 15.0, Increasing, Validated),
            MarkerObservation::new("Pfcrt K76T", 42.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 48.0, Stable, Validated),
        ]),
        Country::new(
            "TZ",
            "Tanzania",
            Region::East,
            ResistanceLevel::Medium,
            92.3,
            11_200_000,
            6800,
            "Artesunate-Amodiaquine (First-line), Artemether-Lumefantrine (Alternative)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfkelch13 P441L", 20.0, Increasing, Candidate),
            MarkerObservation::new("Pfkelch13 R622I", 12.0, Stable, Validated),
            MarkerObservation::new("Pfcrt K76T", 32.0, Decreasing, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 28.0, Decreasing, Validated),
        ]),
        Country::new(
            "RW",
            "Rwanda",
            Region::East,
            ResistanceLevel::High,
            88.7,
            2_100_000,
            890,
            "Artemether-Lumefantrine (First-line)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfkelch13 C469F", 36.0, Increasing, Candidate),
            MarkerObservation::new("Pfkelch13 R561H", 22.0, Increasing, Validated),
            MarkerObservation::new("Pfcrt K76T", 45.0, Stable, Validated),
        ]),
        Country::new(
            "ET",
            "Ethiopia",
            Region::East,
            ResistanceLevel::Medium,
            94.1,
            3_200_000,
            1200,
            "Artemether-Lumefantrine (First-line)",
            2022,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfkelch13 R622I", 8.0, Stable, Validated),
            MarkerObservation::new("Pfcrt K76T", 25.0, Decreasing, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 22.0, Decreasing, Validated),
        ]),
        Country::new(
            "ER",
            "Eritrea",
            Region::East,
            ResistanceLevel::High,
            86.4,
            180_000,
            45,
            "Artemether-Lumefantrine (First-line)",
            2022,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfkelch13 R622I", 68.0, Increasing, Validated),
            MarkerObservation::new("Pfcrt K76T", 55.0, Stable, Validated),
        ]),
        // West Africa
        Country::new(
            "NG",
            "Nigeria",
            Region::West,
            ResistanceLevel::Medium,
            93.5,
            68_000_000,
            18_900,
            "Artemether-Lumefantrine (First-line), Artesunate-Amodiaquine (Alternative)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 48.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 52.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 85.0, Stable, Validated),
            MarkerObservation::new("Pfdhps A437G", 72.0, Stable, Validated),
        ]),
        Country::new(
            "GH",
            "Ghana",
            Region::West,
            ResistanceLevel::Medium,
            94.2,
            5_800_000,
            1200,
            "Artemether-Lumefantrine (First-line)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 42.0, Decreasing, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 45.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 88.0, Stable, Validated),
        ]),
        Country::new(
            "BF",
            "Burkina Faso",
            Region::West,
            ResistanceLevel::Medium,
            92.8,
            9_200_000,
            2800,
            "Artemether-Lumefantrine (First-line)",
            2022,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 38.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 48.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 82.0, Stable, Validated),
        ]),
        Country::new(
            "ML",
            "Mali",
            Region::West,
            ResistanceLevel::Medium,
            93.1,
            7_800_000,
            3100,
            "Artemether-Lumefantrine (First-line)",
            2022,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 35.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 42.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 78.0, Stable, Validated),
        ]),
        Country::new(
            "SN",
            "Senegal",
            Region::West,
            ResistanceLevel::Low,
            96.2,
            1_200_000,
            280,
            "Artemether-Lumefantrine (First-line)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 28.0, Decreasing, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 35.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 65.0, Stable, Validated),
        ]),
        // Central Africa
        Country::new(
            "CD",
            "DR Congo",
            Region::Central,
            ResistanceLevel::High,
            88.9,
            28_000_000,
            15_200,
            "Artemether-Lumefantrine (First-line), Artesunate-Amodiaquine (Alternative)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfkelch13 R561H", 18.0, Increasing, Validated),
            MarkerObservation::new("Pfcrt K76T", 52.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 58.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 75.0, Stable, Validated),
        ]),
        Country::new(
            "CM",
            "Cameroon",
            Region::Central,
            ResistanceLevel::Medium,
            91.5,
            3_200_000,
            890,
            "Artemether-Lumefantrine (First-line)",
            2022,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 45.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 48.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 80.0, Stable, Validated),
        ]),
        Country::new(
            "CF",
            "Central African Republic",
            Region::Central,
            ResistanceLevel::Medium,
            90.8,
            1_800_000,
            720,
            "Artemether-Lumefantrine (First-line)",
            2021,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 48.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 52.0, Stable, Validated),
        ]),
        Country::new(
            "GA",
            "Gabon",
            Region::Central,
            ResistanceLevel::Medium,
            92.4,
            280_000,
            85,
            "Artemether-Lumefantrine (First-line)",
            2022,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 42.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 45.0, Stable, Validated),
        ]),
        // Southern Africa
        Country::new(
            "MZ",
            "Mozambique",
            Region::South,
            ResistanceLevel::Medium,
            93.8,
            9_800_000,
            2400,
            "Artemether-Lumefantrine (First-line)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 38.0, Decreasing, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 42.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 72.0, Stable, Validated),
        ]),
        Country::new(
            "ZM",
            "Zambia",
            Region::South,
            ResistanceLevel::Low,
            95.2,
            5_200_000,
            1200,
            "Artemether-Lumefantrine (First-line)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 32.0, Decreasing, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 38.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 68.0, Stable, Validated),
        ]),
        Country::new(
            "MW",
            "Malawi",
            Region::South,
            ResistanceLevel::Low,
            94.6,
            4_200_000,
            980,
            "Artemether-Lumefantrine (First-line)",
            2023,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 35.0, Decreasing, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 40.0, Stable, Validated),
            MarkerObservation::new("Pfdhfr S108N", 70.0, Stable, Validated),
        ]),
        Country::new(
            "AO",
            "Angola",
            Region::South,
            ResistanceLevel::High,
            87.2,
            7_800_000,
            3200,
            "Artemether-Lumefantrine (First-line)",
            2022,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfkelch13 R561H", 15.0, Increasing, Validated),
            MarkerObservation::new("Pfcrt K76T", 55.0, Stable, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 62.0, Stable, Validated),
        ]),
        Country::new(
            "ZW",
            "Zimbabwe",
            Region::South,
            ResistanceLevel::Low,
            95.8,
            580_000,
            120,
            "Artemether-Lumefantrine (First-line)",
            2022,
        )
        .with_markers(vec![
            MarkerObservation::new("Pfcrt K76T", 28.0, Decreasing, Validated),
            MarkerObservation::new("Pfmdr1 N86Y", 35.0, Stable, Validated),
        ]),
    ]
}
