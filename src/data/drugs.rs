//! Bundled antimalarial drug efficacy table

use crate::models::drug::Drug;
use crate::models::types::DrugClass;

/// Build the bundled drug table; efficacy arrays are ordered 2021..2023
pub(super) fn drugs() -> Vec<Drug> {
    vec![
        Drug::new(
            "Artemether-Lumefantrine (AL)",
            DrugClass::Act,
            true,
            [93.8, 92.5, 91.2],
        )
        .with_markers(&["Pfmdr1 N86", "Pfmdr1 D1246", "Pfcrt K76"]),
        Drug::new(
            "Artesunate-Amodiaquine (ASAQ)",
            DrugClass::Act,
            true,
            [94.8, 94.1, 93.5],
        )
        .with_markers(&["Pfmdr1 86Y", "Pfmdr1 1246Y", "Pfcrt 76T"]),
        Drug::new(
            "Dihydroartemisinin-Piperaquine (DHA-PPQ)",
            DrugClass::Act,
            false,
            [96.1, 95.8, 95.2],
        )
        .with_markers(&["Pfplasmepsin2-3 CNV", "Pfcrt K76"]),
        Drug::new(
            "Artesunate-Mefloquine (ASMQ)",
            DrugClass::Act,
            false,
            [95.5, 95.2, 94.8],
        )
        .with_markers(&["Pfmdr1 CNV", "Pfcrt K76"]),
        Drug::new(
            "Artesunate-Pyronaridine (ASPY)",
            DrugClass::Act,
            false,
            [97.1, 96.8, 96.5],
        )
        .with_markers(&["Pfmdr1 N86", "Pfcrt K76"]),
        Drug::new(
            "Chloroquine (CQ)",
            DrugClass::Monotherapy,
            false,
            [44.5, 44.8, 45.2],
        )
        .with_markers(&["Pfcrt 76T", "Pfcrt 72-76"]),
        Drug::new(
            "Sulfadoxine-Pyrimethamine (SP)",
            DrugClass::NonAct,
            false,
            [37.8, 38.2, 38.5],
        )
        .with_markers(&["Pfdhfr S108N", "Pfdhfr C59R", "Pfdhps A437G", "Pfdhps K540E"]),
    ]
}
