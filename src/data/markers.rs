//! Bundled molecular-marker catalog

use crate::models::marker::MarkerDescriptor;
use crate::models::types::MarkerCategory;

use MarkerCategory::{Artemisinin, PartnerDrug, Sp};

/// Build the bundled marker catalog
pub(super) fn markers() -> Vec<MarkerDescriptor> {
    vec![
        MarkerDescriptor::new("Pfkelch13 R561H", "Validated artemisinin resistance marker", Artemisinin),
        MarkerDescriptor::new("Pfkelch13 C469Y", "Validated artemisinin resistance marker", Artemisinin),
        MarkerDescriptor::new("Pfkelch13 A675V", "Validated artemisinin resistance marker", Artemisinin),
        MarkerDescriptor::new("Pfkelch13 P441L", "Candidate resistance marker", Artemisinin),
        MarkerDescriptor::new("Pfkelch13 C469F", "Candidate resistance marker", Artemisinin),
        MarkerDescriptor::new("Pfkelch13 R622I", "Validated artemisinin resistance marker", Artemisinin),
        MarkerDescriptor::new("Pfcrt K76T", "Chloroquine resistance marker", PartnerDrug),
        MarkerDescriptor::new("Pfmdr1 N86Y", "Lumefantrine resistance marker", PartnerDrug),
        MarkerDescriptor::new("Pfmdr1 D1246Y", "Lumefantrine resistance marker", PartnerDrug),
        MarkerDescriptor::new("Pfmdr1 Y184F", "Amodiaquine resistance marker", PartnerDrug),
        MarkerDescriptor::new("Pfdhfr S108N", "Pyrimethamine resistance marker", Sp),
        MarkerDescriptor::new("Pfdhfr C59R", "Pyrimethamine resistance marker", Sp),
        MarkerDescriptor::new("Pfdhps A437G", "Sulfadoxine resistance marker", Sp),
        MarkerDescriptor::new("Pfdhps K540E", "Sulfadoxine resistance marker", Sp),
        MarkerDescriptor::new("Pfplasmepsin2-3 CNV", "Piperaquine resistance marker", PartnerDrug),
    ]
}
