//! # EPL2 Barcode Symbologies
//!
//! The `B` command selects its symbology with a short pattern code in field
//! `p4`. The codes below are what the firmware expects and are emitted as-is.
//!
//! | Name | Code | | Name | Code |
//! |------|------|-|------|------|
//! | code39 | `3` | | german_post_code | `2G` |
//! | code39_checksum | `3C` | | interleaved_2of5 | `2` |
//! | code93 | `9` | | interleaved_2of5_checksum_mod10 | `2C` |
//! | code128_ucc | `0` | | postnet | `P` |
//! | code128_auto | `1` | | planet | `PL` |
//! | code128_mode_a | `1A` | | japanese_postnet | `J` |
//! | code128_mode_b | `1B` | | ucc_ean128 | `1E` |
//! | code128_mode_c | `1C` | | upc_a / +2 / +5 | `UA0` `UA2` `UA5` |
//! | codabar | `K` | | upc_e / +2 / +5 | `UE0` `UE2` `UE5` |
//! | ean8 / +2 / +5 | `E80` `E82` `E85` | | upc_interleaved_2of5 | `2U` |
//! | ean13 / +2 / +5 | `E30` `E32` `E35` | | plessey_checksum_mod10 | `L` |
//! | | | | msi1_checksum_mod10 | `L` |
//! | | | | msi3_checksum_mod10 | `M` |
//!
//! Plessey and MSI-1 share code `L` on the wire. Looking a symbology up by
//! code `L` returns Plessey.
//!
//! ## Example
//!
//! ```
//! use etiqueta::protocol::barcode::Symbology;
//!
//! let s: Symbology = "code128_auto".parse().unwrap();
//! assert_eq!(s.code(), "1");
//!
//! let s: Symbology = "E30".parse().unwrap();
//! assert_eq!(s, Symbology::Ean13);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::EtiquetaError;

/// Barcode symbologies understood by the `B` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Symbology {
    #[default]
    Code39,
    Code39Checksum,
    Code93,
    Code128Ucc,
    Code128Auto,
    Code128ModeA,
    Code128ModeB,
    Code128ModeC,
    Codabar,
    Ean8,
    Ean8Plus2,
    Ean8Plus5,
    Ean13,
    Ean13Plus2,
    Ean13Plus5,
    GermanPostCode,
    Interleaved2of5,
    Interleaved2of5ChecksumMod10,
    Postnet,
    Planet,
    JapanesePostnet,
    UccEan128,
    UpcA,
    UpcAPlus2,
    UpcAPlus5,
    UpcE,
    UpcEPlus2,
    UpcEPlus5,
    UpcInterleaved2of5,
    PlesseyChecksumMod10,
    Msi1ChecksumMod10,
    Msi3ChecksumMod10,
}

/// (symbology, name, wire code), in lookup order.
const TABLE: [(Symbology, &str, &str); 32] = [
    (Symbology::Code39, "code39", "3"),
    (Symbology::Code39Checksum, "code39_checksum", "3C"),
    (Symbology::Code93, "code93", "9"),
    (Symbology::Code128Ucc, "code128_ucc", "0"),
    (Symbology::Code128Auto, "code128_auto", "1"),
    (Symbology::Code128ModeA, "code128_mode_a", "1A"),
    (Symbology::Code128ModeB, "code128_mode_b", "1B"),
    (Symbology::Code128ModeC, "code128_mode_c", "1C"),
    (Symbology::Codabar, "codabar", "K"),
    (Symbology::Ean8, "ean8", "E80"),
    (Symbology::Ean8Plus2, "ean8_plus2", "E82"),
    (Symbology::Ean8Plus5, "ean8_plus5", "E85"),
    (Symbology::Ean13, "ean13", "E30"),
    (Symbology::Ean13Plus2, "ean13_plus2", "E32"),
    (Symbology::Ean13Plus5, "ean13_plus5", "E35"),
    (Symbology::GermanPostCode, "german_post_code", "2G"),
    (Symbology::Interleaved2of5, "interleaved_2of5", "2"),
    (Symbology::Interleaved2of5ChecksumMod10, "interleaved_2of5_checksum_mod10", "2C"),
    (Symbology::Postnet, "postnet", "P"),
    (Symbology::Planet, "planet", "PL"),
    (Symbology::JapanesePostnet, "japanese_postnet", "J"),
    (Symbology::UccEan128, "ucc_ean128", "1E"),
    (Symbology::UpcA, "upc_a", "UA0"),
    (Symbology::UpcAPlus2, "upc_a_plus2", "UA2"),
    (Symbology::UpcAPlus5, "upc_a_plus5", "UA5"),
    (Symbology::UpcE, "upc_e", "UE0"),
    (Symbology::UpcEPlus2, "upc_e_plus2", "UE2"),
    (Symbology::UpcEPlus5, "upc_e_plus5", "UE5"),
    (Symbology::UpcInterleaved2of5, "upc_interleaved_2of5", "2U"),
    (Symbology::PlesseyChecksumMod10, "plessey_checksum_mod10", "L"),
    (Symbology::Msi1ChecksumMod10, "msi1_checksum_mod10", "L"),
    (Symbology::Msi3ChecksumMod10, "msi3_checksum_mod10", "M"),
];

impl Symbology {
    fn entry(self) -> &'static (Symbology, &'static str, &'static str) {
        // TABLE is declared in variant order.
        &TABLE[self as usize]
    }

    /// Pattern code for field `p4` of the `B` command.
    pub fn code(self) -> &'static str {
        self.entry().2
    }

    /// Snake-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Every symbology in table order.
    pub fn all() -> impl Iterator<Item = Symbology> {
        TABLE.iter().map(|(s, _, _)| *s)
    }

    /// Reverse lookup by wire code. The first entry wins for shared codes.
    pub fn from_code(code: &str) -> Option<Self> {
        TABLE.iter().find(|(_, _, c)| *c == code).map(|(s, _, _)| *s)
    }

    /// Reverse lookup by snake-case name.
    pub fn from_name(name: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, n, _)| n.eq_ignore_ascii_case(name))
            .map(|(s, _, _)| *s)
    }

    /// Code 39 and Code 39 with check digit, the only patterns whose
    /// footprint can be computed ahead of printing.
    pub fn is_code39_family(self) -> bool {
        matches!(self, Self::Code39 | Self::Code39Checksum)
    }
}

impl FromStr for Symbology {
    type Err = EtiquetaError;

    /// Accepts a name (`"ean13"`) or a wire code (`"E30"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_name(s)
            .or_else(|| Self::from_code(s))
            .ok_or_else(|| EtiquetaError::UnknownSymbology(s.to_string()))
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Symbology {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_variant_order() {
        for (i, (sym, _, _)) in TABLE.iter().enumerate() {
            assert_eq!(*sym as usize, i, "{:?} out of order", sym);
        }
    }

    #[test]
    fn test_codes_verbatim() {
        let codes: Vec<_> = Symbology::all().map(Symbology::code).collect();
        assert_eq!(
            codes,
            vec![
                "3", "3C", "9", "0", "1", "1A", "1B", "1C", "K", "E80", "E82", "E85", "E30",
                "E32", "E35", "2G", "2", "2C", "P", "PL", "J", "1E", "UA0", "UA2", "UA5", "UE0",
                "UE2", "UE5", "2U", "L", "L", "M",
            ]
        );
    }

    #[test]
    fn test_shared_l_code() {
        assert_eq!(Symbology::PlesseyChecksumMod10.code(), "L");
        assert_eq!(Symbology::Msi1ChecksumMod10.code(), "L");
        assert_eq!(Symbology::from_code("L"), Some(Symbology::PlesseyChecksumMod10));
        assert_eq!(
            Symbology::from_name("msi1_checksum_mod10"),
            Some(Symbology::Msi1ChecksumMod10)
        );
    }

    #[test]
    fn test_parse_name_and_code() {
        assert_eq!("code39".parse::<Symbology>().unwrap(), Symbology::Code39);
        assert_eq!("3C".parse::<Symbology>().unwrap(), Symbology::Code39Checksum);
        assert_eq!("UE5".parse::<Symbology>().unwrap(), Symbology::UpcEPlus5);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "qr".parse::<Symbology>().unwrap_err();
        assert!(matches!(err, EtiquetaError::UnknownSymbology(ref s) if s == "qr"));
    }

    #[test]
    fn test_code39_family() {
        assert!(Symbology::Code39.is_code39_family());
        assert!(Symbology::Code39Checksum.is_code39_family());
        assert!(!Symbology::Code93.is_code39_family());
        assert!(!Symbology::Ean13.is_code39_family());
    }

    #[test]
    fn test_default_is_code39() {
        assert_eq!(Symbology::default().code(), "3");
    }

    #[test]
    fn test_deserialize() {
        let s: Symbology = serde_json::from_str("\"upc_a\"").unwrap();
        assert_eq!(s, Symbology::UpcA);
        assert!(serde_json::from_str::<Symbology>("\"bogus\"").is_err());
    }
}
