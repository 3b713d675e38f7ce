//! Nakshatra (lunar mansion) types for the 27-fold scheme.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, starting from Ashwini at 0 deg. Each nakshatra
//! has 4 padas of 3 deg 20' (see [`crate::pada`]).

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, VIMSHOTTARI_LORDS};
use crate::reference::NakshatraAttributes;
use crate::util::sector_start;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// The 27 nakshatras from Ashwini to Revati (uniform 13 deg 20' each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Primary guna of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guna {
    Sattva,
    Rajas,
    Tamas,
}

/// Ayurvedic nadi (pulse) classification used in compatibility matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

impl Nakshatra {
    /// Canonical name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Vimshottari lord: Ketu, Venus, Sun, Moon, Mars, Rahu, Jupiter,
    /// Saturn, Mercury, repeating three times around the circle.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[self.index() as usize % 9]
    }

    /// Ashwini..Ashlesha are Rajas, Magha..Jyeshtha Tamas, Mula..Revati Sattva.
    pub const fn guna(self) -> Guna {
        match self.index() / 9 {
            0 => Guna::Rajas,
            1 => Guna::Tamas,
            _ => Guna::Sattva,
        }
    }

    /// Nadi runs Adi, Madhya, Antya, Antya, Madhya, Adi and repeats.
    pub const fn nadi(self) -> Nadi {
        match self.index() % 6 {
            0 | 5 => Nadi::Adi,
            1 | 4 => Nadi::Madhya,
            _ => Nadi::Antya,
        }
    }

    /// Start longitude in degrees.
    pub fn start_longitude(self) -> f64 {
        sector_start(self.index() as usize, 27)
    }

    /// End longitude in degrees (exclusive).
    pub fn end_longitude(self) -> f64 {
        sector_start(self.index() as usize + 1, 27)
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

/// A classified nakshatra with its descriptive attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraData {
    #[serde(skip)]
    pub nakshatra: Nakshatra,
    /// 1-based nakshatra number.
    pub number: u8,
    pub name: &'static str,
    pub english_name: &'static str,
    pub lord: Graha,
    pub deity: String,
    pub symbol: String,
    pub gender: Gender,
    pub guna: Guna,
    pub yoni: String,
    pub nadi: Nadi,
    pub start_longitude: f64,
    pub end_longitude: f64,
}

impl NakshatraData {
    /// Assemble a record from the nakshatra and its reference attributes.
    pub fn new(nakshatra: Nakshatra, attrs: &NakshatraAttributes) -> Self {
        Self {
            nakshatra,
            number: nakshatra.number(),
            name: nakshatra.name(),
            english_name: nakshatra.name(),
            lord: attrs.lord,
            deity: attrs.deity.clone(),
            symbol: attrs.symbol.clone(),
            gender: attrs.gender,
            guna: attrs.guna,
            yoni: attrs.yoni.clone(),
            nadi: attrs.nadi,
            start_longitude: nakshatra.start_longitude(),
            end_longitude: nakshatra.end_longitude(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(n.number() as usize, i + 1);
        }
    }

    #[test]
    fn nakshatra_span_correct() {
        assert!((NAKSHATRA_SPAN - 13.333_333_333_333_334).abs() < 1e-10);
    }

    #[test]
    fn nakshatra_lords() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Bharani.lord(), Graha::Shukra);
        assert_eq!(Nakshatra::Rohini.lord(), Graha::Chandra);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
    }

    #[test]
    fn guna_blocks_of_nine() {
        assert_eq!(Nakshatra::Ashlesha.guna(), Guna::Rajas);
        assert_eq!(Nakshatra::Magha.guna(), Guna::Tamas);
        assert_eq!(Nakshatra::Jyeshtha.guna(), Guna::Tamas);
        assert_eq!(Nakshatra::Mula.guna(), Guna::Sattva);
    }

    #[test]
    fn nadi_known_values() {
        assert_eq!(Nakshatra::Ashwini.nadi(), Nadi::Adi);
        assert_eq!(Nakshatra::Krittika.nadi(), Nadi::Antya);
        assert_eq!(Nakshatra::Rohini.nadi(), Nadi::Antya);
        assert_eq!(Nakshatra::Ardra.nadi(), Nadi::Adi);
        assert_eq!(Nakshatra::Hasta.nadi(), Nadi::Adi);
        assert_eq!(Nakshatra::UttaraBhadrapada.nadi(), Nadi::Madhya);
        assert_eq!(Nakshatra::Revati.nadi(), Nadi::Antya);
    }

    #[test]
    fn bounds_tile_circle() {
        assert_eq!(Nakshatra::Ashwini.start_longitude(), 0.0);
        assert_eq!(Nakshatra::Revati.end_longitude(), 360.0);
        for pair in ALL_NAKSHATRAS.windows(2) {
            assert_eq!(pair[0].end_longitude(), pair[1].start_longitude());
        }
    }
}
