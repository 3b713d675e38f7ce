//! Static reference tables for rashi and nakshatra attributes.
//!
//! A [`ReferenceData`] is built once, either from the built-in tables
//! ([`ReferenceData::standard`]) or from a JSON file, and then only read.
//! It is passed to [`crate::Classifier`] explicitly.
//!
//! JSON layout:
//!
//! ```json
//! {
//!   "rashis": [
//!     { "number": 1, "element": "Fire", "quality": "Cardinal", "lord": "Mars", "symbol": "Ram" }
//!   ],
//!   "nakshatras": [
//!     { "number": 1, "lord": "Ketu", "deity": "Ashwini Kumaras", "symbol": "Horse's head",
//!       "gender": "Male", "guna": "Rajas", "yoni": "Horse", "nadi": "Adi" }
//!   ]
//! }
//! ```
//!
//! Both tables must be complete (12 and 27 entries) and numbered in order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ReferenceError;
use crate::graha::{Graha, rashi_lord};
use crate::nakshatra::{ALL_NAKSHATRAS, Gender, Guna, Nadi, Nakshatra};
use crate::rashi::{ALL_RASHIS, Element, Quality, Rashi};

/// Descriptive attributes of one rashi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RashiAttributes {
    /// 1-based sign number.
    pub number: u32,
    pub element: Element,
    pub quality: Quality,
    pub lord: Graha,
    pub symbol: String,
}

/// Descriptive attributes of one nakshatra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraAttributes {
    /// 1-based nakshatra number.
    pub number: u32,
    pub lord: Graha,
    pub deity: String,
    pub symbol: String,
    pub gender: Gender,
    pub guna: Guna,
    pub yoni: String,
    pub nadi: Nadi,
}

/// Deity, symbol, gender and yoni per nakshatra, Ashwini first.
const NAKSHATRA_TABLE: [(&str, &str, Gender, &str); 27] = [
    ("Ashwini Kumaras", "Horse's head", Gender::Male, "Horse"),
    ("Yama", "Yoni", Gender::Male, "Elephant"),
    ("Agni", "Razor", Gender::Female, "Sheep"),
    ("Brahma", "Chariot", Gender::Male, "Serpent"),
    ("Soma", "Deer's head", Gender::Female, "Serpent"),
    ("Rudra", "Teardrop", Gender::Female, "Dog"),
    ("Aditi", "Quiver of arrows", Gender::Female, "Cat"),
    ("Brihaspati", "Cow's udder", Gender::Male, "Sheep"),
    ("Nagas", "Coiled serpent", Gender::Male, "Cat"),
    ("Pitris", "Royal throne", Gender::Male, "Rat"),
    ("Bhaga", "Front legs of a bed", Gender::Female, "Rat"),
    ("Aryaman", "Back legs of a bed", Gender::Male, "Cow"),
    ("Savitar", "Hand", Gender::Female, "Buffalo"),
    ("Tvashtar", "Bright jewel", Gender::Female, "Tiger"),
    ("Vayu", "Young sprout", Gender::Male, "Buffalo"),
    ("Indra-Agni", "Triumphal arch", Gender::Male, "Tiger"),
    ("Mitra", "Lotus", Gender::Female, "Deer"),
    ("Indra", "Earring", Gender::Male, "Deer"),
    ("Nirriti", "Bunch of roots", Gender::Male, "Dog"),
    ("Apas", "Elephant tusk", Gender::Male, "Monkey"),
    ("Vishvedevas", "Planks of a bed", Gender::Male, "Mongoose"),
    ("Vishnu", "Ear", Gender::Female, "Monkey"),
    ("Vasus", "Drum", Gender::Female, "Lion"),
    ("Varuna", "Empty circle", Gender::Female, "Horse"),
    ("Aja Ekapada", "Swords", Gender::Male, "Lion"),
    ("Ahir Budhnya", "Twins", Gender::Female, "Cow"),
    ("Pushan", "Fish", Gender::Female, "Elephant"),
];

/// Immutable attribute tables for all 12 rashis and 27 nakshatras.
///
/// Every way of obtaining one, `Deserialize` included, checks table sizes
/// and numbering, so the per-sign and per-nakshatra accessors cannot miss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReferenceData")]
pub struct ReferenceData {
    rashis: Vec<RashiAttributes>,
    nakshatras: Vec<NakshatraAttributes>,
}

/// Unchecked wire form of [`ReferenceData`].
#[derive(Deserialize)]
struct RawReferenceData {
    rashis: Vec<RashiAttributes>,
    nakshatras: Vec<NakshatraAttributes>,
}

impl TryFrom<RawReferenceData> for ReferenceData {
    type Error = ReferenceError;

    fn try_from(raw: RawReferenceData) -> Result<Self, Self::Error> {
        let data = Self {
            rashis: raw.rashis,
            nakshatras: raw.nakshatras,
        };
        data.validate()?;
        Ok(data)
    }
}

impl ReferenceData {
    /// Built-in tables following standard Vedic convention.
    pub fn standard() -> Self {
        let rashis = ALL_RASHIS
            .iter()
            .map(|&r| RashiAttributes {
                number: r.number() as u32,
                element: r.element(),
                quality: r.quality(),
                lord: rashi_lord(r),
                symbol: r.symbol().to_string(),
            })
            .collect();
        let nakshatras = ALL_NAKSHATRAS
            .iter()
            .zip(NAKSHATRA_TABLE.iter())
            .map(|(&n, &(deity, symbol, gender, yoni))| NakshatraAttributes {
                number: n.number() as u32,
                lord: n.lord(),
                deity: deity.to_string(),
                symbol: symbol.to_string(),
                gender,
                guna: n.guna(),
                yoni: yoni.to_string(),
                nadi: n.nadi(),
            })
            .collect();
        Self { rashis, nakshatras }
    }

    /// Parse and validate tables from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ReferenceError> {
        let raw: RawReferenceData = serde_json::from_str(json)?;
        let data = Self::try_from(raw)?;
        debug!(
            rashis = data.rashis.len(),
            nakshatras = data.nakshatras.len(),
            "reference tables parsed"
        );
        Ok(data)
    }

    /// Read, parse and validate tables from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading reference tables");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn validate(&self) -> Result<(), ReferenceError> {
        check_table("rashi", self.rashis.iter().map(|r| r.number), 12)?;
        check_table("nakshatra", self.nakshatras.iter().map(|n| n.number), 27)
    }

    /// Attributes of a rashi.
    pub fn rashi(&self, rashi: Rashi) -> &RashiAttributes {
        &self.rashis[rashi.index() as usize]
    }

    /// Attributes of a nakshatra.
    pub fn nakshatra(&self, nakshatra: Nakshatra) -> &NakshatraAttributes {
        &self.nakshatras[nakshatra.index() as usize]
    }

    pub fn rashis(&self) -> &[RashiAttributes] {
        &self.rashis
    }

    pub fn nakshatras(&self) -> &[NakshatraAttributes] {
        &self.nakshatras
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_table(
    table: &'static str,
    numbers: impl ExactSizeIterator<Item = u32>,
    expected: usize,
) -> Result<(), ReferenceError> {
    if numbers.len() != expected {
        return Err(ReferenceError::Count {
            table,
            expected,
            found: numbers.len(),
        });
    }
    for (position, found) in (1..).zip(numbers) {
        if found as usize != position {
            return Err(ReferenceError::Numbering {
                table,
                position,
                found,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_is_valid() {
        let data = ReferenceData::standard();
        assert_eq!(data.rashis().len(), 12);
        assert_eq!(data.nakshatras().len(), 27);
        assert_eq!(data.validate(), Ok(()));
    }

    #[test]
    fn standard_rashi_attributes() {
        let data = ReferenceData::standard();
        let simha = data.rashi(Rashi::Simha);
        assert_eq!(simha.number, 5);
        assert_eq!(simha.element, Element::Fire);
        assert_eq!(simha.quality, Quality::Fixed);
        assert_eq!(simha.lord, Graha::Surya);
        assert_eq!(simha.symbol, "Lion");
    }

    #[test]
    fn standard_nakshatra_attributes() {
        let data = ReferenceData::standard();
        let rohini = data.nakshatra(Nakshatra::Rohini);
        assert_eq!(rohini.number, 4);
        assert_eq!(rohini.lord, Graha::Chandra);
        assert_eq!(rohini.deity, "Brahma");
        assert_eq!(rohini.yoni, "Serpent");
        assert_eq!(rohini.nadi, Nadi::Antya);
        let revati = data.nakshatra(Nakshatra::Revati);
        assert_eq!(revati.deity, "Pushan");
        assert_eq!(revati.guna, Guna::Sattva);
    }

    #[test]
    fn json_round_trip_of_standard() {
        let data = ReferenceData::standard();
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(ReferenceData::from_json_str(&json), Ok(data));
    }

    #[test]
    fn json_uses_english_lords() {
        let json = serde_json::to_string(&ReferenceData::standard()).unwrap();
        assert!(json.contains(r#""lord":"Mars""#));
        assert!(json.contains(r#""lord":"Ketu""#));
    }

    #[test]
    fn rejects_short_table() {
        let mut data = ReferenceData::standard();
        data.rashis.pop();
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            ReferenceData::from_json_str(&json),
            Err(ReferenceError::Count {
                table: "rashi",
                expected: 12,
                found: 11
            })
        );
    }

    #[test]
    fn rejects_misnumbered_entry() {
        let mut data = ReferenceData::standard();
        data.nakshatras.swap(2, 3);
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            ReferenceData::from_json_str(&json),
            Err(ReferenceError::Numbering {
                table: "nakshatra",
                position: 3,
                found: 4
            })
        );
    }

    #[test]
    fn deserialize_rejects_short_table() {
        let mut value = serde_json::to_value(ReferenceData::standard()).unwrap();
        value["rashis"].as_array_mut().unwrap().pop();
        let err = serde_json::from_value::<ReferenceData>(value).unwrap_err();
        assert_eq!(err.to_string(), "rashi table has 11 entries, expected 12");
    }

    #[test]
    fn deserialize_rejects_misnumbered_entry() {
        let mut value = serde_json::to_value(ReferenceData::standard()).unwrap();
        value["nakshatras"][0]["number"] = serde_json::json!(9);
        let err = serde_json::from_value::<ReferenceData>(value).unwrap_err();
        assert!(err.to_string().contains("nakshatra entry at position 1 is numbered 9"));
    }

    #[test]
    fn rejects_bad_json() {
        assert!(matches!(
            ReferenceData::from_json_str("{\"rashis\": 3}"),
            Err(ReferenceError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            ReferenceData::from_path("/nonexistent/chakra-reference.json"),
            Err(ReferenceError::Io(_))
        ));
    }
}
