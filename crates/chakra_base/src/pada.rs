//! Pada (quarter) of a nakshatra.
//!
//! Each nakshatra has 4 padas of 3 deg 20', giving 108 padas around the
//! circle. Pada boundaries are taken from the 108-fold division so that
//! pada 1 starts exactly at its nakshatra's start and pada 4 ends exactly
//! at its end. The 108 padas coincide with the 108 navamsa (D9) segments:
//! the navamsa sign runs Mesha, Vrishabha, ... continuously from Ashwini
//! pada 1.

use serde::Serialize;

use crate::error::ClassifyError;
use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra};
use crate::rashi::{ALL_RASHIS, Rashi};
use crate::util::{check_number, sector_start};

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Padas per nakshatra.
pub const PADAS_PER_NAKSHATRA: u8 = 4;

/// 0-based position of a pada among all 108. `pada` must already be in 1..=4.
pub(crate) const fn absolute_pada_index(nakshatra: Nakshatra, pada: u8) -> usize {
    nakshatra.index() as usize * 4 + (pada as usize - 1)
}

fn check_pada(pada: u8) -> Result<(), ClassifyError> {
    check_number("pada", pada as u32, PADAS_PER_NAKSHATRA as u32).map(|_| ())
}

/// Navamsa sign of a pada (`pada` is 1-based).
pub fn navamsa_of(nakshatra: Nakshatra, pada: u8) -> Result<Rashi, ClassifyError> {
    check_pada(pada)?;
    Ok(ALL_RASHIS[absolute_pada_index(nakshatra, pada) % 12])
}

fn ordinal(pada: u8) -> &'static str {
    match pada {
        1 => "First",
        2 => "Second",
        3 => "Third",
        _ => "Fourth",
    }
}

/// A classified pada. Carries no reference to its nakshatra; callers keep
/// the pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PadaData {
    /// 1-based pada number within the nakshatra (1..=4).
    pub number: u8,
    pub name: String,
    pub description: String,
    /// English name of the navamsa sign.
    pub navamsa: &'static str,
    pub start_longitude: f64,
    pub end_longitude: f64,
}

impl PadaData {
    /// Build the record for pada `number` (1..=4) of `nakshatra`.
    pub fn new(nakshatra: Nakshatra, number: u8) -> Result<Self, ClassifyError> {
        check_pada(number)?;
        Ok(Self::build(nakshatra, number))
    }

    /// Unchecked construction; `number` must already be in 1..=4.
    pub(crate) fn build(nakshatra: Nakshatra, number: u8) -> Self {
        let abs = absolute_pada_index(nakshatra, number);
        let navamsa = ALL_RASHIS[abs % 12];
        Self {
            number,
            name: format!("{} Pada {number}", nakshatra.name()),
            description: format!(
                "{} quarter of {} (navamsa {})",
                ordinal(number),
                nakshatra.name(),
                navamsa.english_name()
            ),
            navamsa: navamsa.english_name(),
            start_longitude: sector_start(abs, 108),
            end_longitude: sector_start(abs + 1, 108),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::ALL_NAKSHATRAS;

    #[test]
    fn pada_span_correct() {
        assert!((PADA_SPAN - 3.333_333_333_333_333_5).abs() < 1e-10);
    }

    #[test]
    fn first_and_last_pada_align_with_nakshatra() {
        for n in ALL_NAKSHATRAS {
            assert_eq!(PadaData::new(n, 1).unwrap().start_longitude, n.start_longitude());
            assert_eq!(PadaData::new(n, 4).unwrap().end_longitude, n.end_longitude());
        }
    }

    #[test]
    fn padas_contiguous() {
        for n in ALL_NAKSHATRAS {
            for p in 1..4 {
                assert_eq!(
                    PadaData::new(n, p).unwrap().end_longitude,
                    PadaData::new(n, p + 1).unwrap().start_longitude
                );
            }
        }
    }

    #[test]
    fn navamsa_sequence() {
        assert_eq!(navamsa_of(Nakshatra::Ashwini, 1), Ok(Rashi::Mesha));
        assert_eq!(navamsa_of(Nakshatra::Ashwini, 4), Ok(Rashi::Karka));
        assert_eq!(navamsa_of(Nakshatra::Krittika, 1), Ok(Rashi::Dhanu));
        assert_eq!(navamsa_of(Nakshatra::Rohini, 1), Ok(Rashi::Mesha));
        assert_eq!(navamsa_of(Nakshatra::Rohini, 2), Ok(Rashi::Vrishabha));
        assert_eq!(navamsa_of(Nakshatra::Revati, 4), Ok(Rashi::Meena));
    }

    #[test]
    fn name_and_description() {
        let p = PadaData::new(Nakshatra::Bharani, 2).unwrap();
        assert_eq!(p.name, "Bharani Pada 2");
        assert_eq!(p.description, "Second quarter of Bharani (navamsa Virgo)");
        assert_eq!(p.navamsa, "Virgo");
    }

    #[test]
    fn pada_number_out_of_range() {
        for bad in [0, 5, u8::MAX] {
            assert_eq!(
                PadaData::new(Nakshatra::Revati, bad),
                Err(ClassifyError::InvalidIndex {
                    kind: "pada",
                    value: bad as u32,
                    max: 4
                })
            );
            assert!(navamsa_of(Nakshatra::Ashwini, bad).is_err());
        }
    }
}
