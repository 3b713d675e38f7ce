//! Rashi (zodiac sign) types and DMS (degrees-minutes-seconds) conversion.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Element and quality follow the
//! sign number: elements cycle Fire, Earth, Air, Water and qualities cycle
//! Cardinal, Fixed, Mutable.

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;
use crate::graha::Graha;
use crate::reference::RashiAttributes;
use crate::util::sector_start;

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

/// Modality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// English name of the rashi. This is the canonical label in all output.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Traditional symbol of the sign.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mesha => "Ram",
            Self::Vrishabha => "Bull",
            Self::Mithuna => "Twins",
            Self::Karka => "Crab",
            Self::Simha => "Lion",
            Self::Kanya => "Maiden",
            Self::Tula => "Scales",
            Self::Vrischika => "Scorpion",
            Self::Dhanu => "Archer",
            Self::Makara => "Sea-goat",
            Self::Kumbha => "Water-bearer",
            Self::Meena => "Fish",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    pub const fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub const fn quality(self) -> Quality {
        match self.index() % 3 {
            0 => Quality::Cardinal,
            1 => Quality::Fixed,
            _ => Quality::Mutable,
        }
    }

    /// Start longitude of the sign in degrees.
    pub fn start_longitude(self) -> f64 {
        sector_start(self.index() as usize, 12)
    }

    /// End longitude of the sign in degrees (exclusive).
    pub fn end_longitude(self) -> f64 {
        sector_start(self.index() as usize + 1, 12)
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    /// Whole degrees (0..29 within a rashi, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Convert DMS back to decimal degrees.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value. Magnitudes that do not
/// fit `Dms::degrees` (65536 and above) and non-finite input are rejected.
pub fn deg_to_dms(deg: f64) -> Result<Dms, ClassifyError> {
    let d = deg.abs();
    if !d.is_finite() || d >= u16::MAX as f64 + 1.0 {
        return Err(ClassifyError::InvalidAngle(deg));
    }
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Ok(Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    })
}

/// A classified zodiac sign with its descriptive attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiData {
    #[serde(skip)]
    pub rashi: Rashi,
    /// 1-based sign number.
    pub number: u8,
    pub name: &'static str,
    pub english_name: &'static str,
    pub element: Element,
    pub quality: Quality,
    pub lord: Graha,
    pub symbol: String,
    pub start_longitude: f64,
    pub end_longitude: f64,
}

impl RashiData {
    /// Assemble a record from the sign and its reference attributes.
    pub fn new(rashi: Rashi, attrs: &RashiAttributes) -> Self {
        Self {
            rashi,
            number: rashi.number(),
            name: rashi.english_name(),
            english_name: rashi.english_name(),
            element: attrs.element,
            quality: attrs.quality,
            lord: attrs.lord,
            symbol: attrs.symbol.clone(),
            start_longitude: rashi.start_longitude(),
            end_longitude: rashi.end_longitude(),
        }
    }
}
