//! Longitude classification into rashi, nakshatra and pada.
//!
//! The three partitions are independent divisions of the same circle: the
//! rashi is never derived from the nakshatra or the other way round. All
//! sectors are half-open `[start, end)`; 360 deg wraps to 0 deg.

use serde::Serialize;
use tracing::trace;

use crate::error::ClassifyError;
use crate::nakshatra::{ALL_NAKSHATRAS, NakshatraData};
use crate::pada::{PADAS_PER_NAKSHATRA, PadaData};
use crate::rashi::{ALL_RASHIS, Dms, RashiData, deg_to_dms};
use crate::reference::ReferenceData;
use crate::util::{check_number, normalize_checked, sector_index};

/// Full classification of one sidereal longitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacPosition {
    /// Input longitude normalized to [0, 360).
    pub longitude: f64,
    pub rashi: RashiData,
    pub nakshatra: NakshatraData,
    pub pada: PadaData,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
    /// Position within the rashi as DMS.
    pub dms: Dms,
}

/// Classifier over an injected set of reference tables.
///
/// Holds only a shared borrow, so one `ReferenceData` can back any number of
/// classifiers on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    reference: &'a ReferenceData,
}

impl<'a> Classifier<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// Rashi by 1-based number (1..=12).
    pub fn rashi_from_number(&self, number: u32) -> Result<RashiData, ClassifyError> {
        let idx = check_number("rashi", number, 12)?;
        Ok(self.rashi_at(idx))
    }

    /// Rashi containing a sidereal longitude. Mesha = [0, 30), Vrishabha = [30, 60), etc.
    pub fn rashi_from_longitude(&self, sidereal_lon_deg: f64) -> Result<RashiData, ClassifyError> {
        let lon = normalize_checked(sidereal_lon_deg)?;
        Ok(self.rashi_at(sector_index(lon, 12)))
    }

    /// Nakshatra by 1-based number (1..=27).
    pub fn nakshatra_from_number(&self, number: u32) -> Result<NakshatraData, ClassifyError> {
        let idx = check_number("nakshatra", number, 27)?;
        Ok(self.nakshatra_at(idx))
    }

    /// Nakshatra containing a sidereal longitude. Each spans 13 deg 20'.
    pub fn nakshatra_from_longitude(
        &self,
        sidereal_lon_deg: f64,
    ) -> Result<NakshatraData, ClassifyError> {
        let lon = normalize_checked(sidereal_lon_deg)?;
        Ok(self.nakshatra_at(sector_index(lon, 27)))
    }

    /// Pada by nakshatra number (1..=27) and pada number (1..=4).
    pub fn pada_from_number(
        &self,
        nakshatra_number: u32,
        pada_number: u32,
    ) -> Result<PadaData, ClassifyError> {
        let nak_idx = check_number("nakshatra", nakshatra_number, 27)?;
        check_number("pada", pada_number, PADAS_PER_NAKSHATRA as u32)?;
        Ok(PadaData::build(ALL_NAKSHATRAS[nak_idx], pada_number as u8))
    }

    /// Pada containing a sidereal longitude. Each spans 3 deg 20'.
    pub fn pada_from_longitude(&self, sidereal_lon_deg: f64) -> Result<PadaData, ClassifyError> {
        let lon = normalize_checked(sidereal_lon_deg)?;
        let nak_idx = sector_index(lon, 27);
        Ok(pada_at(lon, nak_idx))
    }

    /// Rashi, nakshatra and pada of one sidereal longitude.
    pub fn classify_longitude(
        &self,
        sidereal_lon_deg: f64,
    ) -> Result<ZodiacPosition, ClassifyError> {
        let lon = normalize_checked(sidereal_lon_deg)?;
        let rashi_idx = sector_index(lon, 12);
        let nak_idx = sector_index(lon, 27);
        let rashi = self.rashi_at(rashi_idx);
        let degrees_in_rashi = lon - rashi.start_longitude;
        let position = ZodiacPosition {
            longitude: lon,
            nakshatra: self.nakshatra_at(nak_idx),
            pada: pada_at(lon, nak_idx),
            dms: deg_to_dms(degrees_in_rashi)?,
            degrees_in_rashi,
            rashi,
        };
        trace!(
            lon,
            rashi = position.rashi.number,
            nakshatra = position.nakshatra.number,
            pada = position.pada.number,
            "classified longitude"
        );
        Ok(position)
    }

    /// Classify a tropical longitude given the ayanamsha in effect.
    ///
    /// Computes `sidereal = tropical - ayanamsha`, then calls
    /// [`Classifier::classify_longitude`]. The ayanamsha value comes from
    /// the caller's ephemeris; it is not modelled here.
    pub fn classify_tropical(
        &self,
        tropical_lon_deg: f64,
        ayanamsha_deg: f64,
    ) -> Result<ZodiacPosition, ClassifyError> {
        if !ayanamsha_deg.is_finite() {
            return Err(ClassifyError::InvalidLongitude(ayanamsha_deg));
        }
        self.classify_longitude(tropical_lon_deg - ayanamsha_deg)
    }

    fn rashi_at(&self, idx: usize) -> RashiData {
        let rashi = ALL_RASHIS[idx];
        RashiData::new(rashi, self.reference.rashi(rashi))
    }

    fn nakshatra_at(&self, idx: usize) -> NakshatraData {
        let nakshatra = ALL_NAKSHATRAS[idx];
        NakshatraData::new(nakshatra, self.reference.nakshatra(nakshatra))
    }
}

/// Pada of `lon` inside the nakshatra at `nak_idx`.
///
/// The 108-fold sector search shares its boundaries with the 27-fold one,
/// so the clamp only guards against disagreement at the last ulp.
fn pada_at(lon: f64, nak_idx: usize) -> PadaData {
    let first = nak_idx * 4;
    let abs = sector_index(lon, 108).clamp(first, first + 3);
    PadaData::build(ALL_NAKSHATRAS[nak_idx], (abs - first + 1) as u8)
}
