//! Sidereal zodiac classification.
//!
//! This crate provides:
//! - Rashi (12 signs), nakshatra (27 lunar mansions) and pada (108 quarters)
//!   lookup from a sidereal ecliptic longitude or from a sector number
//! - Reference tables of sign and mansion attributes (element, quality,
//!   lord, deity, yoni, nadi, ...), built in or loaded from JSON
//! - Degrees-minutes-seconds conversion
//!
//! Longitudes come from an external ephemeris; nothing here computes
//! planetary positions or ayanamsha.
//!
//! ```
//! use chakra_base::{Classifier, ReferenceData};
//!
//! let reference = ReferenceData::standard();
//! let classifier = Classifier::new(&reference);
//! let pos = classifier.classify_longitude(15.0).unwrap();
//! assert_eq!(pos.rashi.name, "Aries");
//! assert_eq!(pos.nakshatra.name, "Bharani");
//! assert_eq!(pos.pada.number, 1);
//! ```

pub mod classifier;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod pada;
pub mod rashi;
pub mod reference;
pub mod util;

pub use classifier::{Classifier, ZodiacPosition};
pub use error::{ClassifyError, ReferenceError};
pub use graha::{ALL_GRAHAS, Graha, VIMSHOTTARI_LORDS, rashi_lord};
pub use nakshatra::{ALL_NAKSHATRAS, Gender, Guna, NAKSHATRA_SPAN, Nadi, Nakshatra, NakshatraData};
pub use pada::{PADA_SPAN, PADAS_PER_NAKSHATRA, PadaData, navamsa_of};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Quality, RASHI_SPAN, Rashi, RashiData, deg_to_dms, dms_to_deg,
};
pub use reference::{NakshatraAttributes, RashiAttributes, ReferenceData};
pub use util::{normalize_360, normalize_checked};
