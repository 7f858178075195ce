//! # ethcal-calendar
//!
//! Date conversion between the Ethiopic, Coptic and proleptic Gregorian
//! calendars through the Julian Day Number.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["quotient / floor_mod"] --> B["gregorian_to_jdn / jdn_to_gregorian"]
//!     A --> C["eth_coptic_to_jdn / jdn_to_eth_coptic"]
//!     B --> D["to_jdn / from_jdn / convert"]
//!     C --> D
//!     E["guess_era_from_jdn / era_for_ethiopic_year"] --> D
//!     D --> F["Engine (session date + era)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use ethcal_calendar::{Calendar, CalendarDate, Engine, Era, convert, to_jdn};
//!
//! // Pure conversion
//! let gc: CalendarDate = "12/9/2015".parse().unwrap();
//! let et = convert(Calendar::Gregorian, Calendar::Ethiopic, gc, None).unwrap();
//! assert_eq!(et.to_string(), "1/1/2008");
//!
//! // Interchange through the JDN
//! let jdn = to_jdn(Calendar::Ethiopic, et, Some(Era::AmeteMihret)).unwrap();
//! assert_eq!(jdn.get(), 2457278);
//!
//! // Session wrapper with a scoped era
//! let mut engine = Engine::new();
//! let gc = engine
//!     .ethiopic_to_gregorian_in_era(CalendarDate::new(7508, 1, 1), Era::AmeteAlem)
//!     .unwrap();
//! assert_eq!(gc.to_string(), "12/9/2015");
//! assert!(!engine.is_era_set());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `arith` | Floor division and modulus |
//! | `era` | Epoch offsets and era resolution |
//! | `jdn` | Julian Day Number newtype |
//! | `date` | Calendar identifiers and the date triple, `day/month/year` form |
//! | `gregorian` | Proleptic Gregorian ↔ JDN |
//! | `ethiopic` | Ethiopic / Coptic ↔ JDN |
//! | `conversion` | Pure multi-calendar API |
//! | `engine` | Stateful wrapper with session date and era |
//! | `error` | Error types |

mod arith;
mod conversion;
mod date;
mod engine;
mod era;
mod error;
mod ethiopic;
mod gregorian;
mod jdn;

pub use arith::{floor_mod, quotient};
pub use conversion::{
    convert, coptic_to_gregorian, ethiopic_to_gregorian, from_jdn, gregorian_to_coptic,
    gregorian_to_ethiopic, to_jdn,
};
pub use date::{Calendar, CalendarDate, MAX_ABS_YEAR};
pub use engine::{Engine, SessionState};
pub use era::{
    ERA_UNSET_OFFSET, Era, JD_EPOCH_OFFSET_AMETE_ALEM, JD_EPOCH_OFFSET_AMETE_MIHRET,
    JD_EPOCH_OFFSET_COPTIC, JD_EPOCH_OFFSET_GREGORIAN, era_for_ethiopic_year, guess_era_from_jdn,
};
pub use error::CalendarError;
pub use ethiopic::{eth_coptic_to_jdn, ethiopic_month_days, is_ethiopic_leap_year, jdn_to_eth_coptic};
pub use gregorian::{gregorian_month_days, gregorian_to_jdn, is_gregorian_leap_year, jdn_to_gregorian};
pub use jdn::{Jdn, MAX_ABS_JDN};
