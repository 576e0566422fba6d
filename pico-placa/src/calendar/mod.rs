//! Ecuadorian public holiday computation.
//!
//! Holidays come in three kinds:
//! - fixed dates (New Year's Day, Christmas Day)
//! - Easter-relative dates (Carnival, Good Friday, Easter Sunday)
//! - civic dates moved to a nearby Friday or Monday by statute
//!
//! Everything here is pure: the same (year, province) always yields the
//! same calendar, so callers are free to cache per year.

mod easter;
mod ecuador;
mod error;
mod shift;

pub use easter::easter_sunday;
pub use ecuador::{
    ALL_SOULS_DAY, BATTLE_OF_PICHINCHA, CARNIVAL_MONDAY, CARNIVAL_TUESDAY, CHRISTMAS,
    EASTER_SUNDAY, FIRST_CRY_OF_INDEPENDENCE, FOUNDATION_OF_QUITO, GOOD_FRIDAY,
    HolidayCalendar, INDEPENDENCE_OF_CUENCA, INDEPENDENCE_OF_GUAYAQUIL, LABOUR_DAY, NEW_YEAR,
    holidays_for_year,
};
pub use error::{CalendarError, SUPPORTED_YEARS};
pub use shift::{
    LAST_UNSHIFTED_YEAR, NovemberPair, NovemberRule, all_souls_and_cuenca, shift_observance,
};
