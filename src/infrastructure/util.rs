use crate::application::ports::util::{Clock, SlugGenerator};
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use slug::slugify;

/// Wall clock truncated to the microsecond precision Postgres stores, so a
/// freshly built entity compares equal to its persisted row.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        let now = Utc::now();
        now.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(now)
    }
}

/// ASCII transliterating slugger backed by the `slug` crate.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::is_valid_slug;

    #[test]
    fn produces_valid_slugs() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Tomato Soup 2"), "tomato-soup-2");
        assert_eq!(slugger.slugify("Crème Brûlée"), "creme-brulee");
        assert!(is_valid_slug(&slugger.slugify("Pad  Thai")));
    }

    #[test]
    fn clock_drops_sub_microsecond_digits() {
        let now = SystemClock.now();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000, 0);
    }
}
