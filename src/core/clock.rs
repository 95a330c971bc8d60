use chrono::{FixedOffset, NaiveDate, Offset, Utc};

/// Source of "today" for enrichment.
pub trait DateProvider: Send + Sync {
    fn now(&self) -> NaiveDate;
}

/// Wall clock, read at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemDateProvider {
    offset: FixedOffset,
}

impl SystemDateProvider {
    /// UTC−05:00, America/Lima (no daylight saving).
    pub const LIMA_OFFSET_SECS: i32 = -5 * 3600;

    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Default for SystemDateProvider {
    fn default() -> Self {
        let offset = FixedOffset::east_opt(Self::LIMA_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
        Self { offset }
    }
}

impl DateProvider for SystemDateProvider {
    fn now(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateProvider(pub NaiveDate);

impl DateProvider for FixedDateProvider {
    fn now(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_provider_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2019, 12, 24).unwrap();
        assert_eq!(FixedDateProvider(date).now(), date);
    }

    #[test]
    fn system_provider_is_close_to_utc() {
        let lima = SystemDateProvider::default().now();
        let utc = Utc::now().date_naive();
        let diff = (utc - lima).num_days();
        assert!((0..=1).contains(&diff));
    }
}
