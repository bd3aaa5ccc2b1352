//! Date-range report presets
//!
//! Each preset is a pure function of "today". Month and year boundaries come
//! from chrono's calendar arithmetic, so month lengths and leap years are
//! handled by the library.

use crate::types::DateRange;
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

/// Preset reporting periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// First day of the current month through today
    MonthToDate,

    /// First through last day of the previous month
    PreviousMonth,

    /// First day of the current year through today
    YearToDate,

    /// January 1st through December 31st of the previous year
    PreviousYear,
}

impl ReportPeriod {
    /// Compute the inclusive date range for this period
    ///
    /// Returns `None` only when the period falls outside chrono's supported
    /// calendar range.
    pub fn range(self, today: NaiveDate) -> Option<DateRange> {
        match self {
            ReportPeriod::MonthToDate => {
                Some(DateRange::new(first_day_of_month(today)?, today))
            }
            ReportPeriod::PreviousMonth => {
                let start = first_day_of_month(today)?.checked_sub_months(Months::new(1))?;
                Some(DateRange::new(start, last_day_of_month(start)?))
            }
            ReportPeriod::YearToDate => Some(DateRange::new(
                NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
                today,
            )),
            ReportPeriod::PreviousYear => {
                let year = today.year() - 1;
                Some(DateRange::new(
                    NaiveDate::from_ymd_opt(year, 1, 1)?,
                    NaiveDate::from_ymd_opt(year, 12, 31)?,
                ))
            }
        }
    }

    /// Title shown above the report
    pub fn title(self) -> &'static str {
        match self {
            ReportPeriod::MonthToDate => "Month To Date",
            ReportPeriod::PreviousMonth => "Previous Month",
            ReportPeriod::YearToDate => "Year To Date",
            ReportPeriod::PreviousYear => "Previous Year",
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

fn first_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

fn last_day_of_month(date: NaiveDate) -> Option<NaiveDate> {
    first_day_of_month(date)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}
