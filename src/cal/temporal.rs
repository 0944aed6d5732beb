//! Field and unit access for the local date and time types.

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Year, MILLIS_IN_DAY};
use crate::cal::quarter::Quarter;
use crate::error::Error;
use crate::field::{ChronoField, TemporalField, ValueRange};
use crate::field::half::HALF_YEARS;
use crate::temporal::{Temporal, TemporalUnit};
use crate::unit::{convert, CalendarUnit};
use crate::util::{add_exact, mul_exact, split_cycles};


impl Temporal for LocalDate {
    fn is_supported_field(&self, field: ChronoField) -> bool {
        field.is_date_based()
    }

    fn is_supported_unit(&self, unit: CalendarUnit) -> bool {
        unit.is_date_based()
    }

    fn get_field(&self, field: ChronoField) -> Result<i64, Error> {
        Ok(match field {
            ChronoField::DayOfWeek       => self.weekday().days_from_monday_as_one() as i64,
            ChronoField::DayOfMonth      => self.day() as i64,
            ChronoField::DayOfYear       => self.yearday() as i64,
            ChronoField::DayOfQuarter    => day_of_quarter(self),
            ChronoField::MonthOfYear     => self.month() as i64,
            ChronoField::QuarterOfYear   => Quarter::from_month(self.month()).value(),
            ChronoField::ProlepticMonth  => self.proleptic_month(),
            ChronoField::Year            => self.year(),
            ChronoField::EpochDay        => self.epoch_day(),
            _                            => return Err(Error::UnsupportedField(field.name())),
        })
    }

    fn field_range(&self, field: ChronoField) -> Result<ValueRange, Error> {
        let leap = self.is_leap_year();

        match field {
            ChronoField::DayOfMonth    => Ok(ValueRange::of(1, self.month().days_in_month(leap) as i64)),
            ChronoField::DayOfYear     => Ok(ValueRange::of(1, Year(self.year()).day_count() as i64)),
            ChronoField::DayOfQuarter  => Ok(ValueRange::of(1, Quarter::from_month(self.month()).length(leap) as i64)),
            _ if field.is_date_based() => Ok(field.range()),
            _                          => Err(Error::UnsupportedField(field.name())),
        }
    }

    fn with_field(&self, field: ChronoField, value: i64) -> Result<Self, Error> {
        let value = field.check_valid_value(value)?;

        match field {
            ChronoField::DayOfWeek | ChronoField::DayOfQuarter => {
                let _ = self.field_range(field)?.check_valid_value(value, field.name())?;
                Ok(self.plus_days(value - self.get_field(field)?)?)
            },
            ChronoField::DayOfMonth => {
                Ok(LocalDate::ymd(self.year(), self.month(), value as i8)?)
            },
            ChronoField::DayOfYear => {
                Ok(LocalDate::yd(self.year(), value)?)
            },
            ChronoField::MonthOfYear => {
                Ok(self.plus_months(value - self.month() as i64)?)
            },
            ChronoField::QuarterOfYear => {
                let current = self.get_field(ChronoField::QuarterOfYear)?;
                Ok(self.plus_months((value - current) * 3)?)
            },
            ChronoField::ProlepticMonth => {
                Ok(self.plus_months(value - self.proleptic_month())?)
            },
            ChronoField::Year => {
                let month = self.month();
                let day = std::cmp::min(self.day(), Year(value).month(month).day_count());
                Ok(LocalDate::ymd(value, month, day)?)
            },
            ChronoField::EpochDay => {
                Ok(LocalDate::from_epoch_day(value)?)
            },
            _ => Err(Error::UnsupportedField(field.name())),
        }
    }

    fn plus(&self, amount: i64, unit: CalendarUnit) -> Result<Self, Error> {
        match unit {
            CalendarUnit::Days       => Ok(self.plus_days(amount)?),
            CalendarUnit::Weeks      => Ok(self.plus_days(mul_exact(amount, 7)?)?),
            CalendarUnit::HalfYears  => HALF_YEARS.add_to(*self, amount),
            _ => match unit.month_factor() {
                Some(factor)  => Ok(self.plus_months(mul_exact(amount, factor)?)?),
                None          => Err(Error::UnsupportedUnit(unit)),
            },
        }
    }

    fn until(&self, end: &Self, unit: CalendarUnit) -> Result<i64, Error> {
        match unit {
            CalendarUnit::Days       => Ok(end.epoch_day() - self.epoch_day()),
            CalendarUnit::Weeks      => Ok((end.epoch_day() - self.epoch_day()) / 7),
            CalendarUnit::HalfYears  => HALF_YEARS.between(self, end),
            _ => match unit.month_factor() {
                Some(factor)  => Ok(self.months_until(end) / factor),
                None          => Err(Error::UnsupportedUnit(unit)),
            },
        }
    }
}

fn day_of_quarter(date: &LocalDate) -> i64 {
    let first_month = Quarter::from_month(date.month()).first_month();
    let mut start = first_month.days_before_start() as i64;
    if date.is_leap_year() && first_month > Month::February {
        start += 1;
    }

    date.yearday() as i64 - start
}


impl Temporal for LocalTime {
    fn is_supported_field(&self, field: ChronoField) -> bool {
        field.is_time_based()
    }

    fn is_supported_unit(&self, unit: CalendarUnit) -> bool {
        unit.is_time_based()
    }

    fn get_field(&self, field: ChronoField) -> Result<i64, Error> {
        use crate::field::ChronoField::*;

        Ok(match field {
            MilliOfSecond   => self.millisecond() as i64,
            SecondOfMinute  => self.second() as i64,
            MinuteOfHour    => self.minute() as i64,
            MinuteOfDay     => self.hour() as i64 * 60 + self.minute() as i64,
            HourOfDay       => self.hour() as i64,
            AmPmOfDay       => self.hour() as i64 / 12,
            _               => return Err(Error::UnsupportedField(field.name())),
        })
    }

    fn with_field(&self, field: ChronoField, value: i64) -> Result<Self, Error> {
        use crate::field::ChronoField::*;

        let value = field.check_valid_value(value)?;
        let (h, m, s, ms) = (self.hour(), self.minute(), self.second(), self.millisecond());

        let time = match field {
            MilliOfSecond   => LocalTime::hms_ms(h, m, s, value as i16)?,
            SecondOfMinute  => LocalTime::hms_ms(h, m, value as i8, ms)?,
            MinuteOfHour    => LocalTime::hms_ms(h, value as i8, s, ms)?,
            MinuteOfDay     => LocalTime::hms_ms((value / 60) as i8, (value % 60) as i8, s, ms)?,
            HourOfDay       => LocalTime::hms_ms(value as i8, m, s, ms)?,
            AmPmOfDay       => LocalTime::hms_ms((h % 12) + (value * 12) as i8, m, s, ms)?,
            _               => return Err(Error::UnsupportedField(field.name())),
        };

        Ok(time)
    }

    fn plus(&self, amount: i64, unit: CalendarUnit) -> Result<Self, Error> {
        let (_, millis) = split_time_amount(amount, unit)?;
        Ok(LocalTime::from_millis_of_day(self.to_millis_of_day() + millis))
    }

    fn until(&self, end: &Self, unit: CalendarUnit) -> Result<i64, Error> {
        if !unit.is_time_based() {
            return Err(Error::UnsupportedUnit(unit));
        }

        let millis = end.to_millis_of_day() - self.to_millis_of_day();
        Ok(convert(millis, CalendarUnit::Millis, unit)?.0)
    }
}

/// Splits an amount of a time-based unit into a number of whole days and
/// the milliseconds left over.
///
/// Times only have millisecond precision, so an amount of nanoseconds or
/// microseconds that isn’t a whole number of milliseconds is an error.
fn split_time_amount(amount: i64, unit: CalendarUnit) -> Result<(i64, i64), Error> {
    if !unit.is_time_based() {
        return Err(Error::UnsupportedUnit(unit));
    }

    let (days, amount, unit) = if unit < CalendarUnit::Millis {
        let (millis, remainder) = convert(amount, unit, CalendarUnit::Millis)?;
        if remainder != 0 {
            return Err(Error::IncompatibleAmount { value: amount, unit, target: CalendarUnit::Millis });
        }

        (millis / MILLIS_IN_DAY, millis % MILLIS_IN_DAY, CalendarUnit::Millis)
    }
    else {
        let (per_day, _) = convert(1, CalendarUnit::Days, unit)?;
        (amount / per_day, amount % per_day, unit)
    };

    let (millis, _) = convert(amount, unit, CalendarUnit::Millis)?;
    Ok((days, millis))
}


impl Temporal for LocalDateTime {
    fn is_supported_field(&self, _field: ChronoField) -> bool {
        true
    }

    fn is_supported_unit(&self, unit: CalendarUnit) -> bool {
        unit < CalendarUnit::Eras
    }

    fn get_field(&self, field: ChronoField) -> Result<i64, Error> {
        if field.is_date_based() { self.date().get_field(field) }
                            else { self.time().get_field(field) }
    }

    fn field_range(&self, field: ChronoField) -> Result<ValueRange, Error> {
        if field.is_date_based() { self.date().field_range(field) }
                            else { self.time().field_range(field) }
    }

    fn with_field(&self, field: ChronoField, value: i64) -> Result<Self, Error> {
        if field.is_date_based() {
            Ok(LocalDateTime::new(self.date().with_field(field, value)?, self.time()))
        }
        else {
            Ok(LocalDateTime::new(self.date(), self.time().with_field(field, value)?))
        }
    }

    fn plus(&self, amount: i64, unit: CalendarUnit) -> Result<Self, Error> {
        if !unit.is_time_based() {
            return Ok(LocalDateTime::new(self.date().plus(amount, unit)?, self.time()));
        }

        let (days, millis) = split_time_amount(amount, unit)?;
        let (extra_days, millis) = split_cycles(self.time().to_millis_of_day() + millis, MILLIS_IN_DAY);
        let date = self.date().plus_days(add_exact(days, extra_days)?)?;
        Ok(LocalDateTime::new(date, LocalTime::from_millis_of_day(millis)))
    }

    fn until(&self, end: &Self, unit: CalendarUnit) -> Result<i64, Error> {
        if unit.is_time_based() {
            let days = end.date().epoch_day() - self.date().epoch_day();
            let millis = add_exact(mul_exact(days, MILLIS_IN_DAY)?, end.time().to_millis_of_day() - self.time().to_millis_of_day())?;
            return Ok(convert(millis, CalendarUnit::Millis, unit)?.0);
        }

        // A day only counts once the time of day has been reached.
        let mut end_date = end.date();
        if end_date > self.date() && end.time() < self.time() {
            end_date = end_date.plus_days(-1)?;
        }
        else if end_date < self.date() && end.time() > self.time() {
            end_date = end_date.plus_days(1)?;
        }

        self.date().until(&end_date, unit)
    }
}
