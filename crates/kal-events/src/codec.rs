//! Legacy 16-bit frequency encoding.
//!
//! Calendar files written by earlier releases store a recurrence rule as a
//! single 16-bit integer: a two-bit rule selector in bits 13–14 over a
//! 13-bit rule-specific payload.
//!
//! | selector | rule           | payload                                        |
//! |----------|----------------|------------------------------------------------|
//! | `00`     | by date        | bit 10 weekly, bit 11 monthly, bit 12 yearly   |
//! | `01`     | by weekday     | bits 7–9 weekday (0 = Monday), bits 10–12 index |
//! | `10`     | by interval    | bits 0–1 unit, bits 2–12 count                 |
//! | `11`     | by end of month| none                                           |
//!
//! Bit 15 is never used.  [`unpack`] rejects any code with payload bits set
//! outside its rule's fields, so every accepted code is canonical and
//! [`pack`] reproduces it bit for bit.

use kal_core::errors::{Error, Result};
use kal_time::{TimeUnit, Weekday};

use crate::frequency::Frequency;

const MODE_SHIFT: u16 = 13;
const MODE_BY_DATE: u16 = 0b00;
const MODE_BY_WEEKDAY: u16 = 0b01;
const MODE_BY_INTERVAL: u16 = 0b10;
const MODE_BY_END_OF_MONTH: u16 = 0b11;

const PAYLOAD_MASK: u16 = (1 << MODE_SHIFT) - 1;

const WEEKLY_BIT: u16 = 1 << 10;
const MONTHLY_BIT: u16 = 1 << 11;
const YEARLY_BIT: u16 = 1 << 12;

const WEEKDAY_SHIFT: u16 = 7;
const WEEKDAY_MASK: u16 = 0b111 << WEEKDAY_SHIFT;
const INDEX_SHIFT: u16 = 10;
const INDEX_MASK: u16 = 0b111 << INDEX_SHIFT;

const UNIT_MASK: u16 = 0b11;
const COUNT_SHIFT: u16 = 2;
const COUNT_MASK: u16 = PAYLOAD_MASK & !UNIT_MASK;

/// Encode a recurrence rule as its legacy 16-bit code.
///
/// `Once` and the flagless by-date rule both encode as 0.
pub fn pack(frequency: &Frequency) -> u16 {
    match *frequency {
        Frequency::Once => 0,
        Frequency::ByDate {
            weekly,
            monthly,
            yearly,
        } => {
            let mut bits = MODE_BY_DATE << MODE_SHIFT;
            if weekly {
                bits |= WEEKLY_BIT;
            }
            if monthly {
                bits |= MONTHLY_BIT;
            }
            if yearly {
                bits |= YEARLY_BIT;
            }
            bits
        }
        Frequency::ByWeekday { weekday, index } => {
            (MODE_BY_WEEKDAY << MODE_SHIFT)
                | (u16::from(weekday.index()) << WEEKDAY_SHIFT)
                | (u16::from(index) << INDEX_SHIFT)
        }
        Frequency::ByInterval { count, unit } => {
            (MODE_BY_INTERVAL << MODE_SHIFT) | (count << COUNT_SHIFT) | unit_bits(unit)
        }
        Frequency::ByEndOfMonth => MODE_BY_END_OF_MONTH << MODE_SHIFT,
    }
}

/// Decode a legacy 16-bit frequency code.
///
/// Rejects codes with the unused bit 15 set, stray payload bits outside
/// the rule's fields, or out-of-range field values.
pub fn unpack(bits: u16) -> Result<Frequency> {
    if bits & 0x8000 != 0 {
        return Err(Error::Frequency(format!(
            "unused high bit set in frequency code {bits:#06x}"
        )));
    }
    let payload = bits & PAYLOAD_MASK;
    match bits >> MODE_SHIFT {
        MODE_BY_DATE => {
            if payload & !(WEEKLY_BIT | MONTHLY_BIT | YEARLY_BIT) != 0 {
                return Err(stray_bits(bits));
            }
            Ok(Frequency::by_date(
                payload & WEEKLY_BIT != 0,
                payload & MONTHLY_BIT != 0,
                payload & YEARLY_BIT != 0,
            ))
        }
        MODE_BY_WEEKDAY => {
            if payload & !(WEEKDAY_MASK | INDEX_MASK) != 0 {
                return Err(stray_bits(bits));
            }
            let weekday_index = ((payload & WEEKDAY_MASK) >> WEEKDAY_SHIFT) as u8;
            let weekday = Weekday::from_index(weekday_index).ok_or_else(|| {
                Error::Frequency(format!(
                    "weekday {weekday_index} out of range in frequency code {bits:#06x}"
                ))
            })?;
            let index = ((payload & INDEX_MASK) >> INDEX_SHIFT) as u8;
            Frequency::by_weekday(weekday, index)
        }
        MODE_BY_INTERVAL => {
            let count = (payload & COUNT_MASK) >> COUNT_SHIFT;
            let unit = match payload & UNIT_MASK {
                0 => TimeUnit::Days,
                1 => TimeUnit::Weeks,
                2 => TimeUnit::Months,
                _ => TimeUnit::Years,
            };
            Frequency::by_interval(count, unit)
        }
        MODE_BY_END_OF_MONTH => {
            if payload != 0 {
                return Err(stray_bits(bits));
            }
            Ok(Frequency::ByEndOfMonth)
        }
        _ => unreachable!("two-bit selector"),
    }
}

fn unit_bits(unit: TimeUnit) -> u16 {
    match unit {
        TimeUnit::Days => 0,
        TimeUnit::Weeks => 1,
        TimeUnit::Months => 2,
        TimeUnit::Years => 3,
    }
}

fn stray_bits(bits: u16) -> Error {
    Error::Frequency(format!("stray payload bits in frequency code {bits:#06x}"))
}
