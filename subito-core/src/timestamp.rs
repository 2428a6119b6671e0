//! SRT timecode formatting.
//!
//! Converts recognition time offsets into the `HH:MM:SS,mmm` representation
//! used by SRT timecodes.

use crate::error::DurationError;
use crate::types::TimeOffset;
use std::fmt;

const NANOS_PER_MILLI: i32 = 1_000_000;
const MAX_NANOS: i32 = 999_999_999;

/// SRT timecode split into its rendered fields.
///
/// `Display` zero-pads every field to its minimum width. Hours grow past two
/// digits instead of truncating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SrtTimestamp {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub millis: u16,
}

impl SrtTimestamp {
    /// Split a time offset into SRT timecode fields.
    ///
    /// Fails when the offset has negative seconds or a nanos field outside
    /// `0..=999_999_999`.
    pub fn from_offset(offset: &TimeOffset) -> Result<Self, DurationError> {
        if offset.seconds < 0 {
            return Err(DurationError::NegativeSeconds(offset.seconds));
        }
        if !(0..=MAX_NANOS).contains(&offset.nanos) {
            return Err(DurationError::NanosOutOfRange(offset.nanos));
        }

        let total = offset.seconds as u64;

        Ok(Self {
            hours: total / 3600,
            minutes: ((total % 3600) / 60) as u8,
            seconds: (total % 60) as u8,
            millis: (offset.nanos / NANOS_PER_MILLI) as u16,
        })
    }
}

impl fmt::Display for SrtTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(seconds: i64, nanos: i32) -> String {
        SrtTimestamp::from_offset(&TimeOffset::new(seconds, nanos))
            .unwrap()
            .to_string()
    }

    /// Recover (hours, minutes, seconds, millis) from a rendered timecode.
    fn parse(rendered: &str) -> (u64, u8, u8, u16) {
        let (clock, millis) = rendered.split_once(',').unwrap();
        let mut fields = clock.split(':');
        (
            fields.next().unwrap().parse().unwrap(),
            fields.next().unwrap().parse().unwrap(),
            fields.next().unwrap().parse().unwrap(),
            millis.parse().unwrap(),
        )
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format(0, 0), "00:00:00,000");
    }

    #[test]
    fn formats_mixed_fields() {
        assert_eq!(format(3661, 250_000_000), "01:01:01,250");
    }

    #[test]
    fn floors_nanos_to_millis() {
        assert_eq!(format(0, 999_999), "00:00:00,000");
        assert_eq!(format(0, 1_999_999), "00:00:00,001");
        assert_eq!(format(0, 999_999_999), "00:00:00,999");
    }

    #[test]
    fn widens_hours_past_two_digits() {
        assert_eq!(format(362_625, 7_000_000), "100:43:45,007");
        assert_eq!(format(359_999_999, 0), "99999:59:59,000");
    }

    #[test]
    fn rejects_negative_seconds() {
        let err = SrtTimestamp::from_offset(&TimeOffset::new(-1, 0)).unwrap_err();
        assert_eq!(err, DurationError::NegativeSeconds(-1));
    }

    #[test]
    fn rejects_out_of_range_nanos() {
        let err = SrtTimestamp::from_offset(&TimeOffset::new(0, 1_000_000_000)).unwrap_err();
        assert_eq!(err, DurationError::NanosOutOfRange(1_000_000_000));

        let err = SrtTimestamp::from_offset(&TimeOffset::new(0, -1)).unwrap_err();
        assert_eq!(err, DurationError::NanosOutOfRange(-1));
    }

    #[test]
    fn rendered_fields_round_trip() {
        let cases = [
            (0, 0),
            (59, 999_000_000),
            (60, 1_000_000),
            (3599, 500_000_000),
            (3600, 0),
            (86_399, 123_000_000),
            (362_625, 7_000_000),
            (359_999_999, 999_999_999),
        ];

        for (seconds, nanos) in cases {
            let ts = SrtTimestamp::from_offset(&TimeOffset::new(seconds, nanos)).unwrap();
            let (hours, minutes, secs, millis) = parse(&ts.to_string());

            assert_eq!(
                (hours, minutes, secs, millis),
                (ts.hours, ts.minutes, ts.seconds, ts.millis),
                "round trip failed for ({seconds}, {nanos})"
            );
        }
    }
}
