use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};
use std::cmp::Ordering;
use std::fmt::Formatter;

use crate::Value;
use chrono::{TimeZone, Utc};

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize, Readable, Writable, Copy)]
pub struct Time {
    pub ms: i64,
    pub ns: u32,
}

impl Time {
    pub fn new(ms: i64, ns: u32) -> Time {
        if ns >= 1000000 {
            let ms = ms + (ns / 1000000) as i64;
            let ns = ns % 1000000;
            return Time { ns, ms };
        }
        Time { ms, ns }
    }
}

impl From<Time> for Value {
    fn from(time: Time) -> Self {
        Value::Time(time)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let time = Utc.timestamp_millis_opt(self.ms).unwrap();
        let string = if self.ns > 0 {
            time.format("%H:%M:%S%.6f").to_string()
        } else {
            time.format("%H:%M:%S").to_string()
        };

        write!(f, "{}", string)
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.ms.cmp(&other.ms) {
            Ordering::Equal => self.ns.cmp(&other.ns),
            ord => ord,
        }
    }
}
