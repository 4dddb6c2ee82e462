use crate::value_display;
use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};
use std::fmt::Formatter;

#[derive(
    Eq, Hash, Debug, PartialEq, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd, Readable,
    Writable,
)]
pub struct Int(pub i64);

impl Int {
    pub fn new(int: i64) -> Int {
        Int(int)
    }
}

value_display!(Int);
