use crate::value_display;
use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};
use std::fmt::Formatter;

#[derive(
    Eq, Hash, Debug, PartialEq, Clone, Copy, Serialize, Deserialize, Ord, PartialOrd, Readable,
    Writable,
)]
pub struct Bool(pub bool);

impl Bool {
    pub fn new(bool: bool) -> Bool {
        Bool(bool)
    }
}

value_display!(Bool);
