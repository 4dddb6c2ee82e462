use crate::value_display;
use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};
use std::fmt::Formatter;

#[derive(
    Eq, Hash, Debug, PartialEq, Clone, Serialize, Deserialize, Ord, PartialOrd, Readable, Writable,
)]
pub struct Text(pub String);

impl Text {
    pub fn new(string: &str) -> Text {
        Text(string.to_string())
    }
}

value_display!(Text);
