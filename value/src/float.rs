use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

// Decimal mantissa/shift representation: number * 10^-shift.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Readable, Writable)]
pub struct Float {
    pub number: i64,
    pub shift: u8,
}

impl Float {
    pub fn new(float: f64) -> Float {
        let mut number = float;
        let mut shift = 0u8;
        while (number - number.round()).abs() > 1e-9 && shift < 15 {
            number *= 10.0;
            shift += 1;
        }
        Float {
            number: number.round() as i64,
            shift,
        }
        .normalize()
    }

    pub fn as_f64(&self) -> f64 {
        self.number as f64 / 10i64.pow(self.shift as u32) as f64
    }

    pub fn normalize(&self) -> Float {
        let mut number = self.number;
        let mut shift = self.shift;
        while shift > 0 && number % 10 == 0 {
            number /= 10;
            shift -= 1;
        }
        Float { number, shift }
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        let a = self.normalize();
        let b = other.normalize();
        a.number == b.number && a.shift == b.shift
    }
}

impl Eq for Float {}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        state.write_i64(normalized.number);
        state.write_u8(normalized.shift);
    }
}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_f64()
            .partial_cmp(&other.as_f64())
            .unwrap_or(Ordering::Equal)
    }
}

impl Display for Float {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use crate::Float;

    #[test]
    fn decompose() {
        let float = Float::new(3.314);

        assert_eq!(float.number, 3314);
        assert_eq!(float.shift, 3);
        assert_eq!(float.as_f64(), 3.314);
    }

    #[test]
    fn normalize() {
        let float = Float {
            number: 2500,
            shift: 3,
        }
        .normalize();

        assert_eq!(float.number, 25);
        assert_eq!(float.shift, 1);
        assert_eq!(float, Float::new(2.5));
    }

    #[test]
    fn whole_numbers_keep_no_shift() {
        let float = Float::new(42.0);

        assert_eq!(float.number, 42);
        assert_eq!(float.shift, 0);
    }
}
