use crate::array::Array;
use crate::date::Date;
use crate::dict::Dict;
use crate::r#type::ValType;
use crate::text::Text;
use crate::time::Time;
use crate::value::Value::Null;
use crate::{Bool, Float, Int};
use serde::{Deserialize, Serialize};
use speedy::{Readable, Writable};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug, Serialize, Deserialize, Ord, PartialOrd, Readable, Writable)]
pub enum Value {
    Int(Int),
    Float(Float),
    Bool(Bool),
    Text(Text),
    Time(Time),
    Date(Date),
    Array(Array),
    Dict(Dict),
    Null,
}

impl Value {
    pub fn text(string: &str) -> Value {
        Value::Text(Text(string.to_string()))
    }

    pub fn int(int: i64) -> Value {
        Value::Int(Int(int))
    }

    pub fn float(float: f64) -> Value {
        Value::Float(Float::new(float))
    }

    pub fn float_parts(number: i64, shift: u8) -> Value {
        Value::Float(Float { number, shift })
    }

    pub fn bool(bool: bool) -> Value {
        Value::Bool(Bool(bool))
    }

    pub fn time(ms: i64, ns: u32) -> Value {
        Value::Time(Time::new(ms, ns))
    }

    pub fn date(days: i64) -> Value {
        Value::Date(Date::new(days))
    }

    pub fn array(values: Vec<Value>) -> Value {
        Value::Array(Array::new(values))
    }

    pub fn dict(values: BTreeMap<String, Value>) -> Value {
        Value::Dict(Dict::new(values))
    }

    pub fn dict_from_kv(key: &str, value: Value) -> Value {
        Self::dict_from_pairs(vec![(key, value)])
    }

    pub fn dict_from_pairs(pairs: Vec<(&str, Value)>) -> Value {
        let mut map = BTreeMap::new();
        pairs.into_iter().for_each(|(k, v)| {
            map.insert(k.to_string(), v);
        });
        Value::Dict(Dict::new(map))
    }

    pub fn null() -> Value {
        Null
    }

    pub fn type_(&self) -> ValType {
        match self {
            Value::Int(_) => ValType::Integer,
            Value::Float(_) => ValType::Float,
            Value::Bool(_) => ValType::Bool,
            Value::Text(_) => ValType::Text,
            Value::Time(_) => ValType::Time,
            Value::Date(_) => ValType::Date,
            Value::Array(_) => ValType::Array,
            Value::Dict(_) => ValType::Dict,
            Null => ValType::Null,
        }
    }

    pub fn as_int(&self) -> Result<Int, String> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Float(f) => Ok(Int(f.as_f64() as i64)),
            Value::Bool(b) => Ok(if b.0 { Int(1) } else { Int(0) }),
            Value::Text(t) => t.0.parse::<i64>().map(Int).map_err(|err| err.to_string()),
            Value::Time(t) => Ok(Int(t.ms)),
            Value::Date(d) => Ok(Int(d.as_epoch())),
            Value::Array(_) => Err(String::from("Array cannot be converted")),
            Value::Dict(_) => Err(String::from("Dict cannot be converted")),
            Null => Err(String::from("Null cannot be converted")),
        }
    }

    pub fn as_float(&self) -> Result<Float, String> {
        match self {
            Value::Int(i) => Ok(Float::new(i.0 as f64)),
            Value::Float(f) => Ok(*f),
            Value::Bool(b) => Ok(if b.0 {
                Float::new(1f64)
            } else {
                Float::new(0f64)
            }),
            Value::Text(t) => {
                t.0.parse::<f64>()
                    .map(Float::new)
                    .map_err(|e| e.to_string())
            }
            Value::Time(t) => Ok(Float::new(t.ms as f64)),
            Value::Date(d) => Ok(Float::new(d.as_epoch() as f64)),
            Value::Array(_) => Err(String::from("Array cannot be converted")),
            Value::Dict(_) => Err(String::from("Dict cannot be converted")),
            Null => Err(String::from("Null cannot be converted")),
        }
    }

    pub fn as_bool(&self) -> Result<Bool, String> {
        match self {
            Value::Int(i) => Ok(Bool(i.0 > 0)),
            Value::Float(f) => Ok(Bool(f.number > 0)),
            Value::Bool(b) => Ok(*b),
            Value::Text(t) => match t.0.to_lowercase().trim() {
                "true" | "1" => Ok(Bool(true)),
                _ => Ok(Bool(false)),
            },
            Value::Time(t) => Ok(Bool(t.ms > 0)),
            Value::Date(d) => Ok(Bool(d.days > 0)),
            Value::Array(a) => Ok(Bool(!a.values.is_empty())),
            Value::Dict(d) => Ok(Bool(!d.is_empty())),
            Null => Ok(Bool(false)),
        }
    }

    pub fn as_text(&self) -> Result<Text, String> {
        match self {
            Value::Int(i) => Ok(Text(i.0.to_string())),
            Value::Float(f) => Ok(Text(f.as_f64().to_string())),
            Value::Bool(b) => Ok(Text(b.0.to_string())),
            Value::Text(t) => Ok(t.clone()),
            Value::Time(t) => Ok(Text(t.to_string())),
            Value::Date(d) => Ok(Text(d.to_string())),
            Value::Array(a) => Ok(Text(format!(
                "[{}]",
                a.values
                    .iter()
                    .map(|v| v.as_text().unwrap().0)
                    .collect::<Vec<String>>()
                    .join(",")
            ))),
            Value::Dict(d) => Ok(Text(format!(
                "[{}]",
                d.iter()
                    .map(|(k, v)| format!("{}:{}", k, v.as_text().unwrap().0))
                    .collect::<Vec<String>>()
                    .join(",")
            ))),
            Null => Ok(Text("null".to_owned())),
        }
    }

    pub fn as_dict(&self) -> Result<Dict, String> {
        match self {
            Value::Dict(d) => Ok(d.clone()),
            _ => Err(String::from("Dict cannot be converted")),
        }
    }

    pub fn as_array(&self) -> Result<Array, String> {
        match self {
            Value::Array(a) => Ok(a.clone()),
            _ => Err(String::from("Array cannot be converted")),
        }
    }
}

// Define the macro
#[macro_export]
macro_rules! value_display {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl Eq for Value {}

// Strict structural equality: values of different kinds never compare equal,
// floats normalize first, arrays and dicts recurse element-wise.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Null, Null) => true,
            (Value::Int(a), Value::Int(b)) => a.0 == b.0,
            (Value::Float(a), Value::Float(b)) => {
                let a = a.normalize();
                let b = b.normalize();
                a.number == b.number && a.shift == b.shift
            }
            (Value::Bool(a), Value::Bool(b)) => a.0 == b.0,
            (Value::Text(a), Value::Text(b)) => a.0 == b.0,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.values.len() == b.values.len()
                    && a.values.iter().zip(b.values.iter()).all(|(a, b)| a == b)
            }
            (Value::Dict(a), Value::Dict(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
            }
            (_, _) => false,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Int(i) => {
                i.0.hash(state);
            }
            Value::Float(f) => {
                let f = f.normalize();
                state.write_i64(f.number);
                state.write_u8(f.shift);
            }
            Value::Bool(b) => {
                b.0.hash(state);
            }
            Value::Text(t) => {
                t.0.hash(state);
            }
            Value::Time(t) => {
                t.ms.hash(state);
                t.ns.hash(state)
            }
            Value::Date(d) => {
                d.days.hash(state);
            }
            Value::Array(a) => {
                for val in &(*a.values) {
                    val.hash(state)
                }
            }
            Value::Dict(d) => {
                for (k, v) in d.iter() {
                    k.hash(state);
                    v.hash(state);
                }
            }
            Null => {
                "null".hash(state);
            }
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => i.fmt(f),
            Value::Float(float) => float.fmt(f),
            Value::Bool(b) => b.fmt(f),
            Value::Text(t) => t.fmt(f),
            Value::Time(t) => t.fmt(f),
            Value::Date(d) => d.fmt(f),
            Value::Array(a) => a.fmt(f),
            Value::Dict(d) => d.fmt(f),
            Null => write!(f, "null"),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::int(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::text(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::text(&value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;
    use std::collections::HashMap;
    use std::vec;

    #[test]
    fn value_equality() {
        assert_eq!(Value::int(42), Value::int(42));
        assert_ne!(Value::int(42), Value::int(7));

        assert_eq!(Value::float(3.314), Value::float(3.314));
        assert_ne!(Value::float(3.314), Value::float(2.71));

        assert_eq!(Value::bool(true), Value::bool(true));
        assert_ne!(Value::bool(true), Value::bool(false));

        assert_eq!(Value::text("Hello"), Value::text("Hello"));
        assert_ne!(Value::text("Hello"), Value::text("World"));

        assert_eq!(
            Value::array(vec![3.into(), 5.5.into()]),
            Value::array(vec![3.into(), 5.5.into()])
        );
        assert_ne!(
            Value::array(vec![5.5.into()]),
            Value::array(vec![3.into(), 5.5.into()])
        );
        assert_ne!(
            Value::array(vec![3.into(), 5.5.into()]),
            Value::array(vec![5.5.into(), 3.into()])
        );

        assert_eq!(Value::time(3000, 0), Value::time(3000, 0));
        assert_ne!(Value::time(3000, 50), Value::time(3000, 0));

        assert_eq!(Value::date(3500), Value::date(3500));
        assert_ne!(Value::date(3500), Value::date(3600));

        assert_eq!(Value::null(), Value::null());
    }

    #[test]
    fn value_equality_is_strict() {
        assert_ne!(Value::int(1), Value::text("1"));
        assert_ne!(Value::int(1), Value::bool(true));
        assert_ne!(Value::int(1), Value::float(1.0));
        assert_ne!(Value::null(), Value::bool(false));
        assert_ne!(Value::text("true"), Value::bool(true));
    }

    #[test]
    fn normalized_float_equality() {
        assert_eq!(Value::float_parts(25, 1), Value::float(2.5));
        assert_eq!(Value::float_parts(2500, 3), Value::float(2.5));
        assert_ne!(Value::float_parts(25, 0), Value::float(2.5));
    }

    #[test]
    fn nested_dict_equality() {
        let record = Value::dict_from_pairs(vec![
            ("name", Value::text("sensor")),
            (
                "position",
                Value::dict_from_pairs(vec![("x", 3.into()), ("y", 7.into())]),
            ),
            ("samples", Value::array(vec![1.into(), 2.into(), 3.into()])),
        ]);
        let same = Value::dict_from_pairs(vec![
            ("name", Value::text("sensor")),
            (
                "position",
                Value::dict_from_pairs(vec![("x", 3.into()), ("y", 7.into())]),
            ),
            ("samples", Value::array(vec![1.into(), 2.into(), 3.into()])),
        ]);
        let other = Value::dict_from_pairs(vec![
            ("name", Value::text("sensor")),
            (
                "position",
                Value::dict_from_pairs(vec![("x", 3.into()), ("y", 8.into())]),
            ),
            ("samples", Value::array(vec![1.into(), 2.into(), 3.into()])),
        ]);

        assert_eq!(record, same);
        assert_ne!(record, other);
    }

    #[test]
    fn value_in_vec() {
        let values = vec![
            Value::int(42),
            Value::float(3.314),
            Value::bool(true),
            Value::text("Hello"),
            Value::null(),
            Value::time(3, 0),
            Value::date(305),
            Value::array(vec![3.into(), 7.into()]),
        ];

        assert_eq!(values[0], Value::int(42));
        assert_eq!(values[1], Value::float(3.314));
        assert_eq!(values[2], Value::bool(true));
        assert_eq!(values[3], Value::text("Hello"));
        assert_eq!(values[4], Value::null());
        assert_eq!(values[5], Value::time(3, 0));
        assert_eq!(values[6], Value::date(305));
        assert_eq!(values[7], Value::array(vec![3.into(), 7.into()]));
    }

    #[test]
    fn value_in_map() {
        let mut map = HashMap::new();
        map.insert("int", Value::int(42));
        map.insert("float", Value::float(3.314));
        map.insert("bool", Value::bool(true));
        map.insert("text", Value::text("Hello"));
        map.insert("null", Value::null());
        map.insert("time", Value::time(3, 0));
        map.insert("date", Value::date(305));

        assert_eq!(map.get("int"), Some(&Value::int(42)));
        assert_eq!(map.get("float"), Some(&Value::float(3.314)));
        assert_eq!(map.get("bool"), Some(&Value::bool(true)));
        assert_eq!(map.get("text"), Some(&Value::text("Hello")));
        assert_eq!(map.get("null"), Some(&Value::null()));
        assert_eq!(map.get("time"), Some(&Value::time(3, 0)));
        assert_eq!(map.get("date"), Some(&Value::date(305)));
    }

    #[test]
    fn coercive_accessors() {
        assert_eq!(Value::text("12").as_int().unwrap().0, 12);
        assert_eq!(Value::int(1).as_bool().unwrap().0, true);
        assert_eq!(Value::int(7).as_text().unwrap().0, "7");
        assert_eq!(Value::float(2.5).as_int().unwrap().0, 2);
        assert!(Value::null().as_int().is_err());
        assert!(Value::text("hi").as_int().is_err());
        assert!(Value::array(vec![]).as_dict().is_err());
    }
}
