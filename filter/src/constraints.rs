use std::collections::BTreeMap;

use crate::Schema;
use error::SieveError;
use tracing::debug;
use value::Value;

/// Equality constraints built against one record shape. Build fully with
/// [`Constraints::add`], then treat the set as frozen; a frozen set only
/// takes `&self` and can be shared across threads for concurrent
/// validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraints {
    schema: Schema,
    expected: BTreeMap<String, Value>,
}

impl Constraints {
    pub fn new(schema: Schema) -> Self {
        Constraints {
            schema,
            expected: BTreeMap::new(),
        }
    }

    /// Builds an empty constraint set against the shape of the given
    /// reference record.
    pub fn for_record(reference: &Value) -> Result<Self, SieveError> {
        Ok(Constraints::new(Schema::of(reference)?))
    }

    /// Adds an equality constraint on a record field. The key must name a
    /// field of the target shape and the value must carry exactly that
    /// field's declared type. Re-adding a key replaces its expected value;
    /// on failure the set is left untouched.
    pub fn add(&mut self, key: &str, value: impl Into<Value>) -> Result<(), SieveError> {
        let value = value.into();
        let Some(expected_type) = self.schema.field_type(key) else {
            return Err(SieveError::NoMatchingField(key.to_string()));
        };
        if value.type_() != *expected_type {
            return Err(SieveError::UnexpectedValueType {
                key: key.to_string(),
                expected: expected_type.to_string(),
                actual: value.type_().to_string(),
            });
        }
        self.expected.insert(key.to_string(), value);
        Ok(())
    }

    /// Checks a single record against every constraint, short-circuiting
    /// on the first mismatch. A record missing a constrained field is a
    /// hard error, not a failed match. With no constraints every record
    /// passes.
    pub fn validate(&self, record: &Value) -> Result<bool, SieveError> {
        let dict = match record {
            Value::Dict(dict) => dict,
            other => return Err(SieveError::NotARecord(other.type_().to_string())),
        };

        for (key, expected) in &self.expected {
            let Some(actual) = dict.get(key) else {
                return Err(SieveError::NoMatchingField(key.clone()));
            };
            if actual != expected {
                debug!("record fails constraint on {}: {} != {}", key, actual, expected);
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }
}
