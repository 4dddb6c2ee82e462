use crate::Constraints;
use error::SieveError;
use tracing::debug;
use value::Value;

/// Filters a collection value. The input must be an array of records,
/// anything else is an [`SieveError::InvalidCollection`].
pub fn filter(collection: &Value, constraints: &Constraints) -> Result<Vec<Value>, SieveError> {
    match collection {
        Value::Array(array) => filter_records(&array.values, constraints),
        other => Err(SieveError::InvalidCollection(other.type_().to_string())),
    }
}

/// Filters a slice of records, preserving their relative order. The first
/// validation error aborts the whole batch and no partial output is
/// returned.
pub fn filter_records(
    records: &[Value],
    constraints: &Constraints,
) -> Result<Vec<Value>, SieveError> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        if constraints.validate(record)? {
            out.push(record.clone());
        }
    }
    debug!("{} of {} records passed", out.len(), records.len());
    Ok(out)
}

/// Streaming counterpart of [`filter_records`]: drains the input until the
/// next passing record, surfacing validation errors in place.
pub struct FilterIterator<I> {
    input: I,
    constraints: Constraints,
}

impl<I> FilterIterator<I> {
    pub fn new(input: I, constraints: Constraints) -> Self {
        FilterIterator { input, constraints }
    }
}

impl<I: Iterator<Item = Value>> Iterator for FilterIterator<I> {
    type Item = Result<Value, SieveError>;

    fn next(&mut self) -> Option<Self::Item> {
        for value in self.input.by_ref() {
            match self.constraints.validate(&value) {
                Ok(true) => return Some(Ok(value)),
                Ok(false) => {}
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}
