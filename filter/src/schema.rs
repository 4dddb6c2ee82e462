use error::SieveError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use value::{ValType, Value};

/// The shape of a record: its field names and their declared types, in
/// field order. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: IndexMap<String, ValType>,
}

impl Schema {
    /// Derives the schema from a reference record. The reference's field
    /// values are ignored, only their names and type tags are recorded.
    pub fn of(reference: &Value) -> Result<Schema, SieveError> {
        match reference {
            Value::Dict(dict) => Ok(Schema {
                fields: dict
                    .iter()
                    .map(|(name, value)| (name.clone(), value.type_()))
                    .collect(),
            }),
            other => Err(SieveError::NotARecord(other.type_().to_string())),
        }
    }

    /// Declares a schema without a reference instance, from a
    /// `{name: type, ...}` stencil.
    pub fn parse(stencil: &str) -> Result<Schema, SieveError> {
        let stencil = stencil.trim();
        let stencil = stencil.strip_prefix('{').unwrap_or(stencil);
        let stencil = stencil.strip_suffix('}').unwrap_or(stencil);

        let mut fields = IndexMap::new();
        for field in stencil.split(',') {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let (name, type_) = field
                .split_once(':')
                .ok_or_else(|| SieveError::from(format!("missing type in field '{field}'")))?;
            fields.insert(name.trim().to_string(), ValType::parse(type_.trim())?);
        }
        Ok(Schema { fields })
    }

    pub fn field_type(&self, name: &str) -> Option<&ValType> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &ValType)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
