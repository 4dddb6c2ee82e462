use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ValType {
    Integer,
    Float,
    Text,
    Bool,
    Time,
    Date,
    Array,
    Dict,
    Null,
}

impl Display for ValType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValType::Integer => "int",
            ValType::Float => "float",
            ValType::Text => "text",
            ValType::Bool => "bool",
            ValType::Time => "time",
            ValType::Date => "date",
            ValType::Array => "array",
            ValType::Dict => "dict",
            ValType::Null => "null",
        };
        write!(f, "{}", name.to_uppercase())
    }
}

impl ValType {
    pub fn parse(stencil: &str) -> Result<ValType, String> {
        match stencil.to_lowercase().as_str() {
            "int" | "integer" | "i" => Ok(ValType::Integer),
            "float" | "f" => Ok(ValType::Float),
            "bool" | "boolean" | "b" => Ok(ValType::Bool),
            "text" | "string" | "s" => Ok(ValType::Text),
            "time" => Ok(ValType::Time),
            "date" => Ok(ValType::Date),
            _ => Err(String::from("Could not parse the type of the value.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ValType;

    #[test]
    fn parse_known_stencils() {
        assert_eq!(ValType::parse("int"), Ok(ValType::Integer));
        assert_eq!(ValType::parse("I"), Ok(ValType::Integer));
        assert_eq!(ValType::parse("string"), Ok(ValType::Text));
        assert_eq!(ValType::parse("boolean"), Ok(ValType::Bool));
        assert_eq!(ValType::parse("f"), Ok(ValType::Float));
        assert!(ValType::parse("struct").is_err());
    }
}
