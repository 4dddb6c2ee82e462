pub use array::Array;
pub use bool::Bool;
pub use date::Date;
pub use dict::Dict;
pub use float::Float;
pub use int::Int;
pub use text::Text;
pub use time::Time;
pub use r#type::ValType;
pub use value::Value;

mod array;
mod bool;
mod conversion;
mod date;
mod dict;
mod float;
mod int;
mod text;
mod time;
mod r#type;
mod value;
