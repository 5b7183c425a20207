use super::Value;
use crate::{schema::Type, Result};

/// A scalar type that maps to a single column value.
///
/// Implemented for the integer types, `bool` and `String`; `Option` lifts any
/// primitive into a nullable column. The derive macro goes through this trait
/// so it never needs to inspect field type names itself.
pub trait Primitive: Sized {
    /// The storage type of the column backing this primitive.
    fn ty() -> Type;

    /// Convert into a statement value.
    fn into_value(self) -> Value;

    /// Load from a statement value.
    fn load(value: Value) -> Result<Self>;
}

impl Primitive for bool {
    fn ty() -> Type {
        Type::Bool
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn load(value: Value) -> Result<Self> {
        value.to_bool()
    }
}

impl Primitive for String {
    fn ty() -> Type {
        Type::String
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn load(value: Value) -> Result<Self> {
        value.to_string()
    }
}

impl Primitive for i64 {
    fn ty() -> Type {
        Type::I64
    }

    fn into_value(self) -> Value {
        Value::I64(self)
    }

    fn load(value: Value) -> Result<Self> {
        value.to_i64()
    }
}

macro_rules! int_primitive {
    ( $( $ty:ty ),* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::I64
                }

                fn into_value(self) -> Value {
                    Value::I64(self as i64)
                }

                fn load(value: Value) -> Result<Self> {
                    let v = value.to_i64()?;
                    <$ty>::try_from(v)
                        .map_err(|_| crate::err!("value {} out of range for {}", v, stringify!($ty)))
                }
            }
        )*
    };
}

int_primitive!(i8, i16, i32, u8, u16, u32);

impl<P: Primitive> Primitive for Option<P> {
    fn ty() -> Type {
        P::ty()
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            P::load(value).map(Some)
        }
    }
}
