use std::time::Duration;

/// The underlying value type of a property, with nullability stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    String,
    Bytes,
    Uuid,
    Date,
    Time,
    DateTime,
    DateTimeOffset,
    Duration,
    /// A fieldless enumeration stored as its discriminant or name.
    Enum,
    /// A nested object; never mapped to a column.
    Object(&'static str),
    /// A collection of values; never mapped to a column.
    Collection,
}

impl ValueKind {
    /// Returns true if values of this kind can be stored in a single column.
    pub fn is_mappable(&self) -> bool {
        !matches!(self, ValueKind::Object(_) | ValueKind::Collection)
    }
}

/// Rust types that map onto a single column.
pub trait Scalar {
    const KIND: ValueKind;
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ValueKind = ValueKind::$kind;
            }
        )*
    };
}

impl_scalar! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    Duration => Duration,
}

impl<T: Scalar> Scalar for Option<T> {
    const KIND: ValueKind = T::KIND;
}
