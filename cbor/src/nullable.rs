use super::*;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Read a typed value out of a decoded [`Item`].
///
/// Numeric reads accept any integer or float item whose value fits the
/// target type; everything else fails with [`Error::UnexpectedDataItem`].
pub trait FromItem<B = Vec<u8>>: Sized {
    fn from_item(item: &Item<B>) -> Result<Self, Error>;

    fn from_receptacle(receptacle: &Receptacle<B>) -> Result<Self, Error> {
        Self::from_item(receptacle.item())
    }
}

fn unexpected<B>(expected: &'static str, item: &Item<B>) -> Error {
    Error::UnexpectedDataItem {
        expected,
        actual: item.data_item(),
    }
}

impl<B> FromItem<B> for bool {
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::Bool(v) => Ok(*v),
            _ => Err(unexpected("bool", item)),
        }
    }
}

macro_rules! impl_from_integer_item {
    ($t:ty, $to:ident) => {
        impl<B> FromItem<B> for $t {
            fn from_item(item: &Item<B>) -> Result<Self, Error> {
                match item {
                    Item::Int(v) => v.$to(),
                    Item::Long(v) => v.$to(),
                    Item::OverLong {
                        negative: false,
                        value,
                    } => value.$to(),
                    Item::BigInteger(v) => v.$to(),
                    _ => None,
                }
                .ok_or_else(|| unexpected(stringify!($t), item))
            }
        }
    };
}

impl_from_integer_item!(i32, to_i32);
impl_from_integer_item!(i64, to_i64);
impl_from_integer_item!(u64, to_u64);

impl<B> FromItem<B> for half::f16 {
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::Float16(v) => Ok(*v),
            _ => Err(unexpected("f16", item)),
        }
    }
}

impl<B> FromItem<B> for f32 {
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::Float16(v) => Ok(half::f16::to_f32(*v)),
            Item::Float(v) => Ok(*v),
            _ => Err(unexpected("f32", item)),
        }
    }
}

impl<B> FromItem<B> for f64 {
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::Float16(v) => Ok(half::f16::to_f64(*v)),
            Item::Float(v) => Ok(*v as f64),
            Item::Double(v) => Ok(*v),
            _ => Err(unexpected("f64", item)),
        }
    }
}

impl<B> FromItem<B> for String
where
    B: ByteAccess,
{
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::String(s) => Ok(s.clone()),
            Item::Text(t) => Ok(core::str::from_utf8(t.as_bytes())?.to_owned()),
            _ => Err(unexpected("text string", item)),
        }
    }
}

impl<B> FromItem<B> for Vec<u8>
where
    B: ByteAccess,
{
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::Bytes(b) => Ok(b.as_bytes().to_vec()),
            _ => Err(unexpected("byte string", item)),
        }
    }
}

impl<B> FromItem<B> for SimpleValue {
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::SimpleValue(v) => Ok(*v),
            _ => Err(unexpected("simple value", item)),
        }
    }
}

impl<B> FromItem<B> for BigInt {
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::Int(v) => Ok(BigInt::from(*v)),
            Item::Long(v) => Ok(BigInt::from(*v)),
            Item::OverLong {
                negative: false,
                value,
            } => Ok(BigInt::from(*value)),
            Item::OverLong {
                negative: true,
                value,
            } => Ok(BigInt::from(-1) - BigInt::from(*value)),
            Item::BigInteger(v) => Ok(v.clone()),
            _ => Err(unexpected("integer", item)),
        }
    }
}

impl<B> FromItem<B> for decimal_rs::Decimal {
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::BigDecimal(v) => Ok(*v),
            Item::Int(v) => Ok((*v).into()),
            Item::Long(v) => Ok((*v).into()),
            _ => Err(unexpected("decimal", item)),
        }
    }
}

/// Wire null reads as `None`; anything else must read as `T`.
impl<B, T> FromItem<B> for Option<T>
where
    T: FromItem<B>,
{
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::Null => Ok(None),
            _ => T::from_item(item).map(Some),
        }
    }
}

/// A value that reads wire null as [`NullDefault::null_default`] instead of
/// failing.
///
/// `Nullable<Option<T>>` reads null as `None`, the same as `Option<T>`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Nullable<T>(pub T);

impl<T> Nullable<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::ops::Deref for Nullable<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<B, T> FromItem<B> for Nullable<T>
where
    T: FromItem<B> + NullDefault,
{
    fn from_item(item: &Item<B>) -> Result<Self, Error> {
        match item {
            Item::Null => Ok(Self(T::null_default())),
            _ => T::from_item(item).map(Self),
        }
    }
}
