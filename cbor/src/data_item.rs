use super::*;
use num_bigint::BigInt;

/// The kind of data item a decoder last reported.
///
/// Shared vocabulary between decoders and [`Receiver`]s. `None` is only ever
/// seen before the first item and after [`Receptacle::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataItem {
    None,
    Null,
    Undefined,
    Bool,
    Int,
    Long,
    OverLong,
    Float16,
    Float,
    Double,
    BigInteger,
    BigDecimal,
    Bytes,
    BytesStart,
    String,
    Text,
    TextStart,
    ArrayHeader,
    ArrayStart,
    MapHeader,
    MapStart,
    Break,
    Tag,
    SimpleValue,
    EndOfInput,
}

impl DataItem {
    pub const ALL: [DataItem; 25] = [
        Self::None,
        Self::Null,
        Self::Undefined,
        Self::Bool,
        Self::Int,
        Self::Long,
        Self::OverLong,
        Self::Float16,
        Self::Float,
        Self::Double,
        Self::BigInteger,
        Self::BigDecimal,
        Self::Bytes,
        Self::BytesStart,
        Self::String,
        Self::Text,
        Self::TextStart,
        Self::ArrayHeader,
        Self::ArrayStart,
        Self::MapHeader,
        Self::MapStart,
        Self::Break,
        Self::Tag,
        Self::SimpleValue,
        Self::EndOfInput,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Null => "Null",
            Self::Undefined => "Undefined",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::OverLong => "OverLong",
            Self::Float16 => "Float16",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::BigInteger => "BigInteger",
            Self::BigDecimal => "BigDecimal",
            Self::Bytes => "Bytes",
            Self::BytesStart => "BytesStart",
            Self::String => "String",
            Self::Text => "Text",
            Self::TextStart => "TextStart",
            Self::ArrayHeader => "ArrayHeader",
            Self::ArrayStart => "ArrayStart",
            Self::MapHeader => "MapHeader",
            Self::MapStart => "MapStart",
            Self::Break => "Break",
            Self::Tag => "Tag",
            Self::SimpleValue => "SimpleValue",
            Self::EndOfInput => "EndOfInput",
        }
    }
}

impl core::fmt::Display for DataItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded data item together with its payload.
///
/// Each variant carries exactly the payload its [`DataItem`] implies, so a
/// payload can only be read back under the kind it was stored with.
#[derive(Debug, Clone, PartialEq)]
pub enum Item<B = Vec<u8>> {
    None,
    Null,
    Undefined,
    Bool(bool),
    Int(i32),
    Long(i64),
    /// An integer outside the `i64` range: `value` for positive, `-1 - value` for negative.
    OverLong {
        negative: bool,
        value: u64,
    },
    Float16(half::f16),
    Float(f32),
    Double(f64),
    BigInteger(BigInt),
    BigDecimal(decimal_rs::Decimal),
    Bytes(B),
    BytesStart,
    String(String),
    /// UTF-8 text still in its byte container.
    Text(B),
    TextStart,
    ArrayHeader(u64),
    ArrayStart,
    MapHeader(u64),
    MapStart,
    Break,
    Tag(Tag),
    SimpleValue(SimpleValue),
    EndOfInput,
}

impl<B> Default for Item<B> {
    fn default() -> Self {
        Self::None
    }
}

impl<B> Item<B> {
    pub fn data_item(&self) -> DataItem {
        match self {
            Self::None => DataItem::None,
            Self::Null => DataItem::Null,
            Self::Undefined => DataItem::Undefined,
            Self::Bool(_) => DataItem::Bool,
            Self::Int(_) => DataItem::Int,
            Self::Long(_) => DataItem::Long,
            Self::OverLong { .. } => DataItem::OverLong,
            Self::Float16(_) => DataItem::Float16,
            Self::Float(_) => DataItem::Float,
            Self::Double(_) => DataItem::Double,
            Self::BigInteger(_) => DataItem::BigInteger,
            Self::BigDecimal(_) => DataItem::BigDecimal,
            Self::Bytes(_) => DataItem::Bytes,
            Self::BytesStart => DataItem::BytesStart,
            Self::String(_) => DataItem::String,
            Self::Text(_) => DataItem::Text,
            Self::TextStart => DataItem::TextStart,
            Self::ArrayHeader(_) => DataItem::ArrayHeader,
            Self::ArrayStart => DataItem::ArrayStart,
            Self::MapHeader(_) => DataItem::MapHeader,
            Self::MapStart => DataItem::MapStart,
            Self::Break => DataItem::Break,
            Self::Tag(_) => DataItem::Tag,
            Self::SimpleValue(_) => DataItem::SimpleValue,
            Self::EndOfInput => DataItem::EndOfInput,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
