use super::*;
use num_bigint::BigInt;

/// The default [`Receiver`]: holds the single most recent data item.
///
/// Allocated once per decode session and reused for every item. Cloning
/// gives an independent snapshot for speculative decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Receptacle<B = Vec<u8>> {
    item: Item<B>,
}

impl<B> Default for Receptacle<B> {
    fn default() -> Self {
        Self { item: Item::None }
    }
}

impl<B> Receptacle<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_item(&self) -> DataItem {
        self.item.data_item()
    }

    pub fn item(&self) -> &Item<B> {
        &self.item
    }

    pub fn into_item(self) -> Item<B> {
        self.item
    }

    /// Move the current item out, leaving the receptacle cleared.
    pub fn take_item(&mut self) -> Item<B> {
        core::mem::take(&mut self.item)
    }

    pub fn clear(&mut self) {
        self.item = Item::None;
    }

    pub fn bool_value(&self) -> Option<bool> {
        match self.item {
            Item::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn int_value(&self) -> Option<i32> {
        match self.item {
            Item::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn long_value(&self) -> Option<i64> {
        match self.item {
            Item::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn over_long_value(&self) -> Option<(bool, u64)> {
        match self.item {
            Item::OverLong { negative, value } => Some((negative, value)),
            _ => None,
        }
    }

    pub fn float16_value(&self) -> Option<half::f16> {
        match self.item {
            Item::Float16(v) => Some(v),
            _ => None,
        }
    }

    pub fn float_value(&self) -> Option<f32> {
        match self.item {
            Item::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn double_value(&self) -> Option<f64> {
        match self.item {
            Item::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn big_integer_value(&self) -> Option<&BigInt> {
        match &self.item {
            Item::BigInteger(v) => Some(v),
            _ => None,
        }
    }

    pub fn big_decimal_value(&self) -> Option<&decimal_rs::Decimal> {
        match &self.item {
            Item::BigDecimal(v) => Some(v),
            _ => None,
        }
    }

    pub fn bytes_value(&self) -> Option<&B> {
        match &self.item {
            Item::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn string_value(&self) -> Option<&str> {
        match &self.item {
            Item::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn text_value(&self) -> Option<&B> {
        match &self.item {
            Item::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Element count of an array header, or entry count of a map header.
    pub fn length(&self) -> Option<u64> {
        match self.item {
            Item::ArrayHeader(len) | Item::MapHeader(len) => Some(len),
            _ => None,
        }
    }

    pub fn tag_value(&self) -> Option<Tag> {
        match self.item {
            Item::Tag(v) => Some(v),
            _ => None,
        }
    }

    pub fn simple_value(&self) -> Option<SimpleValue> {
        match self.item {
            Item::SimpleValue(v) => Some(v),
            _ => None,
        }
    }

    fn receive(&mut self, cursor: Cursor, item: Item<B>) -> Cursor {
        trace!("{} at {cursor}", item.data_item());
        self.item = item;
        cursor
    }
}

impl<B> Receiver<B> for Receptacle<B>
where
    B: ByteAccess,
{
    fn on_null(&mut self, cursor: Cursor) -> Cursor {
        self.receive(cursor, Item::Null)
    }

    fn on_undefined(&mut self, cursor: Cursor) -> Cursor {
        self.receive(cursor, Item::Undefined)
    }

    fn on_bool(&mut self, cursor: Cursor, value: bool) -> Cursor {
        self.receive(cursor, Item::Bool(value))
    }

    fn on_int(&mut self, cursor: Cursor, value: i32) -> Cursor {
        self.receive(cursor, Item::Int(value))
    }

    fn on_long(&mut self, cursor: Cursor, value: i64) -> Cursor {
        self.receive(cursor, Item::Long(value))
    }

    fn on_over_long(&mut self, cursor: Cursor, negative: bool, value: u64) -> Cursor {
        self.receive(cursor, Item::OverLong { negative, value })
    }

    fn on_float16(&mut self, cursor: Cursor, value: half::f16) -> Cursor {
        self.receive(cursor, Item::Float16(value))
    }

    fn on_float(&mut self, cursor: Cursor, value: f32) -> Cursor {
        self.receive(cursor, Item::Float(value))
    }

    fn on_double(&mut self, cursor: Cursor, value: f64) -> Cursor {
        self.receive(cursor, Item::Double(value))
    }

    fn on_big_integer(&mut self, cursor: Cursor, value: BigInt) -> Cursor {
        self.receive(cursor, Item::BigInteger(value))
    }

    fn on_big_decimal(&mut self, cursor: Cursor, value: decimal_rs::Decimal) -> Cursor {
        self.receive(cursor, Item::BigDecimal(value))
    }

    fn on_bytes(&mut self, cursor: Cursor, value: B) -> Cursor {
        self.receive(cursor, Item::Bytes(value))
    }

    fn on_bytes_start(&mut self, cursor: Cursor) -> Cursor {
        self.receive(cursor, Item::BytesStart)
    }

    fn on_string(&mut self, cursor: Cursor, value: String) -> Cursor {
        self.receive(cursor, Item::String(value))
    }

    fn on_text(&mut self, cursor: Cursor, value: B) -> Cursor {
        self.receive(cursor, Item::Text(value))
    }

    fn on_text_start(&mut self, cursor: Cursor) -> Cursor {
        self.receive(cursor, Item::TextStart)
    }

    fn on_array_header(&mut self, cursor: Cursor, length: u64) -> Cursor {
        self.receive(cursor, Item::ArrayHeader(length))
    }

    fn on_array_start(&mut self, cursor: Cursor) -> Cursor {
        self.receive(cursor, Item::ArrayStart)
    }

    fn on_map_header(&mut self, cursor: Cursor, length: u64) -> Cursor {
        self.receive(cursor, Item::MapHeader(length))
    }

    fn on_map_start(&mut self, cursor: Cursor) -> Cursor {
        self.receive(cursor, Item::MapStart)
    }

    fn on_break(&mut self, cursor: Cursor) -> Cursor {
        self.receive(cursor, Item::Break)
    }

    fn on_tag(&mut self, cursor: Cursor, value: Tag) -> Cursor {
        self.receive(cursor, Item::Tag(value))
    }

    fn on_simple_value(&mut self, cursor: Cursor, value: SimpleValue) -> Cursor {
        self.receive(cursor, Item::SimpleValue(value))
    }

    fn on_end_of_input(&mut self, cursor: Cursor) -> Cursor {
        self.receive(cursor, Item::EndOfInput)
    }
}
