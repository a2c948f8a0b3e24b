use super::*;
use num_bigint::BigInt;

/// Position in the input at which a data item was recognised.
pub type Cursor = u64;

/// The callbacks a decoder invokes, once per recognised data item and in
/// document order.
///
/// Every callback hands the cursor back untouched so a decode loop can chain
/// calls; moving through the input is the decoder's job, never the
/// receiver's.
pub trait Receiver<B = Vec<u8>>
where
    B: ByteAccess,
{
    fn on_null(&mut self, cursor: Cursor) -> Cursor;

    fn on_undefined(&mut self, cursor: Cursor) -> Cursor;

    fn on_bool(&mut self, cursor: Cursor, value: bool) -> Cursor;

    fn on_int(&mut self, cursor: Cursor, value: i32) -> Cursor;

    fn on_long(&mut self, cursor: Cursor, value: i64) -> Cursor;

    fn on_over_long(&mut self, cursor: Cursor, negative: bool, value: u64) -> Cursor;

    fn on_float16(&mut self, cursor: Cursor, value: half::f16) -> Cursor;

    fn on_float(&mut self, cursor: Cursor, value: f32) -> Cursor;

    fn on_double(&mut self, cursor: Cursor, value: f64) -> Cursor;

    fn on_big_integer(&mut self, cursor: Cursor, value: BigInt) -> Cursor;

    fn on_big_decimal(&mut self, cursor: Cursor, value: decimal_rs::Decimal) -> Cursor;

    fn on_bytes(&mut self, cursor: Cursor, value: B) -> Cursor;

    fn on_bytes_start(&mut self, cursor: Cursor) -> Cursor;

    fn on_string(&mut self, cursor: Cursor, value: String) -> Cursor;

    fn on_text(&mut self, cursor: Cursor, value: B) -> Cursor;

    fn on_text_start(&mut self, cursor: Cursor) -> Cursor;

    fn on_array_header(&mut self, cursor: Cursor, length: u64) -> Cursor;

    fn on_array_start(&mut self, cursor: Cursor) -> Cursor;

    fn on_map_header(&mut self, cursor: Cursor, length: u64) -> Cursor;

    fn on_map_start(&mut self, cursor: Cursor) -> Cursor;

    fn on_break(&mut self, cursor: Cursor) -> Cursor;

    fn on_tag(&mut self, cursor: Cursor, value: Tag) -> Cursor;

    fn on_simple_value(&mut self, cursor: Cursor, value: SimpleValue) -> Cursor;

    fn on_end_of_input(&mut self, cursor: Cursor) -> Cursor;
}
