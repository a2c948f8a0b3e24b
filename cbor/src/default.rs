/// A zero-equivalent value standing in for a wire null.
pub trait NullDefault: Sized {
    fn null_default() -> Self;

    /// `value`, or the null default if there is none.
    fn or_value(value: Option<Self>) -> Self {
        value.unwrap_or_else(Self::null_default)
    }
}

macro_rules! impl_null_default {
    ($v:expr => $($t:ty),+) => {
        $(
            impl NullDefault for $t {
                fn null_default() -> Self {
                    $v
                }
            }
        )+
    };
}

impl_null_default!(false => bool);
impl_null_default!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_null_default!(0.0 => f32, f64);
impl_null_default!(half::f16::ZERO => half::f16);
impl_null_default!('\0' => char);
impl_null_default!(String::new() => String);

impl<T> NullDefault for Vec<T> {
    fn null_default() -> Self {
        Vec::new()
    }
}

impl<T> NullDefault for Option<T> {
    fn null_default() -> Self {
        None
    }
}
