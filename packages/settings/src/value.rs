// ABOUTME: Text conversion for typed setting values
// ABOUTME: Explicit format/parse pairs for every scalar type a setting may hold

use crate::validation::DataType;

/// A scalar that can be stored as the text of a setting.
///
/// `from_setting` is deliberately lenient about surrounding whitespace and
/// boolean casing so that values written by other tooling still coerce.
pub trait SettingValue: Sized {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Data type a value of this type is stored as.
    const DATA_TYPE: DataType;

    fn to_setting(&self) -> String;

    fn from_setting(text: &str) -> Option<Self>;
}

impl SettingValue for String {
    const TYPE_NAME: &'static str = "string";
    const DATA_TYPE: DataType = DataType::String;

    fn to_setting(&self) -> String {
        self.clone()
    }

    fn from_setting(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl SettingValue for bool {
    const TYPE_NAME: &'static str = "boolean";
    const DATA_TYPE: DataType = DataType::Boolean;

    fn to_setting(&self) -> String {
        self.to_string()
    }

    fn from_setting(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Some(true)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl SettingValue for char {
    const TYPE_NAME: &'static str = "char";
    const DATA_TYPE: DataType = DataType::String;

    fn to_setting(&self) -> String {
        self.to_string()
    }

    fn from_setting(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

macro_rules! impl_parsed_setting_value {
    ($data_type:expr => $($ty:ty),* $(,)?) => {
        $(
            impl SettingValue for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
                const DATA_TYPE: DataType = $data_type;

                fn to_setting(&self) -> String {
                    self.to_string()
                }

                fn from_setting(text: &str) -> Option<Self> {
                    text.trim().parse::<$ty>().ok()
                }
            }
        )*
    };
}

impl_parsed_setting_value!(
    DataType::Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
impl_parsed_setting_value!(DataType::Float => f32, f64);
