use crate::{
    TYPE_ATTRIBUTE, TYPE_DIMENSION, TYPE_DYNAMIC_ATTRIBUTE, TYPE_DYNAMIC_REFERENCE, TYPE_FLOAT,
    TYPE_FRACTION, TYPE_INT_BOOLEAN, TYPE_INT_COLOR_ARGB4, TYPE_INT_COLOR_ARGB8,
    TYPE_INT_COLOR_RGB4, TYPE_INT_COLOR_RGB8, TYPE_INT_DEC, TYPE_INT_HEX, TYPE_NULL,
    TYPE_REFERENCE, TYPE_STRING,
};
use std::fmt;

/// Classification of a `Res_value` data type byte
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataType {
    Null,
    Reference,
    Attribute,
    String,
    Float,
    Dimension,
    Fraction,
    DynamicReference,
    DynamicAttribute,
    IntDec,
    IntHex,
    IntBoolean,
    IntColorArgb8,
    IntColorRgb8,
    IntColorArgb4,
    IntColorRgb4,
    Unknown(u8),
}

impl From<u8> for DataType {
    fn from(value: u8) -> Self {
        match value {
            TYPE_NULL => DataType::Null,
            TYPE_REFERENCE => DataType::Reference,
            TYPE_ATTRIBUTE => DataType::Attribute,
            TYPE_STRING => DataType::String,
            TYPE_FLOAT => DataType::Float,
            TYPE_DIMENSION => DataType::Dimension,
            TYPE_FRACTION => DataType::Fraction,
            TYPE_DYNAMIC_REFERENCE => DataType::DynamicReference,
            TYPE_DYNAMIC_ATTRIBUTE => DataType::DynamicAttribute,
            TYPE_INT_DEC => DataType::IntDec,
            TYPE_INT_HEX => DataType::IntHex,
            TYPE_INT_BOOLEAN => DataType::IntBoolean,
            TYPE_INT_COLOR_ARGB8 => DataType::IntColorArgb8,
            TYPE_INT_COLOR_RGB8 => DataType::IntColorRgb8,
            TYPE_INT_COLOR_ARGB4 => DataType::IntColorArgb4,
            TYPE_INT_COLOR_RGB4 => DataType::IntColorRgb4,
            other => DataType::Unknown(other),
        }
    }
}

const COMPLEX_UNIT_MASK: u32 = 0xF;
const COMPLEX_RADIX_SHIFT: u32 = 4;
const COMPLEX_RADIX_MASK: u32 = 0x3;
const MANTISSA_MULT: f32 = 1.0 / (1 << 8) as f32;
const RADIX_MULTS: [f32; 4] = [
    MANTISSA_MULT,
    MANTISSA_MULT / (1 << 7) as f32,
    MANTISSA_MULT / (1 << 15) as f32,
    MANTISSA_MULT / (1 << 23) as f32,
];
const DIMENSION_UNITS: [&str; 6] = ["px", "dip", "sp", "pt", "in", "mm"];
const FRACTION_UNITS: [&str; 2] = ["%", "%p"];

/// A raw typed value: one data type byte and 32 bits of data
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TypedValue {
    pub data_type: u8,
    pub data: u32,
}

impl TypedValue {
    pub fn new(data_type: u8, data: u32) -> Self {
        Self { data_type, data }
    }

    pub fn kind(&self) -> DataType {
        DataType::from(self.data_type)
    }

    /// Whether `data` is an index into a string pool
    pub fn is_string(&self) -> bool {
        self.data_type == TYPE_STRING
    }

    pub fn is_reference(&self) -> bool {
        matches!(
            self.kind(),
            DataType::Reference | DataType::DynamicReference
        )
    }

    /// Decode a complex dimension/fraction payload into its float value
    pub fn complex_value(&self) -> f32 {
        let radix = ((self.data >> COMPLEX_RADIX_SHIFT) & COMPLEX_RADIX_MASK) as usize;
        let mantissa = (self.data & 0xFFFF_FF00) as i32 as f32;
        mantissa * RADIX_MULTS[radix]
    }

    fn complex_unit(&self) -> usize {
        (self.data & COMPLEX_UNIT_MASK) as usize
    }
}

impl fmt::Display for TypedValue {
    /// Renders the value the way aapt dumps it; string values render as
    /// their pool index since the pool is not known here
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            DataType::Null => Ok(()),
            DataType::Reference | DataType::DynamicReference => write!(f, "@0x{:08x}", self.data),
            DataType::Attribute | DataType::DynamicAttribute => write!(f, "?0x{:08x}", self.data),
            DataType::String => write!(f, "string#{}", self.data),
            DataType::Float => write!(f, "{}", f32::from_bits(self.data)),
            DataType::Dimension => match DIMENSION_UNITS.get(self.complex_unit()) {
                Some(unit) => write!(f, "{:?}{}", self.complex_value(), unit),
                None => write!(f, "{:?}unit{}", self.complex_value(), self.complex_unit()),
            },
            DataType::Fraction => match FRACTION_UNITS.get(self.complex_unit()) {
                Some(unit) => write!(f, "{:?}{}", self.complex_value() * 100.0, unit),
                None => write!(f, "{:?}unit{}", self.complex_value(), self.complex_unit()),
            },
            DataType::IntDec => write!(f, "{}", self.data as i32),
            DataType::IntHex => write!(f, "0x{:x}", self.data),
            DataType::IntBoolean => write!(f, "{}", self.data != 0),
            DataType::IntColorArgb8 | DataType::IntColorArgb4 => write!(f, "#{:08x}", self.data),
            DataType::IntColorRgb8 | DataType::IntColorRgb4 => {
                write!(f, "#{:06x}", self.data & 0x00FF_FFFF)
            }
            DataType::Unknown(ty) => write!(f, "(type {:#04x}) 0x{:x}", ty, self.data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_renderings() {
        assert_eq!(TypedValue::new(TYPE_INT_DEC, 0xFFFF_FFFF).to_string(), "-1");
        assert_eq!(TypedValue::new(TYPE_INT_DEC, 21).to_string(), "21");
        assert_eq!(TypedValue::new(TYPE_INT_HEX, 0x30).to_string(), "0x30");
        assert_eq!(TypedValue::new(TYPE_INT_BOOLEAN, 0xFFFF_FFFF).to_string(), "true");
        assert_eq!(TypedValue::new(TYPE_INT_BOOLEAN, 0).to_string(), "false");
        assert_eq!(TypedValue::new(TYPE_REFERENCE, 0x7f01_0000).to_string(), "@0x7f010000");
        assert_eq!(TypedValue::new(TYPE_ATTRIBUTE, 0x0101_0000).to_string(), "?0x01010000");
        assert_eq!(TypedValue::new(TYPE_FLOAT, 1.5f32.to_bits()).to_string(), "1.5");
        assert_eq!(TypedValue::new(TYPE_NULL, 0).to_string(), "");
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            TypedValue::new(TYPE_INT_COLOR_ARGB8, 0xFF33_4455).to_string(),
            "#ff334455"
        );
        assert_eq!(
            TypedValue::new(TYPE_INT_COLOR_RGB8, 0xFF33_4455).to_string(),
            "#334455"
        );
    }

    #[test]
    fn test_complex_dimensions() {
        // 16dip: mantissa 16 << 8, radix 0 (23p0), unit 1
        let value = TypedValue::new(TYPE_DIMENSION, (16 << 8) | 0x01);
        assert_eq!(value.complex_value(), 16.0);
        assert_eq!(value.to_string(), "16.0dip");

        let sp = TypedValue::new(TYPE_DIMENSION, (12 << 8) | 0x02);
        assert_eq!(sp.to_string(), "12.0sp");

        // 50%: 0.5 in radix 0p23 is 1 << 22, shifted into the mantissa
        let half = TypedValue::new(TYPE_FRACTION, (1 << 30) | (3 << 4));
        assert_eq!(half.to_string(), "50.0%");
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(TypedValue::new(0x03, 0).kind(), DataType::String);
        assert!(TypedValue::new(TYPE_DYNAMIC_REFERENCE, 0).is_reference());
        assert_eq!(TypedValue::new(0x42, 0).kind(), DataType::Unknown(0x42));
    }
}
