use crate::{BinResError, ByteCursor, Result};
use log::debug;
use std::fmt;

/// Size of the fields this decoder knows how to interpret
const KNOWN_SIZE: usize = 52;

/// Configuration descriptor qualifying a set of resource values
///
/// Any declared size is accepted: fields past the declared size read as
/// zero, and bytes past the known fields are kept in `unknown`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Configuration {
    pub size: u32,
    pub mcc: u16,
    pub mnc: u16,
    pub language: [u8; 2],
    pub country: [u8; 2],
    pub orientation: u8,
    pub touchscreen: u8,
    pub density: u16,
    pub keyboard: u8,
    pub navigation: u8,
    pub input_flags: u8,
    pub screen_width: u16,
    pub screen_height: u16,
    pub sdk_version: u16,
    pub minor_version: u16,
    pub screen_layout: u8,
    pub ui_mode: u8,
    pub smallest_screen_width_dp: u16,
    pub screen_width_dp: u16,
    pub screen_height_dp: u16,
    pub locale_script: [u8; 4],
    pub locale_variant: [u8; 8],
    pub screen_layout2: u8,
    pub color_mode: u8,
    pub unknown: Vec<u8>,
}

pub const ORIENTATION_PORT: u8 = 1;
pub const ORIENTATION_LAND: u8 = 2;
pub const ORIENTATION_SQUARE: u8 = 3;

pub const DENSITY_LOW: u16 = 120;
pub const DENSITY_MEDIUM: u16 = 160;
pub const DENSITY_TV: u16 = 213;
pub const DENSITY_HIGH: u16 = 240;
pub const DENSITY_XHIGH: u16 = 320;
pub const DENSITY_XXHIGH: u16 = 480;
pub const DENSITY_XXXHIGH: u16 = 640;
pub const DENSITY_ANY: u16 = 0xFFFE;
pub const DENSITY_NONE: u16 = 0xFFFF;

const UI_MODE_NIGHT_MASK: u8 = 0x30;
const UI_MODE_NIGHT_NO: u8 = 0x10;
const UI_MODE_NIGHT_YES: u8 = 0x20;

impl Configuration {
    /// Decode a configuration descriptor at the cursor position, consuming
    /// exactly its declared size
    pub fn decode(cursor: &mut ByteCursor) -> Result<Self> {
        let offset = cursor.absolute_position();
        let size = cursor.peek_u32_at(cursor.position())?;
        if size < 4 {
            return Err(BinResError::InvalidChunkSize {
                offset,
                declared: size,
                reason: "configuration smaller than its size field".to_string(),
            });
        }
        let mut bytes = cursor.slice(size as usize)?;
        bytes.skip(4)?;

        let mut field = FieldReader { cursor: bytes };
        let mut config = Configuration {
            size,
            mcc: field.u16(),
            mnc: field.u16(),
            language: field.array(),
            country: field.array(),
            orientation: field.u8(),
            touchscreen: field.u8(),
            density: field.u16(),
            keyboard: field.u8(),
            navigation: field.u8(),
            input_flags: field.u8(),
            ..Default::default()
        };
        field.u8();
        config.screen_width = field.u16();
        config.screen_height = field.u16();
        config.sdk_version = field.u16();
        config.minor_version = field.u16();
        config.screen_layout = field.u8();
        config.ui_mode = field.u8();
        config.smallest_screen_width_dp = field.u16();
        config.screen_width_dp = field.u16();
        config.screen_height_dp = field.u16();
        config.locale_script = field.array();
        config.locale_variant = field.array();
        config.screen_layout2 = field.u8();
        config.color_mode = field.u8();
        field.u16();

        if size as usize > KNOWN_SIZE {
            let rest = field.cursor.remaining();
            config.unknown = field.cursor.read_bytes(rest)?.to_vec();
            debug!(
                "Configuration at {:#x} has {} unknown trailing bytes: {}",
                offset,
                config.unknown.len(),
                hex::encode(&config.unknown)
            );
        }
        Ok(config)
    }

    /// Whether this is the default (unqualified) configuration
    pub fn is_default(&self) -> bool {
        let unqualified = Configuration {
            size: self.size,
            unknown: self.unknown.clone(),
            ..Default::default()
        };
        *self == unqualified && self.unknown.iter().all(|b| *b == 0)
    }

    /// Two- or three-letter language code, if set
    pub fn language(&self) -> Option<String> {
        unpack_locale_part(self.language, b'a')
    }

    /// Two-letter region or three-digit area code, if set
    pub fn country(&self) -> Option<String> {
        unpack_locale_part(self.country, b'0')
    }

    /// Screen size in dp packed as `height << 16 | width`
    pub fn screen_size_dp(&self) -> u32 {
        ((self.screen_height_dp as u32) << 16) | self.screen_width_dp as u32
    }

    /// aapt-style qualifier string, `default` for the empty configuration
    pub fn qualifier(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.mcc != 0 {
            parts.push(format!("mcc{}", self.mcc));
        }
        if self.mnc != 0 {
            parts.push(format!("mnc{}", self.mnc));
        }
        if let Some(language) = self.language() {
            parts.push(language);
            if let Some(country) = self.country() {
                parts.push(format!("r{}", country));
            }
        }
        if self.smallest_screen_width_dp != 0 {
            parts.push(format!("sw{}dp", self.smallest_screen_width_dp));
        }
        if self.screen_width_dp != 0 {
            parts.push(format!("w{}dp", self.screen_width_dp));
        }
        if self.screen_height_dp != 0 {
            parts.push(format!("h{}dp", self.screen_height_dp));
        }
        match self.orientation {
            ORIENTATION_PORT => parts.push("port".to_string()),
            ORIENTATION_LAND => parts.push("land".to_string()),
            ORIENTATION_SQUARE => parts.push("square".to_string()),
            _ => {}
        }
        match self.ui_mode & UI_MODE_NIGHT_MASK {
            UI_MODE_NIGHT_NO => parts.push("notnight".to_string()),
            UI_MODE_NIGHT_YES => parts.push("night".to_string()),
            _ => {}
        }
        if let Some(density) = density_qualifier(self.density) {
            parts.push(density);
        }
        if self.screen_width != 0 || self.screen_height != 0 {
            parts.push(format!("{}x{}", self.screen_width, self.screen_height));
        }
        if self.sdk_version != 0 {
            parts.push(format!("v{}", self.sdk_version));
        }

        if parts.is_empty() {
            "default".to_string()
        } else {
            parts.join("-")
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualifier())
    }
}

fn density_qualifier(density: u16) -> Option<String> {
    let name = match density {
        0 => return None,
        DENSITY_LOW => "ldpi",
        DENSITY_MEDIUM => "mdpi",
        DENSITY_TV => "tvdpi",
        DENSITY_HIGH => "hdpi",
        DENSITY_XHIGH => "xhdpi",
        DENSITY_XXHIGH => "xxhdpi",
        DENSITY_XXXHIGH => "xxxhdpi",
        DENSITY_ANY => "anydpi",
        DENSITY_NONE => "nodpi",
        other => return Some(format!("{}dpi", other)),
    };
    Some(name.to_string())
}

/// Languages and regions are either two plain ASCII bytes or, when the
/// high bit of the first byte is set, three 5-bit letters packed together
fn unpack_locale_part(packed: [u8; 2], base: u8) -> Option<String> {
    if packed[0] == 0 {
        return None;
    }
    if packed[0] & 0x80 != 0 {
        let first = packed[1] & 0x1F;
        let second = ((packed[1] & 0xE0) >> 5) | ((packed[0] & 0x03) << 3);
        let third = (packed[0] & 0x7C) >> 2;
        let letters = [base + first, base + second, base + third];
        return Some(String::from_utf8_lossy(&letters).into_owned());
    }
    Some(String::from_utf8_lossy(&packed).trim_end_matches('\0').to_string())
}

/// Reads fields until the declared size runs out, yielding zero afterwards
struct FieldReader<'a> {
    cursor: ByteCursor<'a>,
}

impl FieldReader<'_> {
    fn u8(&mut self) -> u8 {
        self.cursor.read_u8().unwrap_or(0)
    }

    fn u16(&mut self) -> u16 {
        if self.cursor.remaining() < 2 {
            self.cursor.skip(self.cursor.remaining()).ok();
            return 0;
        }
        self.cursor.read_u16().unwrap_or(0)
    }

    fn array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        for byte in out.iter_mut() {
            *byte = self.u8();
        }
        out
    }
}
