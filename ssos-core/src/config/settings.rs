//! User-adjustable display settings
//!
//! The board layout (timer period, unit and slot counts) is fixed at build
//! time, but brightness and blinking can be changed while the display runs.
//! Settings can be stored in flash as a postcard-serialized record.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{check_brightness, check_frames_on, check_no_blink_mask, ConfigError, ScanConfig};

/// Magic number to identify stored display settings
pub const SETTINGS_MAGIC: u32 = 0x3753_4547; // "7SEG"

/// Current settings record version
pub const SETTINGS_VERSION: u8 = 1;

/// Upper bound on the encoded size of a [`SettingsRecord`]
pub const MAX_SETTINGS_RECORD_LEN: usize = 24;

/// Brightness and blinking settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplaySettings {
    /// Lit slots per unit dwell
    pub brightness: u8,
    /// Blink gating enabled
    pub blinking: bool,
    /// Frames lit per blink period
    pub frames_on: u8,
    /// Frames dark per blink period
    pub frames_off: u8,
    /// Units exempt from blinking
    pub no_blink_mask: u32,
}

impl DisplaySettings {
    /// Extract the adjustable part of a configuration
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            brightness: config.brightness,
            blinking: config.blinking,
            frames_on: config.frames_on,
            frames_off: config.frame_count.saturating_sub(config.frames_on),
            no_blink_mask: config.no_blink_mask,
        }
    }

    /// Blink period (frames), if it fits the frame counter
    pub fn frame_count(&self) -> Result<u8, ConfigError> {
        self.frames_on
            .checked_add(self.frames_off)
            .ok_or(ConfigError::BlinkTimingOutOfRange)
    }

    /// Overlay these settings on `config`
    ///
    /// Returns the combined configuration, or the first violated invariant.
    /// `config` itself is never modified, so a rejected update leaves the
    /// running display untouched.
    pub fn apply_to(&self, config: &ScanConfig) -> Result<ScanConfig, ConfigError> {
        let frame_count = self.frame_count()?;
        check_brightness(self.brightness, config.slot_count)?;
        check_frames_on(self.frames_on, frame_count)?;
        check_no_blink_mask(self.no_blink_mask, config.unit_count)?;

        Ok(ScanConfig {
            frame_count,
            frames_on: self.frames_on,
            no_blink_mask: self.no_blink_mask,
            brightness: self.brightness,
            blinking: self.blinking,
            ..*config
        })
    }
}

/// Errors reading or writing a stored settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Output buffer too small or serialization failed
    Encode,
    /// Stored bytes are not a settings record
    Decode,
    /// Magic number mismatch (flash never written, or foreign data)
    BadMagic,
    /// Record written by an incompatible version
    BadVersion,
}

/// Display settings as stored in flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SettingsRecord {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Stored settings
    pub settings: DisplaySettings,
}

impl SettingsRecord {
    /// Wrap settings in a current-version record
    pub const fn new(settings: DisplaySettings) -> Self {
        Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            settings,
        }
    }

    /// Check if the header matches this firmware
    pub fn is_valid(&self) -> bool {
        self.magic == SETTINGS_MAGIC && self.version == SETTINGS_VERSION
    }
}

#[cfg(feature = "serde")]
impl SettingsRecord {
    /// Serialize into `buffer`, returning the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, SettingsError> {
        let used = postcard::to_slice(self, buffer).map_err(|_| SettingsError::Encode)?;
        Ok(used.len())
    }

    /// Deserialize and check the header
    pub fn decode(bytes: &[u8]) -> Result<Self, SettingsError> {
        let record: Self = postcard::from_bytes(bytes).map_err(|_| SettingsError::Decode)?;
        if record.magic != SETTINGS_MAGIC {
            return Err(SettingsError::BadMagic);
        }
        if record.version != SETTINGS_VERSION {
            return Err(SettingsError::BadVersion);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ScanConfig {
        ScanConfig::new(1, 4, 5)
    }

    #[test]
    fn test_from_config() {
        let settings = DisplaySettings::from_config(&board());
        assert_eq!(settings.brightness, 4);
        assert!(!settings.blinking);
        assert_eq!(settings.frames_on, 25);
        assert_eq!(settings.frames_off, 25);
        assert_eq!(settings.no_blink_mask, 0);
    }

    #[test]
    fn test_apply_keeps_board_layout() {
        let settings = DisplaySettings {
            brightness: 2,
            blinking: true,
            frames_on: 3,
            frames_off: 2,
            no_blink_mask: 0b0101,
        };
        let config = settings.apply_to(&board()).unwrap();

        assert_eq!(config.timer_period_ms, 1);
        assert_eq!(config.unit_count, 4);
        assert_eq!(config.slot_count, 5);
        assert_eq!(config.frame_count, 5);
        assert_eq!(config.frames_on, 3);
        assert_eq!(config.brightness, 2);
        assert!(config.blinking);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_apply_rejects_invalid() {
        let base = DisplaySettings::from_config(&board());

        let settings = DisplaySettings {
            brightness: 6,
            ..base
        };
        assert!(matches!(
            settings.apply_to(&board()),
            Err(ConfigError::BrightnessOutOfRange { .. })
        ));

        let settings = DisplaySettings {
            frames_on: 200,
            frames_off: 100,
            ..base
        };
        assert_eq!(
            settings.apply_to(&board()),
            Err(ConfigError::BlinkTimingOutOfRange)
        );

        let settings = DisplaySettings {
            frames_on: 0,
            frames_off: 5,
            ..base
        };
        assert!(matches!(
            settings.apply_to(&board()),
            Err(ConfigError::FramesOnOutOfRange { .. })
        ));

        let settings = DisplaySettings {
            no_blink_mask: 0b1_0000,
            ..base
        };
        assert!(matches!(
            settings.apply_to(&board()),
            Err(ConfigError::NoBlinkMaskOutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_frames_off_never_dark() {
        let settings = DisplaySettings {
            brightness: 4,
            blinking: true,
            frames_on: 7,
            frames_off: 0,
            no_blink_mask: 0,
        };
        let config = settings.apply_to(&board()).unwrap();
        assert_eq!(config.frame_count, 7);
        assert_eq!(config.frames_on, config.frame_count);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_encode_decode() {
        let record = SettingsRecord::new(DisplaySettings {
            brightness: 3,
            blinking: true,
            frames_on: 10,
            frames_off: 40,
            no_blink_mask: 0b0011,
        });

        let mut buffer = [0u8; MAX_SETTINGS_RECORD_LEN];
        let len = record.encode(&mut buffer).unwrap();
        assert!(len <= MAX_SETTINGS_RECORD_LEN);

        let decoded = SettingsRecord::decode(&buffer[..len]).unwrap();
        assert_eq!(decoded, record);
        assert!(decoded.is_valid());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_header_checks() {
        let settings = DisplaySettings::from_config(&board());
        let mut buffer = [0u8; MAX_SETTINGS_RECORD_LEN];

        let foreign = SettingsRecord {
            magic: 0xDEAD_BEEF,
            ..SettingsRecord::new(settings)
        };
        let len = foreign.encode(&mut buffer).unwrap();
        assert_eq!(
            SettingsRecord::decode(&buffer[..len]),
            Err(SettingsError::BadMagic)
        );

        let old = SettingsRecord {
            version: 0,
            ..SettingsRecord::new(settings)
        };
        let len = old.encode(&mut buffer).unwrap();
        assert_eq!(
            SettingsRecord::decode(&buffer[..len]),
            Err(SettingsError::BadVersion)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_record_errors() {
        let record = SettingsRecord::new(DisplaySettings::from_config(&board()));
        let mut tiny = [0u8; 2];
        assert_eq!(record.encode(&mut tiny), Err(SettingsError::Encode));

        assert_eq!(SettingsRecord::decode(&[]), Err(SettingsError::Decode));
    }
}
