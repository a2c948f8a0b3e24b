use super::*;
use alloc::format;

/// Default chunk size for file and stream providers.
pub const DEFAULT_BUFFER_SIZE: usize = 16384;

/// Smallest chunk size a provider accepts.
pub const MIN_BUFFER_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    // Chunk size for streams, and the largest file read in a single piece
    pub buffer_size: usize, // default 16384
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl Config {
    pub fn new(buffer_size: usize) -> Result<Self> {
        let config = Self { buffer_size };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_size < MIN_BUFFER_SIZE {
            return Err(Error::InvalidConfiguration(format!(
                "buffer_size must be at least {MIN_BUFFER_SIZE}, got {}",
                self.buffer_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(Config::default().buffer_size, 16384);
        assert!(Config::default().validate().is_ok());
        assert!(Config::new(MIN_BUFFER_SIZE).is_ok());
        assert!(matches!(
            Config::new(255),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(Config { buffer_size: 0 }.validate().is_err());
    }
}
