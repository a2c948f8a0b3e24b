use super::*;
use tessera_io::{Input, Output};

/// A CBOR simple value.
///
/// Only codes `0..=19` and `24..=255` are representable; 20 to 23 are the
/// booleans, null and undefined, and everything above 255 does not fit the
/// wire encoding. Every constructor, including [`SimpleValue::decode`],
/// goes through [`SimpleValue::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimpleValue(u8);

impl SimpleValue {
    pub fn new(value: i32) -> Result<Self, Error> {
        match value {
            0..=19 | 24..=255 => Ok(Self(value as u8)),
            _ => Err(Error::InvalidSimpleValue(value)),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn encode<O>(&self, output: &mut O) -> Result<(), Error>
    where
        O: Output,
    {
        if self.0 < 24 {
            output.write_byte((7 << 5) | self.0)?;
        } else {
            output.write_byte((7 << 5) | 24)?;
            output.write_byte(self.0)?;
        }
        Ok(())
    }

    pub fn decode<I>(input: &mut I) -> Result<Self, Error>
    where
        I: Input,
    {
        match input.read_byte()? {
            b @ 0xE0..=0xF7 => Self::new((b & 0x1F) as i32),
            0xF8 => Self::new(input.read_byte()? as i32),
            b => Err(Error::NotSimpleValue(b)),
        }
    }
}

impl TryFrom<i32> for SimpleValue {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u8> for SimpleValue {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as i32)
    }
}

impl From<SimpleValue> for u8 {
    fn from(value: SimpleValue) -> Self {
        value.0
    }
}

impl core::fmt::Display for SimpleValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "simple({})", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;
    use tessera_io::{BufferOutput, provider};

    #[test]
    fn test_legal_range() {
        for v in -300..=300 {
            let legal = (0..=19).contains(&v) || (24..=255).contains(&v);
            assert_eq!(SimpleValue::new(v).is_ok(), legal, "{v}");
        }
        for v in [20, 21, 22, 23, -1, 256, i32::MIN, i32::MAX] {
            assert!(matches!(
                SimpleValue::new(v),
                Err(Error::InvalidSimpleValue(e)) if e == v
            ));
        }
        assert_eq!(SimpleValue::try_from(255u8).unwrap().value(), 255);
        assert!(SimpleValue::try_from(22u8).is_err());

        let msg = SimpleValue::new(21).unwrap_err().to_string();
        assert!(msg.contains("21") && msg.contains("0..=19 or 24..=255"));
    }

    #[test]
    fn test_encode() {
        let mut o = BufferOutput::new();
        SimpleValue::new(16).unwrap().encode(&mut o).unwrap();
        SimpleValue::new(24).unwrap().encode(&mut o).unwrap();
        SimpleValue::new(255).unwrap().encode(&mut o).unwrap();
        assert_eq!(o.result(), hex!("f0 f818 f8ff"));
    }

    #[test]
    fn test_decode() {
        let data = hex!("f0 f818 f8ff e0");
        let mut input = provider::from_slice(&data);
        for v in [16, 24, 255, 0] {
            assert_eq!(SimpleValue::decode(&mut input).unwrap().value(), v);
        }

        // Booleans, null and undefined are not simple values
        for b in hex!("f4 f5 f6 f7") {
            assert!(matches!(
                SimpleValue::decode(&mut provider::from_slice(&[b])),
                Err(Error::InvalidSimpleValue(20..=23))
            ));
        }
        assert!(matches!(
            SimpleValue::decode(&mut provider::from_slice(&hex!("f814"))),
            Err(Error::InvalidSimpleValue(20))
        ));
        assert!(matches!(
            SimpleValue::decode(&mut provider::from_slice(&hex!("f93c00"))),
            Err(Error::NotSimpleValue(0xf9))
        ));
        assert!(matches!(
            SimpleValue::decode(&mut provider::from_slice(&hex!("01"))),
            Err(Error::NotSimpleValue(0x01))
        ));
        assert!(matches!(
            SimpleValue::decode(&mut provider::from_slice(&hex!("f8"))),
            Err(Error::Io(tessera_io::Error::UnexpectedEnd { position: 1 }))
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_decode_from_reader() {
        let data = hex!("f820 f5");
        let mut input =
            provider::from_reader(data.as_slice(), &tessera_io::Config::default()).unwrap();
        assert_eq!(SimpleValue::decode(&mut input).unwrap().value(), 32);
        assert!(matches!(
            SimpleValue::decode(&mut input),
            Err(Error::InvalidSimpleValue(21))
        ));
        assert!(matches!(
            SimpleValue::decode(&mut input),
            Err(Error::Io(tessera_io::Error::UnexpectedEnd { position: 3 }))
        ));
    }
}
