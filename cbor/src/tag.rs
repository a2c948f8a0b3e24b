/// A CBOR tag, as delivered to [`Receiver::on_tag`](super::Receiver::on_tag).
///
/// Tags are carried opaquely: the registered ones get a name so decoders can
/// match on them, everything else is [`Tag::Other`]. No semantics are applied.
/// Equality and hashing go by [`Tag::code`], so `Other(24)` equals
/// `EmbeddedCbor`.
#[derive(Debug, Clone, Copy)]
pub enum Tag {
    DateTimeString,
    EpochDateTime,
    PositiveBigNum,
    NegativeBigNum,
    DecimalFraction,
    BigFloat,
    HintBase64url,
    HintBase64,
    HintBase16,
    EmbeddedCbor,
    TextUri,
    TextBase64Url,
    TextBase64,
    TextRegex,
    TextMime,
    MagicHeader,
    Other(u64),
}

impl Tag {
    pub fn from_code(code: u64) -> Self {
        match code {
            0 => Self::DateTimeString,
            1 => Self::EpochDateTime,
            2 => Self::PositiveBigNum,
            3 => Self::NegativeBigNum,
            4 => Self::DecimalFraction,
            5 => Self::BigFloat,
            21 => Self::HintBase64url,
            22 => Self::HintBase64,
            23 => Self::HintBase16,
            24 => Self::EmbeddedCbor,
            32 => Self::TextUri,
            33 => Self::TextBase64Url,
            34 => Self::TextBase64,
            35 => Self::TextRegex,
            36 => Self::TextMime,
            55799 => Self::MagicHeader,
            code => Self::Other(code),
        }
    }

    pub fn code(&self) -> u64 {
        match self {
            Self::DateTimeString => 0,
            Self::EpochDateTime => 1,
            Self::PositiveBigNum => 2,
            Self::NegativeBigNum => 3,
            Self::DecimalFraction => 4,
            Self::BigFloat => 5,
            Self::HintBase64url => 21,
            Self::HintBase64 => 22,
            Self::HintBase16 => 23,
            Self::EmbeddedCbor => 24,
            Self::TextUri => 32,
            Self::TextBase64Url => 33,
            Self::TextBase64 => 34,
            Self::TextRegex => 35,
            Self::TextMime => 36,
            Self::MagicHeader => 55799,
            Self::Other(code) => *code,
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Tag {}

impl core::hash::Hash for Tag {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.code().hash(state)
    }
}

impl From<u64> for Tag {
    fn from(code: u64) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_codes() {
        for code in (0..64).chain([55799, 55800, u64::MAX]) {
            assert_eq!(Tag::from_code(code).code(), code);
        }
        assert_eq!(Tag::from(1), Tag::EpochDateTime);
        assert_eq!(Tag::from_code(6), Tag::Other(6));
        assert_eq!(Tag::from_code(55799), Tag::MagicHeader);
    }

    #[test]
    fn test_equality_by_code() {
        assert_eq!(Tag::Other(0), Tag::DateTimeString);
        assert_eq!(Tag::Other(55799), Tag::MagicHeader);
        assert_ne!(Tag::Other(6), Tag::BigFloat);

        let tags: std::collections::HashSet<Tag> =
            [Tag::Other(24), Tag::EmbeddedCbor, Tag::from_code(24)].into();
        assert_eq!(tags.len(), 1);
        assert!(tags.contains(&Tag::Other(24)));
    }
}
