use super::*;
use hex_literal::hex;

fn drain<I: Input>(mut input: I) -> Vec<u8> {
    let mut v = Vec::new();
    while !input.is_end().unwrap() {
        v.push(input.read_byte().unwrap());
    }
    assert!(matches!(input.read_byte(), Err(Error::UnexpectedEnd { .. })));
    v
}

#[test]
fn array_reads() {
    let data = hex!("0102 03040506 0708090a0b0c0d0e 0f");
    let mut input = provider::from_slice(&data);
    assert_eq!(input.read_short().unwrap(), 0x0102);
    assert_eq!(input.read_int().unwrap(), 0x03040506);
    assert_eq!(input.read_long().unwrap(), 0x0708090a0b0c0d0e);
    assert_eq!(input.position(), 14);
    assert_eq!(input.peek_byte().unwrap(), Some(0x0f));
    assert_eq!(input.read_byte().unwrap(), 0x0f);
    assert!(input.is_end().unwrap());
    assert!(matches!(
        input.read_byte(),
        Err(Error::UnexpectedEnd { position: 15 })
    ));
}

#[test]
fn array_views() {
    let data = b"hello world";
    let mut input = provider::from_slice(data);
    assert_eq!(input.view(6..11), Some(&b"world"[..]));
    assert_eq!(input.view(6..12), None);

    let hello: Vec<u8> = input.read_bytes(5).unwrap();
    assert_eq!(hello, b"hello");
    assert_eq!(input.remaining(), b" world");

    input.unread(2).unwrap();
    assert_eq!(input.position(), 3);
    assert!(input.unread(4).is_err());

    input.set_position(11).unwrap();
    assert!(input.is_end().unwrap());
    assert!(input.set_position(12).is_err());

    let mut short = [0u8; 4];
    input.set_position(9).unwrap();
    assert!(matches!(
        input.read_into(&mut short),
        Err(Error::UnexpectedEnd { .. })
    ));
    assert_eq!(input.position(), 9);
}

#[test]
fn into_input() {
    use provider::IntoInput;

    assert_eq!(drain([1u8, 2, 3].as_slice().into_input()), [1, 2, 3]);
    assert_eq!(drain((&[4u8, 5]).into_input()), [4, 5]);
    assert_eq!(drain(vec![6u8].into_input()), [6]);
    assert_eq!(drain((&vec![7u8, 8]).into_input()), [7, 8]);
    assert_eq!(drain(bytes::Bytes::from_static(b"ab").into_input()), b"ab");
    assert!(drain(Vec::<u8>::new().into_input()).is_empty());
}

#[test]
fn chunked_reads_cross_boundaries() {
    let chunks = vec![
        vec![0x01u8],
        vec![],
        vec![0x02, 0x03],
        vec![0x04, 0x05, 0x06, 0x07, 0x08],
    ];
    let mut input = provider::from_chunks(chunks);

    assert_eq!(input.read_int().unwrap(), 0x01020304);
    assert_eq!(input.chunk_index(), 3);
    assert_eq!(input.position(), 4);

    let mut buf = [0u8; 3];
    input.read_into(&mut buf).unwrap();
    assert_eq!(buf, [5, 6, 7]);
    assert_eq!(input.chunk_offset(), 4);

    input.unread(2).unwrap();
    assert_eq!(input.chunk_remaining(), [6, 7, 8]);
    assert!(matches!(input.unread(10), Err(Error::Unsupported(_))));

    let tail: bytes::Bytes = input.read_bytes(3).unwrap();
    assert_eq!(tail, &[6u8, 7, 8][..]);
    assert!(input.is_end().unwrap());
    assert_eq!(input.peek_byte().unwrap(), None);
    assert!(matches!(
        input.read_byte(),
        Err(Error::UnexpectedEnd { position: 8 })
    ));
}

#[test]
fn chunked_mixed_representations() {
    let chunks: Vec<Chunk> = vec![
        Chunk::from(vec![1u8, 2]),
        Chunk::from(bytes::Bytes::from_static(&[3, 4])),
        Chunk::Static(b"\x05"),
    ];
    assert_eq!(drain(provider::from_chunks(chunks)), [1, 2, 3, 4, 5]);
}

#[test]
fn chunked_empty() {
    let mut input = provider::from_chunks(Vec::<Vec<u8>>::new());
    assert!(input.is_end().unwrap());
    assert_eq!(input.position(), 0);

    let mut input = provider::from_chunks(vec![Vec::<u8>::new(), Vec::new()]);
    assert!(input.is_end().unwrap());
    assert_eq!(input.read_bytes::<Vec<u8>>(0).unwrap(), Vec::<u8>::new());
}

#[test]
fn chunked_matches_direct() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    for size in [1, 2, 3, 7, 64, 999, 1000, 1001] {
        let chunked = provider::from_chunks(data.chunks(size).map(|c| c.to_vec()));
        assert_eq!(drain(chunked), data, "chunk size {size}");
    }
    assert_eq!(drain(provider::from_slice(&data)), data);
}

#[test]
fn int_round_trip() {
    let mut o = BufferOutput::new();
    o.write_int(16909060).unwrap();
    let bytes = o.result();
    assert_eq!(bytes, hex!("01020304"));

    let mut input = provider::from_slice(&bytes);
    assert_eq!(input.read_int().unwrap(), 16909060);

    let mut input = provider::from_chunks(bytes.chunks(3).map(|c| c.to_vec()));
    assert_eq!(input.read_int().unwrap(), 16909060);
}

#[test]
fn read_through_mut_ref() {
    fn skip_two<I: Input>(mut input: I) {
        input.read_short().unwrap();
    }

    let mut input = provider::from_slice(&[1, 2, 3]);
    skip_two(&mut input);
    assert_eq!(input.read_byte().unwrap(), 3);
}

#[test]
fn oversized_lengths_fail_cleanly() {
    let data = [0xffu8, 1, 2, 3];

    let mut input = provider::from_slice(&data);
    input.read_byte().unwrap();
    assert!(matches!(
        input.read_bytes::<Vec<u8>>(usize::MAX),
        Err(Error::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        input.read_bytes::<bytes::Bytes>(4),
        Err(Error::UnexpectedEnd { .. })
    ));
    // Nothing consumed by the failed reads
    assert_eq!(input.position(), 1);
    assert_eq!(input.read_bytes::<Vec<u8>>(3).unwrap(), [1, 2, 3]);

    let mut input = provider::from_chunks(vec![vec![0xffu8, 1], vec![2, 3]]);
    input.read_byte().unwrap();
    assert!(matches!(
        input.read_bytes::<Vec<u8>>(usize::MAX),
        Err(Error::UnexpectedEnd { position: 4 })
    ));

    fn read_all<I: Input>(mut input: I) -> Result<Vec<u8>> {
        input.read_bytes(usize::MAX)
    }
    let mut input = provider::from_chunks(vec![data.to_vec()]);
    assert!(matches!(
        read_all(&mut input),
        Err(Error::UnexpectedEnd { position: 4 })
    ));
}

#[test]
fn default_read_bytes_spans_small_reads() {
    // Input with only the required methods, so `read_bytes` takes the default path
    struct Bytewise<'a>(ArrayInput<&'a [u8]>);

    impl Input for Bytewise<'_> {
        fn position(&self) -> u64 {
            self.0.position()
        }

        fn peek_byte(&mut self) -> Result<Option<u8>> {
            self.0.peek_byte()
        }

        fn read_byte(&mut self) -> Result<u8> {
            self.0.read_byte()
        }
    }

    let data: Vec<u8> = (0..=255u8).cycle().take(700).collect();
    let mut input = Bytewise(ArrayInput::new(data.as_slice()));
    let all: Vec<u8> = input.read_bytes(700).unwrap();
    assert_eq!(all, data);

    let mut input = Bytewise(ArrayInput::new(data.as_slice()));
    input.read_byte().unwrap();
    assert!(matches!(
        input.read_bytes::<Vec<u8>>(usize::MAX),
        Err(Error::UnexpectedEnd { position: 700 })
    ));
}
