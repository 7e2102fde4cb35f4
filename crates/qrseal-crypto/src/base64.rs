use base64ct::{Base64, Encoding};

/// Base64 encode bytes (standard alphabet, padded).
pub fn base64_encode(data: &[u8]) -> String {
    Base64::encode_string(data)
}

/// Base64 decode a string to bytes.
pub fn base64_decode(s: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64::decode_vec(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let data = b"Hello, World!";
        let encoded = base64_encode(data);
        let decoded = base64_decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn standard_alphabet_with_padding() {
        // Bytes that produce + and / in standard base64
        let data = vec![0xfb, 0xff, 0xfe, 0x01];
        let encoded = base64_encode(&data);
        assert!(encoded.contains('+') || encoded.contains('/'));
        assert!(encoded.ends_with('='));
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(base64_decode("not base64!!!").is_err());
    }

    #[test]
    fn empty_input() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_decode("").unwrap(), Vec::<u8>::new());
    }
}
