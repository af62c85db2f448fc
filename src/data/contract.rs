use alloy::primitives::{Address, address};
use alloy::sol;
use alloy::sol_types::SolCall;

/// Mood contract deployment on Flare Coston2.
pub const MOOD_CONTRACT: Address = address!("167799e9066B38F23413f9d86d805BdB1deEba2A");

// The contract interface: two string accessors and one setter
sol! {
    #[allow(missing_docs)]
    function getMood() external view returns (string);
    #[allow(missing_docs)]
    function mood() external view returns (string);
    #[allow(missing_docs)]
    function setMood(string _mood) external;
}

/// Calldata for the `mood()` accessor.
pub fn mood_calldata() -> Vec<u8> {
    moodCall {}.abi_encode()
}

/// Calldata for the legacy `getMood()` accessor.
pub fn get_mood_calldata() -> Vec<u8> {
    getMoodCall {}.abi_encode()
}

/// Calldata for a `setMood(string)` update.
pub fn set_mood_calldata(mood: &str) -> Vec<u8> {
    setMoodCall {
        _mood: mood.to_string(),
    }
    .abi_encode()
}

/// Decode the string returned by `mood()` / `getMood()`.
/// Both accessors share the same return shape.
pub fn decode_mood_return(data: &[u8]) -> Result<String, alloy::sol_types::Error> {
    moodCall::abi_decode_returns(data, true).map(|ret| ret._0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ABI-encode a single string return value by hand:
    /// one offset word, one length word, then the padded bytes.
    fn encode_string_return(s: &str) -> Vec<u8> {
        let mut data = vec![0u8; 32];
        data[31] = 0x20;
        let mut len_word = [0u8; 32];
        len_word[24..].copy_from_slice(&(s.len() as u64).to_be_bytes());
        data.extend_from_slice(&len_word);
        let mut bytes = s.as_bytes().to_vec();
        let padded_len = bytes.len().div_ceil(32) * 32;
        bytes.resize(padded_len, 0);
        data.extend_from_slice(&bytes);
        data
    }

    #[test]
    fn test_decode_mood_return() {
        let data = encode_string_return("happy");
        assert_eq!(decode_mood_return(&data).unwrap(), "happy");
    }

    #[test]
    fn test_decode_empty_mood() {
        let data = encode_string_return("");
        assert_eq!(decode_mood_return(&data).unwrap(), "");
    }

    #[test]
    fn test_decode_truncated_data() {
        assert!(decode_mood_return(&[0u8; 16]).is_err());
    }

    #[test]
    fn test_read_calldata_is_selector_only() {
        assert_eq!(mood_calldata().len(), 4);
        assert_eq!(get_mood_calldata().len(), 4);
        // Distinct functions, distinct selectors
        assert_ne!(mood_calldata(), get_mood_calldata());
    }

    #[test]
    fn test_set_mood_calldata_layout() {
        let data = set_mood_calldata("happy");
        // selector + offset word + length word + one padded data word
        assert_eq!(data.len(), 4 + 32 + 32 + 32);
        assert_eq!(&data[..4], setMoodCall::SELECTOR.as_slice());
        assert_eq!(&data[68..73], b"happy");
    }
}
