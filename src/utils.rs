use alloy::primitives::{Address, B256, U256};
use chrono::{DateTime, Utc};

/// Truncate a B256 hash to "0xabcd...ef12" format
pub fn truncate_hash(hash: &B256) -> String {
    let s = format!("{hash}");
    if s.len() > 14 {
        format!("{}...{}", &s[..8], &s[s.len() - 4..])
    } else {
        s
    }
}

/// Truncate an address to "0xabcd...ef12" format
pub fn truncate_address(addr: &Address) -> String {
    let s = format!("{addr}");
    if s.len() > 14 {
        format!("{}...{}", &s[..8], &s[s.len() - 4..])
    } else {
        s
    }
}

/// Format a U256 wei value as the chain's native token with reasonable precision
pub fn format_native(wei: U256, symbol: &str) -> String {
    let value_str = format_u256_as_decimal(wei, 18);
    format!("{value_str} {symbol}")
}

/// Format a U256 value as decimal with given decimals
pub fn format_u256_as_decimal(value: U256, decimals: u8) -> String {
    if value.is_zero() {
        return "0.0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = value / divisor;
    let remainder = value % divisor;

    if remainder.is_zero() {
        return format!("{whole}.0");
    }

    let remainder_str = format!("{remainder}");
    let padded = format!("{:0>width$}", remainder_str, width = decimals as usize);
    let trimmed = padded.trim_end_matches('0');

    // Limit to 6 decimal places
    let decimals_shown = trimmed.len().min(6);
    format!("{whole}.{}", &trimmed[..decimals_shown])
}

/// Format a number with comma separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a Unix timestamp as "Xm ago", "Xh ago", etc.
pub fn format_time_ago(timestamp: u64) -> String {
    let now = Utc::now().timestamp() as u64;
    if timestamp > now {
        return "just now".to_string();
    }
    let diff = now - timestamp;
    if diff < 60 {
        format!("{diff}s ago")
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else if diff < 86400 {
        format!("{}h ago", diff / 3600)
    } else {
        format!("{}d ago", diff / 86400)
    }
}

/// Format a Unix timestamp as a datetime string
pub fn format_timestamp(timestamp: u64) -> String {
    DateTime::from_timestamp(timestamp as i64, 0)
        .map(|dt| dt.format("%b %d, %Y %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_address() {
        let addr: Address = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
            .parse()
            .unwrap();
        let s = truncate_address(&addr);
        assert!(s.starts_with("0x"));
        assert!(s.contains("..."));
        assert_eq!(s.len(), 15);
    }

    #[test]
    fn test_format_native_zero() {
        assert_eq!(format_native(U256::ZERO, "C2FLR"), "0.0 C2FLR");
    }

    #[test]
    fn test_format_native_whole() {
        let one = U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(format_native(one, "FLR"), "1.0 FLR");
    }

    #[test]
    fn test_format_u256_fractional() {
        // 1.5 * 10^18
        let value = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_u256_as_decimal(value, 18), "1.5");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
