//! Network address and identifier rules
//!
//! `ip`, `ipv4`, `ipv6`, `url` and `uuid` treat an empty string as "not
//! provided" and pass it; pair them with [`required`](super::required) when
//! the value is mandatory.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

// ============================================================================
// IP ADDRESSES
// ============================================================================

crate::rule! {
    /// Validates an IPv4 or IPv6 address.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(ip().validate("192.168.0.1").is_ok());
    /// assert!(ip().validate("2001:db8::1").is_ok());
    /// assert!(ip().validate("").is_ok());
    /// assert!(ip().validate("300.1.1.1").is_err());
    /// ```
    pub Ip for str;
    check(input) { input.is_empty() || input.parse::<IpAddr>().is_ok() }
    error(input) { ValidationError::new("ip", "invalid IP address format") }
    fn ip();
}

crate::rule! {
    /// Validates an IPv4 address in dotted-decimal form.
    pub Ipv4 for str;
    check(input) { input.is_empty() || matches!(input.parse::<IpAddr>(), Ok(IpAddr::V4(_))) }
    error(input) { ValidationError::new("ipv4", "invalid IPv4 address format") }
    fn ipv4();
}

crate::rule! {
    /// Validates an IPv6 address.
    pub Ipv6 for str;
    check(input) { input.is_empty() || matches!(input.parse::<IpAddr>(), Ok(IpAddr::V6(_))) }
    error(input) { ValidationError::new("ipv6", "invalid IPv6 address format") }
    fn ipv6();
}

// ============================================================================
// DOMAIN
// ============================================================================

crate::rule! {
    /// Validates a domain name.
    ///
    /// At most 255 bytes, at least two dot-separated labels, each label
    /// 1 to 63 ASCII letters, digits or hyphens and not starting or ending
    /// with a hyphen.
    pub Domain for str;
    check(input) { is_domain(input) }
    error(input) { ValidationError::new("domain", "invalid domain name") }
    fn domain();
}

fn is_domain(input: &str) -> bool {
    if input.is_empty() || input.len() > 255 {
        return false;
    }

    let mut labels = 0;
    for label in input.split('.') {
        labels += 1;
        let valid = (1..=63).contains(&label.len())
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-');
        if !valid {
            return false;
        }
    }
    labels >= 2
}

// ============================================================================
// PORT
// ============================================================================

crate::rule! {
    /// Validates a decimal port number in `0..=65535`.
    pub Port for str;
    check(input) { input.parse::<u16>().is_ok() }
    error(input) {
        ValidationError::new("port", "invalid port number").with_param("actual", input.to_string())
    }
    fn port();
}

// ============================================================================
// MAC ADDRESS
// ============================================================================

crate::rule! {
    /// Validates an IEEE 802 MAC-48, EUI-48, EUI-64 or 20-byte InfiniBand
    /// hardware address.
    ///
    /// Accepted notations: `00:00:5e:00:53:01`, `00-00-5e-00-53-01` and
    /// `0000.5e00.5301`. Separators cannot be mixed.
    pub MacAddress for str;
    check(input) { is_mac_address(input) }
    error(input) { ValidationError::new("mac_address", "invalid MAC address") }
    fn mac_address();
}

/// Hardware address sizes in bytes.
const MAC_SIZES: [usize; 3] = [6, 8, 20];

fn is_mac_address(input: &str) -> bool {
    let (separator, digits_per_group) = if input.contains(':') {
        (':', 2)
    } else if input.contains('-') {
        ('-', 2)
    } else if input.contains('.') {
        ('.', 4)
    } else {
        return false;
    };

    let mut groups = 0;
    for group in input.split(separator) {
        groups += 1;
        if group.len() != digits_per_group || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return false;
        }
    }
    MAC_SIZES.contains(&(groups * digits_per_group / 2))
}

// ============================================================================
// SUBNET MASK
// ============================================================================

crate::rule! {
    /// Validates an IPv4 subnet mask: contiguous one bits followed by zeros.
    pub SubnetMask for str;
    check(input) {
        input.parse::<Ipv4Addr>().is_ok_and(|mask| {
            let bits = u32::from(mask);
            bits.leading_ones() + bits.trailing_zeros() == u32::BITS
        })
    }
    error(input) { ValidationError::new("subnet_mask", "invalid subnet mask") }
    fn subnet_mask();
}

// ============================================================================
// URL / UUID
// ============================================================================

crate::rule! {
    /// Validates an absolute URL or an absolute path.
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(url().validate("https://example.com/a?b=c").is_ok());
    /// assert!(url().validate("/api/v1/users").is_ok());
    /// assert!(url().validate("example.com").is_err());
    /// ```
    pub Url for str;
    check(input) {
        input.is_empty() || input.starts_with('/') || url::Url::parse(input).is_ok()
    }
    error(input) { ValidationError::new("url", "invalid URL format") }
    fn url();
}

crate::rule! {
    /// Validates a hyphenated UUID (`8-4-4-4-12` hex digits, any case).
    pub Uuid for str;
    check(input) { input.is_empty() || UUID.is_match(input) }
    error(input) { ValidationError::new("uuid", "invalid UUID format") }
    fn uuid();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;

    #[rstest]
    #[case("127.0.0.1", true, true, false)]
    #[case("::1", true, false, true)]
    #[case("fe80::1:2", true, false, true)]
    #[case("", true, true, true)]
    #[case("256.0.0.1", false, false, false)]
    #[case("1.2.3", false, false, false)]
    #[case("localhost", false, false, false)]
    fn test_ip(#[case] value: &str, #[case] any: bool, #[case] v4: bool, #[case] v6: bool) {
        assert_eq!(ip().validate(value).is_ok(), any);
        assert_eq!(ipv4().validate(value).is_ok(), v4);
        assert_eq!(ipv6().validate(value).is_ok(), v6);
    }

    #[rstest]
    #[case("example.com", true)]
    #[case("sub.my-site.co.uk", true)]
    #[case("xn--80ak6aa92e.com", true)]
    #[case("localhost", false)]
    #[case("-bad.com", false)]
    #[case("bad-.com", false)]
    #[case("double..dot.com", false)]
    #[case("under_score.com", false)]
    #[case("", false)]
    fn test_domain(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(domain().validate(value).is_ok(), ok);
    }

    #[test]
    fn test_domain_length_limits() {
        let long_label = format!("{}.com", "a".repeat(64));
        assert!(domain().validate(&long_label).is_err());

        let label = "a".repeat(63);
        let too_long = [label.as_str(); 5].join(".");
        assert!(too_long.len() > 255);
        assert!(domain().validate(&too_long).is_err());
    }

    #[rstest]
    #[case("0", true)]
    #[case("80", true)]
    #[case("65535", true)]
    #[case("65536", false)]
    #[case("-1", false)]
    #[case("http", false)]
    #[case("", false)]
    fn test_port(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(port().validate(value).is_ok(), ok);
    }

    #[rstest]
    #[case("00:00:5e:00:53:01", true)]
    #[case("00-00-5E-00-53-01", true)]
    #[case("0000.5e00.5301", true)]
    #[case("02:00:5e:10:00:00:00:01", true)]
    #[case("0200.5e10.0000.0001", true)]
    #[case("00:00:5e:00:53", false)]
    #[case("00:00:5e-00:53:01", false)]
    #[case("00:00:5g:00:53:01", false)]
    #[case("00005e005301", false)]
    fn test_mac_address(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(mac_address().validate(value).is_ok(), ok);
    }

    #[test]
    fn test_infiniband_mac() {
        let address = ["00"; 20].join(":");
        assert!(mac_address().validate(&address).is_ok());
    }

    #[rstest]
    #[case("255.255.255.0", true)]
    #[case("255.255.128.0", true)]
    #[case("255.255.255.255", true)]
    #[case("0.0.0.0", true)]
    #[case("255.0.255.0", false)]
    #[case("255.255.255.1", false)]
    #[case("ffff::", false)]
    fn test_subnet_mask(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(subnet_mask().validate(value).is_ok(), ok);
    }

    #[rstest]
    #[case("https://example.com", true)]
    #[case("ftp://files.example.com/a.txt", true)]
    #[case("/relative/but/absolute", true)]
    #[case("", true)]
    #[case("not a url", false)]
    #[case("example.com/path", false)]
    fn test_url(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(url().validate(value).is_ok(), ok);
    }

    #[rstest]
    #[case("123e4567-e89b-12d3-a456-426614174000", true)]
    #[case("123E4567-E89B-12D3-A456-426614174000", true)]
    #[case("", true)]
    #[case("123e4567e89b12d3a456426614174000", false)]
    #[case("123e4567-e89b-12d3-a456-42661417400g", false)]
    fn test_uuid(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(uuid().validate(value).is_ok(), ok);
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(ipv4().validate("::1").unwrap_err().message, "invalid IPv4 address format");
        assert_eq!(port().validate("x").unwrap_err().message, "invalid port number");
        assert_eq!(uuid().validate("x").unwrap_err().message, "invalid UUID format");
    }
}
