//! `application/x-www-form-urlencoded` serialization, matching the browser's
//! `URLSearchParams`.

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'*' | b'-' | b'.' | b'_')
}

pub fn encode_component(value: &str, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in value.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else if b == b' ' {
            out.push('+');
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0F) as usize] as char);
        }
    }
}

pub fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::new();
    for (i, (k, v)) in pairs.into_iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        encode_component(k, &mut out);
        out.push('=');
        encode_component(v, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::encode_pairs;

    #[test]
    fn matches_url_search_params() {
        assert_eq!(encode_pairs([("a", "b c"), ("x", "1&2=3")]), "a=b+c&x=1%262%3D3");
        assert_eq!(encode_pairs([("budget", "<10K")]), "budget=%3C10K");
        assert_eq!(encode_pairs([("n", "é")]), "n=%C3%A9");
        assert_eq!(encode_pairs([("k", "a*b-c.d_e~")]), "k=a*b-c.d_e%7E");
    }

    #[test]
    fn empty_values_keep_their_key() {
        assert_eq!(encode_pairs([("a", ""), ("b", "")]), "a=&b=");
        assert_eq!(encode_pairs(std::iter::empty()), "");
    }
}
