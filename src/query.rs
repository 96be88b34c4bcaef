//! Query-string parsing module
//!
//! Minimal parser for URL query strings: `&`-separated `key=value` pairs,
//! `+` decoded as space, `%XX` hex escapes. Pairs are kept in order of
//! appearance and lookups return the first match.

/// Parse a raw query string into key/value pairs
pub fn parse(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

/// Look up the first value for `name`
pub fn get<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Percent-decode a query component; invalid escapes are kept verbatim
fn decode(component: &str) -> String {
    let bytes = component.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match hex_pair(bytes[i + 1], bytes[i + 2]) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            other => {
                out.push(other);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_pairs() {
        let params = parse("a=10&b=2");
        assert_eq!(
            params,
            vec![
                ("a".to_string(), "10".to_string()),
                ("b".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn missing_value_is_empty_string() {
        let params = parse("a=&b");
        assert_eq!(get(&params, "a"), Some(""));
        assert_eq!(get(&params, "b"), Some(""));
    }

    #[test]
    fn decodes_plus_and_percent_escapes() {
        let params = parse("q=hello+world%21");
        assert_eq!(get(&params, "q"), Some("hello world!"));
    }

    #[test]
    fn first_duplicate_wins() {
        let params = parse("a=1&a=2");
        assert_eq!(get(&params, "a"), Some("1"));
    }

    #[test]
    fn empty_query_yields_no_pairs() {
        assert!(parse("").is_empty());
        assert!(parse("&&").is_empty());
    }

    #[test]
    fn invalid_escape_is_kept_verbatim() {
        let params = parse("p=100%");
        assert_eq!(get(&params, "p"), Some("100%"));
        let params = parse("p=%zz");
        assert_eq!(get(&params, "p"), Some("%zz"));
    }

    #[test]
    fn unknown_key_is_none() {
        let params = parse("a=1");
        assert_eq!(get(&params, "b"), None);
    }
}
