// https://random-word-api.herokuapp.com/ - `number` words per call, body is a JSON array of strings
// the body is read as plain text and cleaned by `parse_words`, so quotes and brackets never reach the caller

use url::{form_urlencoded, Url};

pub const DEFAULT_WORDS_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Appends `number=<count>` to `base`. The count is passed through as typed
/// and percent-encoded, so validating it is left to the server.
pub fn words_url(base: &Url, count: &str) -> Url {
    // form encoding emits a lone "+" per space and escapes a literal '+'
    let number: String = form_urlencoded::byte_serialize(count.as_bytes())
        .map(|chunk| if chunk == "+" { "%20" } else { chunk })
        .collect();
    let query = match base.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&number={number}"),
        _ => format!("number={number}"),
    };
    let mut url = base.clone();
    url.set_query(Some(&query));
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(DEFAULT_WORDS_URL).unwrap()
    }

    #[test]
    fn appends_count_as_number_parameter() {
        assert_eq!(
            words_url(&base(), "5").as_str(),
            "https://random-word-api.herokuapp.com/word?number=5"
        );
    }

    #[test]
    fn count_is_percent_encoded() {
        let url = words_url(&base(), "3&lang=x y");
        assert_eq!(url.query(), Some("number=3%26lang%3Dx%20y"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, [("number".to_owned(), "3&lang=x y".to_owned())]);
    }

    #[test]
    fn space_becomes_percent_twenty_and_plus_is_escaped() {
        let url = words_url(&base(), "1 0+2");
        assert_eq!(url.query(), Some("number=1%200%2B2"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, [("number".to_owned(), "1 0+2".to_owned())]);
    }

    #[test]
    fn keeps_existing_query() {
        let base = Url::parse("http://localhost:9000/word?lang=en").unwrap();
        assert_eq!(
            words_url(&base, "2").as_str(),
            "http://localhost:9000/word?lang=en&number=2"
        );
    }

    #[test]
    fn empty_count_is_sent_empty() {
        assert_eq!(words_url(&base(), "").query(), Some("number="));
    }
}
