use super::*;

#[test]
fn download_name_carries_timestamp() {
    assert_eq!(download_file_name(1_700_000_000_123), "chalkies-meme-1700000000123.png");
    assert_eq!(download_file_name(0), "chalkies-meme-0.png");
}

#[test]
fn share_url_targets_tweet_intent() {
    let url = share_intent_url().unwrap();
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("twitter.com"));
    assert_eq!(url.path(), "/intent/tweet");
}

#[test]
fn share_text_round_trips_through_query() {
    let url = share_intent_url().unwrap();
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("text".to_owned(), SHARE_TEXT.to_owned())]);
}

#[test]
fn hashtags_are_escaped() {
    let url = share_intent_url().unwrap();
    assert!(url.fragment().is_none());
    assert!(url.as_str().contains("%23ChalkiesNFT"));
    assert!(url.as_str().starts_with("https://twitter.com/intent/tweet?text=Check+out+my+Chalkies+meme%21"));
}
