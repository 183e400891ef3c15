use super::*;

const URL: &str = "http://localhost:3000/memes/abc";
const ENCODED_URL: &str = "http%3A%2F%2Flocalhost%3A3000%2Fmemes%2Fabc";
const ENCODED_TEXT: &str = "Check%20out%20this%20meme%20I%20created%20%F0%9F%98%84";

#[test]
fn encode_matches_uri_component_rules() {
    assert_eq!(encode("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
    assert_eq!(encode("-_.!~*'()"), "-_.!~*'()");
}

#[test]
fn facebook_link_wraps_url() {
    assert_eq!(
        ShareTarget::Facebook.link(Some(URL)).as_deref(),
        Some(format!("https://www.facebook.com/sharer/sharer.php?u={ENCODED_URL}").as_str())
    );
}

#[test]
fn facebook_needs_a_url() {
    assert_eq!(ShareTarget::Facebook.link(None), None);
    assert_eq!(ShareTarget::Facebook.link(Some("")), None);
}

#[test]
fn twitter_link_has_text_and_url() {
    assert_eq!(
        ShareTarget::Twitter.link(Some(URL)).as_deref(),
        Some(format!("https://twitter.com/intent/tweet?text={ENCODED_TEXT}&url={ENCODED_URL}").as_str())
    );
}

#[test]
fn twitter_without_url_sends_empty_url() {
    assert_eq!(
        ShareTarget::Twitter.link(None).as_deref(),
        Some(format!("https://twitter.com/intent/tweet?text={ENCODED_TEXT}&url=").as_str())
    );
}

#[test]
fn whatsapp_link_appends_url_to_text() {
    assert_eq!(
        ShareTarget::WhatsApp.link(Some(URL)).as_deref(),
        Some(format!("https://wa.me/?text={ENCODED_TEXT}%20{ENCODED_URL}").as_str())
    );
}

#[test]
fn telegram_link_has_url_and_text() {
    assert_eq!(
        ShareTarget::Telegram.link(Some(URL)).as_deref(),
        Some(format!("https://t.me/share/url?url={ENCODED_URL}&text={ENCODED_TEXT}").as_str())
    );
}

#[test]
fn every_target_has_a_label() {
    for target in ShareTarget::ALL {
        assert!(!target.label().is_empty());
    }
}
