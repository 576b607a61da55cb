use super::*;

#[test]
fn keeps_source_until_failure() {
    let src = "https://example.com/car.jpg";
    assert_eq!(resolve_src(src, false, ImageRole::Card), src);
    assert_eq!(resolve_src(src, true, ImageRole::Card), CARD_FALLBACK);
}

#[test]
fn empty_source_uses_fallback() {
    assert_eq!(resolve_src("", false, ImageRole::Hero), HERO_FALLBACK);
}

#[test]
fn each_role_has_distinct_fallback() {
    let all = [ImageRole::Card.fallback(), ImageRole::Hero.fallback(), ImageRole::Heritage.fallback()];
    assert_ne!(all[0], all[1]);
    assert_ne!(all[1], all[2]);
    assert_ne!(all[0], all[2]);
}
