use super::*;
use std::collections::HashSet;

#[test]
fn inventory_ids_are_unique() {
    let ids: HashSet<&str> = INVENTORY.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), INVENTORY.len());
}

#[test]
fn hero_slide_ids_are_unique() {
    let ids: HashSet<u32> = HERO_SLIDES.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), HERO_SLIDES.len());
    assert_eq!(HERO_SLIDES.len(), 3);
}

#[test]
fn hero_title_splits_first_word() {
    assert_eq!(HERO_SLIDES[0].title_parts(), ("Timeless", "Elegance"));
    let single = HeroSlide { id: 9, image: "", title: "Legend", subtitle: "", description: "" };
    assert_eq!(single.title_parts(), ("Legend", ""));
}

#[test]
fn average_rating_is_five() {
    assert_eq!(average_rating(), "5.0");
}

#[test]
fn persona_mentions_currency_and_name() {
    assert!(ASSISTANT_PERSONA.contains("Chacha"));
    assert!(ASSISTANT_PERSONA.contains('\u{20b9}'));
}
