use super::*;
use crate::content::INVENTORY;

fn car(id: &'static str, category: Category) -> Car {
    Car {
        id,
        name: "Test Car",
        brand: "Test Motors",
        price: 100_000,
        category,
        year: 1990,
        image: "https://example.test/car.jpg",
        description: "test",
        specs: CarSpecs { mileage: "10 kmpl", engine: "1000 cc", top_speed: "100 kmph" },
    }
}

// =============================================================
// filter_cars
// =============================================================

#[test]
fn filter_all_returns_full_catalog_in_order() {
    let filtered = filter_cars(INVENTORY, CategoryFilter::All);
    assert_eq!(filtered.len(), INVENTORY.len());
    let ids: Vec<&str> = filtered.iter().map(|c| c.id).collect();
    let expected: Vec<&str> = INVENTORY.iter().map(|c| c.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn filter_by_category_keeps_exact_matches_only() {
    for category in [Category::Sedan, Category::Hatchback, Category::Suv, Category::Muscle] {
        let filtered = filter_cars(INVENTORY, CategoryFilter::Only(category));
        assert!(filtered.iter().all(|c| c.category == category));
        let expected = INVENTORY.iter().filter(|c| c.category == category).count();
        assert_eq!(filtered.len(), expected);
    }
}

#[test]
fn filter_preserves_relative_order() {
    let cars = [
        car("a", Category::Suv),
        car("b", Category::Sedan),
        car("c", Category::Suv),
        car("d", Category::Suv),
    ];
    let filtered = filter_cars(&cars, CategoryFilter::Only(Category::Suv));
    let ids: Vec<&str> = filtered.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["a", "c", "d"]);
}

#[test]
fn filter_with_no_matches_is_empty() {
    let cars = [car("a", Category::Sedan)];
    assert!(filter_cars(&cars, CategoryFilter::Only(Category::Muscle)).is_empty());
}

// =============================================================
// category_filters
// =============================================================

#[test]
fn category_filters_start_with_all_then_first_appearance_order() {
    let filters = category_filters(INVENTORY);
    assert_eq!(
        filters,
        vec![
            CategoryFilter::All,
            CategoryFilter::Only(Category::Sedan),
            CategoryFilter::Only(Category::Muscle),
            CategoryFilter::Only(Category::Hatchback),
            CategoryFilter::Only(Category::Suv),
        ]
    );
}

#[test]
fn category_filters_of_empty_catalog_is_just_all() {
    assert_eq!(category_filters(&[]), vec![CategoryFilter::All]);
}

#[test]
fn category_labels() {
    assert_eq!(CategoryFilter::All.label(), "All");
    assert_eq!(CategoryFilter::Only(Category::Suv).label(), "SUV");
    assert_eq!(Category::Muscle.label(), "Muscle");
}

#[test]
fn default_filter_is_all() {
    assert_eq!(CategoryFilter::default(), CategoryFilter::All);
}

// =============================================================
// find_car / specs
// =============================================================

#[test]
fn find_car_by_id() {
    assert_eq!(find_car(INVENTORY, "3").map(|c| c.name), Some("Contessa Classic"));
    assert!(find_car(INVENTORY, "missing").is_none());
}

#[test]
fn spec_rows_are_labelled_in_display_order() {
    let rows = INVENTORY[0].specs.rows();
    assert_eq!(rows[0], ("Mileage", "12 kmpl"));
    assert_eq!(rows[1], ("Engine", "1817 cc Isuzu"));
    assert_eq!(rows[2], ("Top Speed", "120 kmph"));
}
