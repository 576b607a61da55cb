//! Inventory model and showroom filtering.
//!
//! DESIGN
//! ======
//! Catalog records are bundled static data, so every field borrows from
//! `'static` storage and `Car` stays cheap to clone into cart lines.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// Body-style tag used by the showroom filter chips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Sedan,
    Hatchback,
    Suv,
    Muscle,
}

impl Category {
    /// Display label, also used as the chip text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Hatchback => "Hatchback",
            Self::Suv => "SUV",
            Self::Muscle => "Muscle",
        }
    }
}

/// Fixed spec sheet shown on cards and in the detail overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarSpecs {
    pub mileage: &'static str,
    pub engine: &'static str,
    pub top_speed: &'static str,
}

impl CarSpecs {
    /// Labelled rows in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &'static str); 3] {
        [("Mileage", self.mileage), ("Engine", self.engine), ("Top Speed", self.top_speed)]
    }
}

/// A single vehicle listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Car {
    pub id: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    /// Whole rupees.
    pub price: u64,
    pub category: Category,
    pub year: u16,
    pub image: &'static str,
    pub description: &'static str,
    pub specs: CarSpecs,
}

/// Active showroom filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, car: &Car) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => car.category == category,
        }
    }
}

/// Cars passing `filter`, in catalog order.
#[must_use]
pub fn filter_cars(cars: &[Car], filter: CategoryFilter) -> Vec<Car> {
    cars.iter().filter(|car| filter.matches(car)).copied().collect()
}

/// Filter chips: `All` followed by each distinct category in first-appearance order.
#[must_use]
pub fn category_filters(cars: &[Car]) -> Vec<CategoryFilter> {
    let mut filters = vec![CategoryFilter::All];
    for car in cars {
        let chip = CategoryFilter::Only(car.category);
        if !filters.contains(&chip) {
            filters.push(chip);
        }
    }
    filters
}

/// Look up a listing by id.
#[must_use]
pub fn find_car(cars: &[Car], id: &str) -> Option<Car> {
    cars.iter().find(|car| car.id == id).copied()
}
