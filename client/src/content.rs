//! Bundled storefront content: inventory, hero slides, and marketing copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! All catalog and narrative data ships with the binary. The server reads
//! `INVENTORY` and `ASSISTANT_PERSONA` to build the assistant preamble, so the
//! model always quotes the same stock the showroom renders.

use crate::state::catalog::{Car, CarSpecs, Category};

/// One hero carousel slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSlide {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

impl HeroSlide {
    /// Split the title into the leading word and the highlighted remainder.
    #[must_use]
    pub fn title_parts(&self) -> (&'static str, &'static str) {
        match self.title.split_once(' ') {
            Some((head, rest)) => (head, rest),
            None => (self.title, ""),
        }
    }
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        id: 1,
        image: "https://images.unsplash.com/photo-1591465223049-307963d3b764?q=80&w=2070&auto=format&fit=crop",
        title: "Timeless Elegance",
        subtitle: "The Ambassador Grand",
        description: "Experience the definitive symbol of Indian luxury and power, restored to perfection.",
    },
    HeroSlide {
        id: 2,
        image: "https://images.unsplash.com/photo-1605515298946-d062f2e9da53?q=80&w=2070&auto=format&fit=crop",
        title: "Raw Power",
        subtitle: "The Contessa Classic",
        description: "Indian muscle meet modern restoration. A beast that roars on the open highway.",
    },
    HeroSlide {
        id: 3,
        image: "https://images.unsplash.com/photo-1580273916550-e323be2ebdd4?q=80&w=2070&auto=format&fit=crop",
        title: "Urban Legend",
        subtitle: "Premier Padmini",
        description: "The heartbeat of Mumbai. Agile, charming, and eternally stylish.",
    },
];

pub const INVENTORY: &[Car] = &[
    Car {
        id: "1",
        name: "Ambassador Grand",
        brand: "Hindustan Motors",
        price: 450_000,
        category: Category::Sedan,
        year: 1998,
        image: "https://images.unsplash.com/photo-1532974297617-c0f0350b8327?q=80&w=1200&auto=format&fit=crop",
        description: "The King of Indian Roads. Built like a tank, the Ambassador is a symbol of power and politics. The sofa-like rear seat offers unmatched comfort.",
        specs: CarSpecs { mileage: "12 kmpl", engine: "1817 cc Isuzu", top_speed: "120 kmph" },
    },
    Car {
        id: "2",
        name: "Premier Padmini S1",
        brand: "Premier",
        price: 225_000,
        category: Category::Sedan,
        year: 1991,
        image: "https://images.unsplash.com/photo-1489824904134-891ab64532f1?q=80&w=1200&auto=format&fit=crop",
        description: "The beloved Fiat 1100 delight. Agile, charming, and the heartbeat of Mumbai for decades. A true driver's car with its column shift gear.",
        specs: CarSpecs { mileage: "15 kmpl", engine: "1089 cc", top_speed: "115 kmph" },
    },
    Car {
        id: "3",
        name: "Contessa Classic",
        brand: "Hindustan Motors",
        price: 850_000,
        category: Category::Muscle,
        year: 2000,
        image: "https://images.unsplash.com/photo-1544602356-ac5861172a6a?q=80&w=1200&auto=format&fit=crop",
        description: "India's very own muscle car. Long hood, quad headlamps, and a road presence that turns heads even today. Pure nostalgia on wheels.",
        specs: CarSpecs { mileage: "10 kmpl", engine: "1.8L Isuzu", top_speed: "145 kmph" },
    },
    Car {
        id: "4",
        name: "Maruti 800 SS80",
        brand: "Maruti Suzuki",
        price: 150_000,
        category: Category::Hatchback,
        year: 1984,
        image: "https://images.unsplash.com/photo-1532581140115-3e355d1ed1de?q=80&w=1200&auto=format&fit=crop",
        description: "The car that put India on wheels. The first generation SS80 is a collector's item, known for its reliability and Japanese engineering.",
        specs: CarSpecs { mileage: "18 kmpl", engine: "796 cc F8B", top_speed: "110 kmph" },
    },
    Car {
        id: "5",
        name: "Tata Sierra Turbo",
        brand: "Tata Motors",
        price: 550_000,
        category: Category::Suv,
        year: 1997,
        image: "https://images.unsplash.com/photo-1551830602-d7c71d33194a?q=80&w=1200&auto=format&fit=crop",
        description: "A design ahead of its time. With its iconic alpine windows and 3-door layout, the Sierra was India's first true lifestyle SUV.",
        specs: CarSpecs { mileage: "10 kmpl", engine: "1.9L Turbo", top_speed: "130 kmph" },
    },
    Car {
        id: "6",
        name: "Mahindra Classic",
        brand: "Mahindra",
        price: 650_000,
        category: Category::Suv,
        year: 1995,
        image: "https://images.unsplash.com/photo-1533473359331-0135ef1b58bf?q=80&w=1200&auto=format&fit=crop",
        description: "Open top, wind in your hair, and go-anywhere capability. The Classic is the ultimate expression of rugged Indian off-roading.",
        specs: CarSpecs { mileage: "9 kmpl", engine: "2.1L Peugeot", top_speed: "100 kmph" },
    },
];

/// Persona half of the assistant preamble; the stock snapshot is appended server-side.
pub const ASSISTANT_PERSONA: &str = "You are \"Chacha\", the vintage car expert for 'Desi Classics'.
You speak with a warm, nostalgic Indian charm. You love old Indian cars like the Ambassador, Padmini, and Contessa.
Your goal is to help customers buy these classic gems.
Prices are in Indian Rupees (\u{20b9}).
Use terms like \"Solid Iron\", \"Makhan Malai ride\", \"Classic beauty\", \"Original parts\".
If asked about Ferraris or Teslas, gently mock them saying they can't handle Indian speedbreakers like our Ambassador can.";

/// First transcript entry shown before the visitor types anything.
pub const ASSISTANT_GREETING: &str =
    "Namaste! I'm Chacha. I know everything about these old Indian beauties. Ask me about mileage, maintenance, or history!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Heritage", href: "#heritage" },
    NavLink { name: "Collection", href: "#showroom" },
    NavLink { name: "Restoration", href: "#services" },
    NavLink { name: "Concierge", href: "#contact" },
];

pub const MARQUEE_BRANDS: &[&str] = &["Hindustan Motors", "Premier", "Maruti Udyog", "Mahindra"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Short glyph rendered in the icon badge.
    pub glyph: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        glyph: "\u{1f6e1}",
        title: "Certified Vintage",
        desc: "Every vehicle undergoes a rigorous 150-point mechanical and aesthetic inspection by veteran mechanics.",
    },
    Feature {
        glyph: "\u{1f69a}",
        title: "White Glove Delivery",
        desc: "From our garage to your driveway, enclosed transport ensures your classic arrives in showroom condition anywhere in India.",
    },
    Feature {
        glyph: "\u{1f527}",
        title: "Lifetime Support",
        desc: "Access to our exclusive spare parts network and priority booking for annual maintenance services.",
    },
    Feature {
        glyph: "\u{1f4c4}",
        title: "Paperwork Sorted",
        desc: "We handle the RTO transfer, fitness renewal, and green tax. You just turn the key and drive.",
    },
    Feature {
        glyph: "\u{1f310}",
        title: "Sourcing Network",
        desc: "Can't find your dream model? Our scouts across 12 states will track down specific chassis for you.",
    },
    Feature {
        glyph: "\u{23f1}",
        title: "6-Month Warranty",
        desc: "Unheard of in the vintage market, we stand by our restoration quality with a comprehensive powertrain warranty.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestorationStep {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const RESTORATION_STEPS: &[RestorationStep] = &[
    RestorationStep {
        title: "The Hunt",
        desc: "Scouting original chassis from remote villages and single owners.",
    },
    RestorationStep {
        title: "The Heart Transplant",
        desc: "Complete engine teardown and rebuild using authentic OEM components.",
    },
    RestorationStep {
        title: "The Royal Treatment",
        desc: "Stripping down to bare metal, premium paint, and hand-stitched leather.",
    },
    RestorationStep {
        title: "The Seal of Approval",
        desc: "100-point mechanical inspection and fitness certification before handover.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Review {
    pub name: &'static str,
    pub location: &'static str,
    pub car: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub image: &'static str,
}

pub const REVIEWS: &[Review] = &[
    Review {
        name: "Vikram Malhotra",
        location: "Mumbai",
        car: "Premier Padmini S1",
        text: "Buying a Padmini was a childhood dream. Desi Classics didn't just sell me a car; they sold me a time machine. The restoration detail is absolutely factory-spec.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?q=80&w=200&auto=format&fit=crop",
    },
    Review {
        name: "Aditi Rao",
        location: "Bangalore",
        car: "Contessa Classic",
        text: "I was skeptical about buying a vintage car online. But the video consultation and the 'Ignition' feature gave me chills. The car runs smoother than my modern sedan.",
        rating: 5,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=200&auto=format&fit=crop",
    },
    Review {
        name: "Col. Sher Singh (Retd)",
        location: "Chandigarh",
        car: "Ambassador Grand",
        text: "Solid iron. That's what I wanted. The team found me a pristine 1998 model. Driving it feels like commanding a tank again. Jai Hind!",
        rating: 5,
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=200&auto=format&fit=crop",
    },
];

/// Mean rating across `REVIEWS`, one decimal place.
#[must_use]
pub fn average_rating() -> String {
    if REVIEWS.is_empty() {
        return "0.0".to_owned();
    }
    let sum: u32 = REVIEWS.iter().map(|r| u32::from(r.rating)).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = f64::from(sum) / REVIEWS.len() as f64;
    format!("{mean:.1}")
}

pub const HERITAGE_IMAGE: &str =
    "https://images.unsplash.com/photo-1511919884226-fd3cad34687c?q=80&w=2070&auto=format&fit=crop";

pub const STORY_INLINE_IMAGE: &str =
    "https://images.unsplash.com/photo-1532581140115-3e355d1ed1de?q=80&w=1200&auto=format&fit=crop";

pub const STORY_PARAGRAPHS: &[&str] = &[
    "It began with a simple memory. The smell of petrol and old leather in my grandfather's Ambassador. The way the heavy door thudded shut, sealing us in a capsule of silence and strength. For decades, these cars were not just vehicles; they were members of the Indian family.",
    "But as the millennium turned, plastic replaced metal. Speed replaced character. The legends, the Ambassadors, the Padminis, the Contessas, were abandoned in rust and ruin, traded for fuel efficiency and air conditioning.",
];

pub const STORY_PULL_QUOTE: &str = "We realized we weren't just losing cars. We were losing our history.";

pub const STORY_CONTINUED: &[&str] = &[
    "Desi Classics was born out of a stubborn refusal to let that history die. We started in a small shed in Kolkata, hunting down chassis numbers that had been written off. We tracked down retired mechanics who knew how to tune a carburetor by ear. We scoured the markets of Chor Bazaar for original chrome detailing.",
    "Today, we are more than a dealership. We are custodians. Every car that leaves our garage is stripped to its bare metal bones and rebuilt. We add modern reliability (better cooling, disc brakes, rust protection) without sacrificing a single ounce of its vintage soul.",
    "When you drive a Desi Classic, you aren't just driving a car. You are driving a piece of India that refuses to be forgotten.",
];

pub const STORY_PROMISE: &str = "We don't sell restoration projects. We sell turnkey time machines. Whether it's the diplomat's Ambassador or the movie star's Contessa, we ensure that the legacy lives on, one engine fire at a time.";

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;
