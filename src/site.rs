// Shop details and page copy. Edit here, not in the components.

pub const SHOP_NAME: &str = "Krishna Auto Repairs";
pub const PHONE: &str = "(555) 123-4567";
pub const ADDRESS: &str = "123 Bike Street, Cycling City, CC 12345";
pub const COPYRIGHT_YEAR: u16 = 2024;

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1485965120184-e220f721d03e?auto=format&fit=crop&q=80";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1599058917765-a780eda07a3e?auto=format&fit=crop&q=80";

#[derive(Debug, Clone, PartialEq)]
pub struct Offering {
    pub icon: &'static str, // Font Awesome class
    pub title: &'static str,
    pub blurb: &'static str,
    pub price: &'static str,
}

pub const SERVICES: &[Offering] = &[
    Offering {
        icon: "fa-solid fa-droplet",
        title: "Bike Wash",
        blurb: "Professional cleaning service to keep your bike spotless and maintain its components.",
        price: "From $29",
    },
    Offering {
        icon: "fa-solid fa-wrench",
        title: "General Checkup",
        blurb: "Comprehensive inspection of all components to ensure optimal performance.",
        price: "From $49",
    },
    Offering {
        icon: "fa-solid fa-gear",
        title: "Engine Repairing",
        blurb: "Expert engine maintenance and repair services for motorized bikes.",
        price: "From $99",
    },
    Offering {
        icon: "fa-solid fa-paintbrush",
        title: "Coloring",
        blurb: "Professional paint jobs to give your bike a fresh new look.",
        price: "From $199",
    },
    Offering {
        icon: "fa-solid fa-star",
        title: "Fibering",
        blurb: "Custom fiber work and repairs for enhanced durability and aesthetics.",
        price: "From $149",
    },
    Offering {
        icon: "fa-solid fa-clock",
        title: "Spare Parts",
        blurb: "Quality replacement parts and accessories for all bike models.",
        price: "Varies by Part",
    },
];

pub const ABOUT_BLURB: &str = "With over 15 years of experience, our certified mechanics provide the highest quality service for all types of bikes. We're passionate about cycling and committed to keeping your bike in perfect condition.";

/// (icon, label)
pub const HIGHLIGHTS: &[(&str, &str)] = &[
    ("fa-solid fa-star", "Certified Mechanics"),
    ("fa-solid fa-clock", "Quick Turnaround"),
    ("fa-solid fa-wrench", "Quality Parts"),
];

/// (icon, label) — links are placeholders until the shop has profiles.
pub const SOCIALS: &[(&str, &str)] = &[
    ("fa-brands fa-instagram", "Instagram"),
    ("fa-brands fa-facebook", "Facebook"),
    ("fa-brands fa-twitter", "Twitter"),
];

/// In-page anchors for the top nav: (href, label).
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#about", "About"),
    ("#contact", "Contact"),
];
