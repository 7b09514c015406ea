//! Business category suggestions for the search prompt.

pub(crate) const CATEGORIES: &[&str] = &[
    "Accountant",
    "Auto Repair Shop",
    "Bakery",
    "Bar",
    "Barber Shop",
    "Beauty Salon",
    "Bicycle Store",
    "Bookstore",
    "Cafe",
    "Car Dealer",
    "Car Wash",
    "Carpenter",
    "Catering Service",
    "Chiropractor",
    "Cleaning Service",
    "Clothing Store",
    "Coffee Shop",
    "Construction Company",
    "Daycare",
    "Dentist",
    "Dry Cleaner",
    "Electrician",
    "Event Planner",
    "Florist",
    "Furniture Store",
    "Gym",
    "Hair Salon",
    "Hardware Store",
    "Home Builder",
    "Hotel",
    "HVAC Contractor",
    "Insurance Agency",
    "Interior Designer",
    "Jewelry Store",
    "Landscaper",
    "Law Firm",
    "Locksmith",
    "Massage Therapist",
    "Moving Company",
    "Nail Salon",
    "Optometrist",
    "Painter",
    "Pest Control",
    "Pet Groomer",
    "Pet Store",
    "Pharmacy",
    "Photographer",
    "Physical Therapist",
    "Pizza Restaurant",
    "Plumber",
    "Real Estate Agency",
    "Restaurant",
    "Roofing Contractor",
    "Spa",
    "Tattoo Shop",
    "Tutoring Service",
    "Veterinarian",
    "Wedding Venue",
    "Yoga Studio",
];

/// Categories containing `input`, case-insensitively, in list order. Blank
/// input matches nothing.
pub(crate) fn matching_categories(input: &str) -> Vec<&'static str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    CATEGORIES
        .iter()
        .copied()
        .filter(|c| c.to_lowercase().contains(&needle))
        .collect()
}

/// Print the categories matching `query`, one per line.
pub(crate) fn run_categories(query: &str) {
    let matches = matching_categories(query);
    if matches.is_empty() {
        println!("no matching categories");
    }
    for category in matches {
        println!("{category}");
    }
}
