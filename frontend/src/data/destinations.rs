use crate::catalog::{Categorized, Category};

#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub price_range: &'static str,
    pub category: Category,
}

impl Categorized for Destination {
    fn category(&self) -> Category {
        self.category
    }
}

pub const DESTINATIONS: &[Destination] = &[
    Destination {
        id: 1,
        name: "Kerala Backwaters",
        location: "Alleppey, Kerala",
        description: "Drift through palm-fringed canals on a traditional houseboat.",
        image: "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹18,000 - ₹45,000",
        category: Category::Domestic,
    },
    Destination {
        id: 2,
        name: "Goa Beaches",
        location: "North & South Goa",
        description: "Sun-soaked beaches, seafood shacks and laid-back evenings.",
        image: "https://images.unsplash.com/photo-1512343879784-a960bf40e7f2?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹15,000 - ₹40,000",
        category: Category::Domestic,
    },
    Destination {
        id: 3,
        name: "Dubai",
        location: "United Arab Emirates",
        description: "Skyscrapers, desert safaris and world-class shopping.",
        image: "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹55,000 - ₹1,20,000",
        category: Category::International,
    },
    Destination {
        id: 4,
        name: "Maldives",
        location: "Indian Ocean",
        description: "Overwater villas above turquoise lagoons.",
        image: "https://images.unsplash.com/photo-1514282401047-d79a71a590e8?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹90,000 - ₹2,50,000",
        category: Category::International,
    },
    Destination {
        id: 5,
        name: "Manali",
        location: "Himachal Pradesh",
        description: "Snow peaks, river rafting and cosy mountain cafes.",
        image: "https://images.unsplash.com/photo-1626621341517-bbf3d9990a23?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹20,000 - ₹50,000",
        category: Category::Adventure,
    },
    Destination {
        id: 6,
        name: "Rajasthan Heritage",
        location: "Jaipur, Udaipur & Jodhpur",
        description: "Palaces, forts and folk music under desert skies.",
        image: "https://images.unsplash.com/photo-1477587458883-47145ed94245?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹25,000 - ₹70,000",
        category: Category::Culture,
    },
    Destination {
        id: 7,
        name: "Thailand",
        location: "Bangkok, Phuket & Krabi",
        description: "Island hopping, street food and golden temples.",
        image: "https://images.unsplash.com/photo-1552465011-b4e21bf6e79a?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹45,000 - ₹95,000",
        category: Category::International,
    },
    Destination {
        id: 8,
        name: "Swiss Alps",
        location: "Switzerland",
        description: "Scenic trains, alpine lakes and chocolate-box villages.",
        image: "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹1,50,000 - ₹3,00,000",
        category: Category::International,
    },
    Destination {
        id: 9,
        name: "Nepal Treks",
        location: "Pokhara & Everest Region",
        description: "Guided treks to the roof of the world.",
        image: "https://images.unsplash.com/photo-1544735716-392fe2489ffa?auto=format&fit=crop&w=1200&q=80",
        price_range: "₹35,000 - ₹90,000",
        category: Category::Adventure,
    },
];

/// Badge shown on the home page cards, cycling by position.
pub fn badge_for(index: usize) -> &'static str {
    match index % 3 {
        0 => "Trending",
        1 => "Top Rated",
        _ => "New",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = DESTINATIONS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), DESTINATIONS.len());
    }

    #[test]
    fn badges_cycle() {
        let badges: Vec<&str> = (0..4).map(badge_for).collect();
        assert_eq!(badges, vec!["Trending", "Top Rated", "New", "Trending"]);
    }
}
