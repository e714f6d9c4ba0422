#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub id: u32,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        icon: "✈️",
        title: "Flight Booking",
        description: "Domestic and international tickets at the best available fares.",
        features: &["Best fare search", "Group bookings", "Date change support"],
    },
    Service {
        id: 2,
        icon: "🏨",
        title: "Hotel Reservations",
        description: "Handpicked stays from boutique homestays to luxury resorts.",
        features: &["Verified properties", "Early check-in requests", "Special occasion setups"],
    },
    Service {
        id: 3,
        icon: "🗺️",
        title: "Tour Packages",
        description: "Complete itineraries with transfers, sightseeing and guides.",
        features: &["Customizable routes", "Local guides", "All-inclusive options"],
    },
    Service {
        id: 4,
        icon: "🛂",
        title: "Visa Assistance",
        description: "Paperwork, appointments and follow-ups handled for you.",
        features: &["Document checklist", "Appointment booking", "Application tracking"],
    },
    Service {
        id: 5,
        icon: "🚗",
        title: "Car Rentals",
        description: "Chauffeur-driven cars and self-drive options wherever you go.",
        features: &["Airport pickups", "Outstation trips", "Experienced drivers"],
    },
    Service {
        id: 6,
        icon: "🛡️",
        title: "Travel Insurance",
        description: "Cover for medical emergencies, delays and lost baggage.",
        features: &["Medical cover", "Trip cancellation", "Baggage protection"],
    },
    Service {
        id: 7,
        icon: "💍",
        title: "Honeymoon Planning",
        description: "Romantic getaways with thoughtful little surprises along the way.",
        features: &["Couple-friendly stays", "Candlelight dinners", "Private tours"],
    },
    Service {
        id: 8,
        icon: "🏢",
        title: "Corporate Travel",
        description: "Offsites, conferences and business trips without the hassle.",
        features: &["Bulk bookings", "Invoicing support", "Dedicated coordinator"],
    },
];

/// A step of the "How We Work" section.
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { step: "01", title: "Consultation", description: "We start with understanding your travel dreams, preferences, budget, and requirements.", icon: "💬" },
    ProcessStep { step: "02", title: "Planning", description: "Our experts craft a personalized itinerary with accommodations, activities, and logistics.", icon: "📋" },
    ProcessStep { step: "03", title: "Booking", description: "We handle all bookings and reservations, ensuring everything is confirmed and ready.", icon: "✅" },
    ProcessStep { step: "04", title: "Support", description: "24/7 assistance during your trip to ensure everything goes smoothly and you have support.", icon: "🛡️" },
];

/// Icon, title and body of a small feature card.
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BENEFITS: &[Highlight] = &[
    Highlight { icon: "💰", title: "No Hidden Costs", description: "Transparent pricing with detailed breakdowns. What you see is what you pay." },
    Highlight { icon: "🤝", title: "Personal Touch", description: "Every interaction is human-to-human. No bots, no automated responses." },
    Highlight { icon: "🗺️", title: "Local Expertise", description: "Our network of local guides and partners ensures authentic experiences." },
    Highlight { icon: "🔄", title: "Flexible Cancellation", description: "Life happens. We offer flexible cancellation policies for peace of mind." },
    Highlight { icon: "🚨", title: "24/7 Emergency Support", description: "Round-the-clock assistance for any emergency or urgent requirements." },
    Highlight { icon: "⚙️", title: "Customization", description: "Every trip is unique. We customize everything based on your preferences." },
];

pub const HERO_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "✈️", title: "Personal Touch", description: "Every service handled personally with care and attention" },
    Highlight { icon: "🌍", title: "Global Destinations", description: "Domestic and international travel experiences" },
    Highlight { icon: "🎯", title: "Customized Tours", description: "Tailored itineraries to match your preferences" },
];

pub const TRAVEL_MOMENTS: &[Highlight] = &[
    Highlight { icon: "📱", title: "Share Your Journey", description: "Tag us in your travel photos on social media and become part of our travel community." },
    Highlight { icon: "📷", title: "Professional Photography", description: "We can arrange professional photographers to capture your special moments during the trip." },
    Highlight { icon: "📖", title: "Travel Albums", description: "Get personalized photo albums delivered to your home as a keepsake of your amazing journey." },
];

pub struct Testimonial {
    pub name: &'static str,
    pub trip: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { name: "Anjali M.", trip: "Kerala Backwaters", quote: "Every detail was taken care of. The houseboat stay was the highlight of our year.", rating: 5 },
    Testimonial { name: "Rahul & Priya", trip: "Maldives Honeymoon", quote: "They planned surprises we didn't even know to ask for. Truly personal service.", rating: 5 },
    Testimonial { name: "Thomas K.", trip: "Swiss Alps", quote: "Smooth visas, great hotels and a 2 AM phone call answered within minutes.", rating: 4 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn service_ids_are_unique() {
        let ids: HashSet<u32> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
        assert!(SERVICES.iter().all(|s| !s.features.is_empty()));
    }

    #[test]
    fn ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
