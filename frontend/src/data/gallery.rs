use crate::catalog::{Categorized, Category};
use Category::*;

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub id: u32,
    pub category: Category,
    pub destination: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub src: &'static str,
}

impl Categorized for GalleryImage {
    fn category(&self) -> Category {
        self.category
    }
}

const fn image(
    id: u32,
    category: Category,
    destination: &'static str,
    title: &'static str,
    description: &'static str,
    src: &'static str,
) -> GalleryImage {
    GalleryImage { id, category, destination, title, description, src }
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    image(1, Food, "Europe", "Wine Tasting", "Exquisite wines from renowned vineyards", "/images/gallery/image.png"),
    image(2, Domestic, "Goa", "Pristine Beaches of Goa", "Crystal clear waters and golden sand beaches", "/images/gallery/image copy.png"),
    image(3, Domestic, "Kerala", "Backwaters of Kerala", "Serene houseboat journeys through lush greenery", "/images/gallery/image copy 2.png"),
    image(4, Domestic, "Manali", "Snow-capped Mountains", "Breathtaking views of the Himalayas", "/images/gallery/image copy 3.png"),
    image(5, Domestic, "Rajasthan", "Royal Palaces", "Magnificent architecture and rich heritage", "/images/gallery/image copy 4.png"),
    image(6, Domestic, "Goa", "Sunset at Anjuna Beach", "Spectacular evening views by the Arabian Sea", "/images/gallery/image copy 5.png"),
    image(7, Domestic, "Kerala", "Tea Plantations", "Rolling hills covered in emerald tea gardens", "/images/gallery/image copy 6.png"),
    image(8, International, "Dubai", "Burj Khalifa at Night", "Iconic skyline illuminated against the desert sky", "/images/gallery/image copy 7.png"),
    image(9, International, "Thailand", "Phi Phi Islands", "Tropical paradise with turquoise waters", "/images/gallery/image copy 8.png"),
    image(10, International, "Singapore", "Gardens by the Bay", "Futuristic architecture meets nature", "/images/gallery/image copy 9.png"),
    image(11, International, "Maldives", "Overwater Villas", "Luxury accommodation above crystal-clear lagoons", "/images/gallery/image copy 10.png"),
    image(12, International, "Europe", "Eiffel Tower, Paris", "The iron lady standing tall in the City of Light", "/images/gallery/image copy 11.png"),
    image(13, International, "Europe", "Swiss Alps", "Majestic mountains and pristine alpine lakes", "/images/gallery/image copy 12.png"),
    image(14, Adventure, "Manali", "River Rafting", "Thrilling white water adventures in the mountains", "/images/gallery/image copy 13.png"),
    image(15, Adventure, "Dubai", "Desert Safari", "Exciting dune bashing and camel rides", "/images/gallery/image copy 14.png"),
    image(16, Adventure, "Thailand", "Island Hopping", "Exploring hidden gems across tropical islands", "/images/gallery/image copy 15.png"),
    image(17, Adventure, "Nepal", "Himalayan Trekking", "Epic journeys to the roof of the world", "/images/gallery/image copy 16.png"),
    image(18, Culture, "Rajasthan", "Traditional Dance", "Vibrant folk performances under starlit skies", "/images/gallery/image copy 17.png"),
    image(19, Culture, "Kerala", "Kathakali Performance", "Classical dance forms telling ancient stories", "/images/gallery/image copy 18.png"),
    image(20, Culture, "Japan", "Temple Gardens", "Peaceful zen gardens and ancient temples", "/images/gallery/image copy 19.png"),
    image(21, Food, "Kerala", "Traditional Cuisine", "Delicious South Indian delicacies", "/images/gallery/image copy 20.png"),
    image(22, Food, "Europe", "Wine Tasting - Vineyards", "Exquisite wines from renowned vineyards", "/images/gallery/image copy 21.png"),
    image(23, Food, "Dubai", "Fine Dining", "World-class restaurants with stunning views", "/images/gallery/image copy 22.png"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{category_info, filter_by_category, ALL_KEY};
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_categories_known() {
        let ids: HashSet<u32> = GALLERY_IMAGES.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), GALLERY_IMAGES.len());
        assert!(GALLERY_IMAGES.iter().all(|i| category_info(i.category.key()).is_some()));
    }

    #[test]
    fn every_image_lands_in_exactly_one_filter() {
        let total: usize = Category::ALL
            .iter()
            .map(|c| filter_by_category(GALLERY_IMAGES, c.key()).len())
            .sum();
        assert_eq!(total, GALLERY_IMAGES.len());
        assert_eq!(filter_by_category(GALLERY_IMAGES, ALL_KEY).len(), 23);
        assert_eq!(filter_by_category(GALLERY_IMAGES, "domestic").len(), 6);
    }
}
