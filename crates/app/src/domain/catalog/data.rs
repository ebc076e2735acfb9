//! Seed catalog data.

use rust_decimal::Decimal;

use smartbasket::catalog::Item;

fn item(
    id: &str,
    name: &str,
    category: &str,
    brand: &str,
    unit: &str,
    base_price: Decimal,
    image: &str,
    description: &str,
) -> Item {
    Item {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        brand: brand.into(),
        unit: unit.into(),
        base_price,
        image: image.into(),
        description: description.into(),
    }
}

/// The static grocery catalog the stores are seeded with.
#[must_use]
pub fn seed_items() -> Vec<Item> {
    vec![
        item(
            "1",
            "Basmati Rice",
            "Grains & Rice",
            "India Gate",
            "1kg",
            Decimal::new(8999, 2),
            "https://images.pexels.com/photos/33783/rice-thai-jasmine-rice-rice-grain.jpg?auto=compress&cs=tinysrgb&w=300",
            "Premium quality basmati rice with long grains",
        ),
        item(
            "2",
            "Organic Bananas",
            "Fruits & Vegetables",
            "Fresh Farm",
            "1 dozen",
            Decimal::new(4500, 2),
            "https://images.pexels.com/photos/2872755/pexels-photo-2872755.jpeg?auto=compress&cs=tinysrgb&w=300",
            "Fresh organic bananas, naturally ripened",
        ),
        item(
            "3",
            "Whole Wheat Bread",
            "Bakery",
            "Britannia",
            "400g",
            Decimal::new(3250, 2),
            "https://images.pexels.com/photos/209206/pexels-photo-209206.jpeg?auto=compress&cs=tinysrgb&w=300",
            "100% whole wheat bread, soft and nutritious",
        ),
        item(
            "4",
            "Fresh Milk",
            "Dairy",
            "Amul",
            "1L",
            Decimal::new(2800, 2),
            "https://images.pexels.com/photos/248412/pexels-photo-248412.jpeg?auto=compress&cs=tinysrgb&w=300",
            "Fresh full cream milk, rich in calcium",
        ),
        item(
            "5",
            "Extra Virgin Olive Oil",
            "Cooking Essentials",
            "Figaro",
            "500ml",
            Decimal::new(18500, 2),
            "https://images.pexels.com/photos/33783/olive-oil-salad-dressing-cooking-olive.jpg?auto=compress&cs=tinysrgb&w=300",
            "Cold-pressed extra virgin olive oil",
        ),
        item(
            "6",
            "Red Apples",
            "Fruits & Vegetables",
            "Kashmir Fresh",
            "1kg",
            Decimal::new(9500, 2),
            "https://images.pexels.com/photos/102104/pexels-photo-102104.jpeg?auto=compress&cs=tinysrgb&w=300",
            "Fresh red apples from Kashmir, crisp and sweet",
        ),
        item(
            "7",
            "Greek Yogurt",
            "Dairy",
            "Epigamia",
            "200g",
            Decimal::new(5500, 2),
            "https://images.pexels.com/photos/1346999/pexels-photo-1346999.jpeg?auto=compress&cs=tinysrgb&w=300",
            "Thick and creamy Greek yogurt, high in protein",
        ),
        item(
            "8",
            "Green Tea Bags",
            "Beverages",
            "Twinings",
            "25 bags",
            Decimal::new(12500, 2),
            "https://images.pexels.com/photos/1417945/pexels-photo-1417945.jpeg?auto=compress&cs=tinysrgb&w=300",
            "Premium green tea bags for a healthy lifestyle",
        ),
    ]
}
