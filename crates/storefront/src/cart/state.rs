use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One product in the cart. `quantity` is never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// The shopper's cart.
///
/// Every transition consumes the current state and returns the next one.
/// `total` and `item_count` are rebuilt from `items` after each transition,
/// so they can never drift from the lines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CartSnapshot", into = "CartSnapshot")]
pub struct CartState {
    items: Vec<CartLine>,
    total: f64,
    item_count: u32,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|line| line.product.id == product_id)
            .map_or(0, |line| line.quantity)
    }

    /// Adds one unit. An existing line keeps its position.
    pub fn add_item(mut self, product: &Product) -> Self {
        match self.items.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
        self.recompute()
    }

    pub fn remove_item(mut self, product_id: ProductId) -> Self {
        self.items.retain(|line| line.product.id != product_id);
        self.recompute()
    }

    /// Sets an absolute quantity on an existing line.
    ///
    /// Zero or negative removes the line. Ids that are not in the cart are
    /// ignored, and values above `u32::MAX` saturate.
    pub fn set_quantity(mut self, product_id: ProductId, quantity: i64) -> Self {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.items.iter_mut().find(|line| line.product.id == product_id) {
            line.quantity = quantity;
        }
        self.recompute()
    }

    pub fn clear(self) -> Self {
        Self::default()
    }

    /// Serializes the lines for a session store.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restores a cart saved with [`CartState::to_json`].
    ///
    /// Duplicate products are merged into the first line, zero-quantity lines
    /// are dropped and totals are recomputed from what remains.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn recompute(mut self) -> Self {
        self.total = self.items.iter().map(CartLine::line_total).sum();
        self.item_count = self
            .items
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity));
        self
    }
}

/// Wire form of a cart: lines only.
#[derive(Serialize, Deserialize)]
struct CartSnapshot {
    items: Vec<CartLine>,
}

impl From<CartSnapshot> for CartState {
    fn from(snapshot: CartSnapshot) -> Self {
        let mut items: Vec<CartLine> = Vec::with_capacity(snapshot.items.len());
        for line in snapshot.items.into_iter().filter(|line| line.quantity > 0) {
            match items.iter_mut().find(|kept| kept.product.id == line.product.id) {
                Some(kept) => kept.quantity = kept.quantity.saturating_add(line.quantity),
                None => items.push(line),
            }
        }
        Self {
            items,
            ..Self::default()
        }
        .recompute()
    }
}

impl From<CartState> for CartSnapshot {
    fn from(state: CartState) -> Self {
        Self { items: state.items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: f64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            description: "test product".to_string(),
            price,
            original_price: None,
            image: crate::model::PLACEHOLDER_IMAGE.to_string(),
            category: "electronics".to_string(),
            in_stock: true,
            rating: 4.0,
            reviews: 0,
            featured: false,
        }
    }

    fn assert_totals_consistent(cart: &CartState) {
        let expected_total: f64 = cart
            .items()
            .iter()
            .map(|l| l.product.price * f64::from(l.quantity))
            .sum();
        let expected_count: u32 = cart.items().iter().map(|l| l.quantity).sum();
        assert!((cart.total() - expected_total).abs() < 1e-9);
        assert_eq!(cart.item_count(), expected_count);
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_repeated_add_aggregates_into_one_line() {
        let p = product(1, 19.99);
        let mut cart = CartState::new();
        for _ in 0..5 {
            cart = cart.add_item(&p);
        }
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.quantity_of(ProductId(1)), 5);
        assert!((cart.total() - 99.95).abs() < 1e-9);
    }

    #[test]
    fn test_add_appends_new_lines_without_reordering() {
        let (a, b, c) = (product(1, 10.0), product(2, 20.0), product(3, 30.0));
        let cart = CartState::new()
            .add_item(&a)
            .add_item(&b)
            .add_item(&c)
            .add_item(&a);

        let ids: Vec<_> = cart.items().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(2), ProductId(3)]);
        assert_eq!(cart.quantity_of(ProductId(1)), 2);
    }

    #[test]
    fn test_totals_hold_across_interleaved_mutations() {
        let (a, b, c) = (product(1, 299.99), product(2, 89.99), product(3, 12.5));
        let mut cart = CartState::new();

        cart = cart.add_item(&a);
        assert_totals_consistent(&cart);
        cart = cart.add_item(&b).add_item(&b);
        assert_totals_consistent(&cart);
        cart = cart.set_quantity(ProductId(1), 4);
        assert_totals_consistent(&cart);
        cart = cart.add_item(&c);
        assert_totals_consistent(&cart);
        cart = cart.remove_item(ProductId(2));
        assert_totals_consistent(&cart);
        cart = cart.set_quantity(ProductId(3), 0);
        assert_totals_consistent(&cart);

        assert_eq!(cart.item_count(), 4);
        assert!((cart.total() - 4.0 * 299.99).abs() < 1e-9);
    }

    #[test]
    fn test_remove_absent_id_is_identity() {
        let cart = CartState::new().add_item(&product(1, 10.0));
        let before = cart.clone();

        let after = cart.remove_item(ProductId(42));
        assert_eq!(after, before);
        assert_eq!(after.clone().remove_item(ProductId(42)), before);
    }

    #[test]
    fn test_set_quantity_non_positive_equals_remove() {
        let cart = CartState::new()
            .add_item(&product(1, 10.0))
            .add_item(&product(2, 25.0));
        let removed = cart.clone().remove_item(ProductId(1));

        assert_eq!(cart.clone().set_quantity(ProductId(1), 0), removed);
        assert_eq!(cart.set_quantity(ProductId(1), -5), removed);
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let cart = CartState::new()
            .add_item(&product(1, 10.0))
            .add_item(&product(1, 10.0))
            .set_quantity(ProductId(1), 7);

        assert_eq!(cart.item_count(), 7);
        assert!((cart.total() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_quantity_unknown_id_does_not_create_line() {
        let cart = CartState::new().add_item(&product(1, 10.0));
        let before = cart.clone();

        assert_eq!(cart.set_quantity(ProductId(9), 3), before);
    }

    #[test]
    fn test_set_quantity_saturates() {
        let cart = CartState::new()
            .add_item(&product(1, 1.0))
            .set_quantity(ProductId(1), i64::MAX);

        assert_eq!(cart.quantity_of(ProductId(1)), u32::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_clear_resets_everything() {
        let cart = CartState::new()
            .add_item(&product(1, 10.0))
            .add_item(&product(2, 20.0))
            .clear();

        assert!(cart.items().is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart, CartState::new());
    }

    #[test]
    fn test_add_twice_add_other_then_remove_first() {
        let (p1, p2) = (product(1, 50.0), product(2, 30.0));
        let cart = CartState::new()
            .add_item(&p1)
            .add_item(&p1)
            .add_item(&p2)
            .remove_item(p1.id);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product.id, p2.id);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.item_count(), 1);
        assert!((cart.total() - p2.price).abs() < 1e-9);
    }

    #[test]
    fn test_json_snapshot_contains_only_lines() {
        let cart = CartState::new().add_item(&product(1, 10.0));
        let json = cart.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("items").is_some());
        assert!(value.get("total").is_none());
        assert!(value.get("item_count").is_none());
        assert_eq!(CartState::from_json(&json).unwrap(), cart);
    }

    #[test]
    fn test_from_json_merges_duplicates_and_drops_empty_lines() {
        let (p1, p2, p3) = (product(1, 10.0), product(2, 5.0), product(3, 99.0));
        let snapshot = serde_json::json!({
            "items": [
                { "product": p1, "quantity": 2 },
                { "product": p2, "quantity": 1 },
                { "product": p3, "quantity": 0 },
                { "product": p1, "quantity": 3 }
            ]
        });

        let cart = CartState::from_json(&snapshot.to_string()).unwrap();

        let ids: Vec<_> = cart.items().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(2)]);
        assert_eq!(cart.quantity_of(ProductId(1)), 5);
        assert_eq!(cart.item_count(), 6);
        assert!((cart.total() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CartState::from_json("{\"items\": 3}").is_err());
    }
}
