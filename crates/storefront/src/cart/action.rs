use super::state::CartState;
use crate::model::{Product, ProductId};

/// A cart transition, for callers that dispatch rather than call methods.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem(Product),
    RemoveItem(ProductId),
    SetQuantity { product_id: ProductId, quantity: i64 },
    Clear,
}

impl CartState {
    pub fn reduce(self, action: CartAction) -> CartState {
        match action {
            CartAction::AddItem(product) => self.add_item(&product),
            CartAction::RemoveItem(product_id) => self.remove_item(product_id),
            CartAction::SetQuantity {
                product_id,
                quantity,
            } => self.set_quantity(product_id, quantity),
            CartAction::Clear => self.clear(),
        }
    }
}

pub fn reduce(state: CartState, action: CartAction) -> CartState {
    state.reduce(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_products;

    #[test]
    fn test_reduce_replays_a_session() {
        let products = seed_products();
        let headphones = products[0].clone();
        let watch = products[1].clone();

        let actions = vec![
            CartAction::AddItem(headphones.clone()),
            CartAction::AddItem(watch.clone()),
            CartAction::AddItem(headphones.clone()),
            CartAction::SetQuantity {
                product_id: watch.id,
                quantity: 3,
            },
            CartAction::RemoveItem(ProductId(999)),
        ];
        let cart = actions.into_iter().fold(CartState::new(), reduce);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 5);
        let expected = headphones.price * 2.0 + watch.price * 3.0;
        assert!((cart.total() - expected).abs() < 1e-9);

        let cart = cart.reduce(CartAction::Clear);
        assert_eq!(cart, CartState::new());
    }

    #[test]
    fn test_reduce_matches_method_calls() {
        let products = seed_products();
        let via_methods = CartState::new()
            .add_item(&products[2])
            .set_quantity(products[2].id, -1);
        let via_reduce = CartState::new()
            .reduce(CartAction::AddItem(products[2].clone()))
            .reduce(CartAction::SetQuantity {
                product_id: products[2].id,
                quantity: -1,
            });

        assert_eq!(via_methods, via_reduce);
        assert!(via_reduce.is_empty());
    }
}
