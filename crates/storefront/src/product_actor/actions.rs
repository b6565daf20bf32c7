//! Custom actions for the Product actor.

/// Product operations beyond CRUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductAction {
    /// Whether the product can be ordered.
    CheckStock,
    SetInStock(bool),
    SetFeatured(bool),
}

/// One variant per [`ProductAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    CheckStock(bool),
    SetInStock(()),
    SetFeatured(()),
}
