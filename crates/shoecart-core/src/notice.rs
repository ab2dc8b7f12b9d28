//! # User Notices
//!
//! The only feedback a failed cart operation produces is one of four toast
//! messages. The texts are the storefront's Portuguese strings, kept verbatim.
//!
//! ```text
//! ┌──────────────────────┬──────────────────────────────────────────────────┐
//! │ Notice               │ Message                                          │
//! ├──────────────────────┼──────────────────────────────────────────────────┤
//! │ OutOfStock           │ Quantidade solicitada fora de estoque            │
//! │ AddFailed            │ Erro na adição do produto                        │
//! │ RemoveFailed         │ Erro na remoção do produto                       │
//! │ UpdateFailed         │ Erro na alteração de quantidade do produto       │
//! └──────────────────────┴──────────────────────────────────────────────────┘
//! ```

use crate::error::CartError;

/// The cart operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    UpdateAmount,
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::Remove => write!(f, "remove"),
            CartOperation::UpdateAmount => write!(f, "update_amount"),
        }
    }
}

/// A message shown to the user when a cart operation does not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    OutOfStock,
    AddFailed,
    RemoveFailed,
    UpdateFailed,
}

impl Notice {
    /// Picks the notice for a failed operation.
    ///
    /// The stock ceiling gets its own message; every other cause collapses
    /// into the operation's generic failure.
    pub fn for_failure(op: CartOperation, err: &CartError) -> Self {
        if err.is_out_of_stock() {
            return Notice::OutOfStock;
        }

        match op {
            CartOperation::Add => Notice::AddFailed,
            CartOperation::Remove => Notice::RemoveFailed,
            CartOperation::UpdateAmount => Notice::UpdateFailed,
        }
    }

    /// Text shown to the user.
    pub const fn message(&self) -> &'static str {
        match self {
            Notice::OutOfStock => "Quantidade solicitada fora de estoque",
            Notice::AddFailed => "Erro na adição do produto",
            Notice::RemoveFailed => "Erro na remoção do produto",
            Notice::UpdateFailed => "Erro na alteração de quantidade do produto",
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out_of_stock() -> CartError {
        CartError::OutOfStock {
            product_id: 1,
            requested: 2,
            available: 1,
        }
    }

    #[test]
    fn test_out_of_stock_wins_for_every_operation() {
        for op in [
            CartOperation::Add,
            CartOperation::Remove,
            CartOperation::UpdateAmount,
        ] {
            assert_eq!(Notice::for_failure(op, &out_of_stock()), Notice::OutOfStock);
        }
    }

    #[test]
    fn test_faults_map_to_operation_failure() {
        let lookup = CartError::Lookup("connection refused".to_string());
        assert_eq!(
            Notice::for_failure(CartOperation::Add, &lookup),
            Notice::AddFailed
        );
        assert_eq!(
            Notice::for_failure(CartOperation::Remove, &CartError::NotInCart(4)),
            Notice::RemoveFailed
        );
        assert_eq!(
            Notice::for_failure(CartOperation::UpdateAmount, &CartError::NotInCart(4)),
            Notice::UpdateFailed
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Notice::OutOfStock.to_string(),
            "Quantidade solicitada fora de estoque"
        );
        assert_eq!(Notice::AddFailed.message(), "Erro na adição do produto");
        assert_eq!(Notice::RemoveFailed.message(), "Erro na remoção do produto");
        assert_eq!(
            Notice::UpdateFailed.message(),
            "Erro na alteração de quantidade do produto"
        );
    }
}
