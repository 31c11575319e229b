// 🗄️ Receipt Store - In-memory, process-lifetime receipt registry
// Records are insert-only: no update, no delete

use crate::error::{ReceiptError, Result};
use crate::models::Receipt;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the receipt map. Cloning shares the same storage.
#[derive(Debug, Clone, Default)]
pub struct ReceiptStore {
    receipts: Arc<RwLock<HashMap<String, Receipt>>>,
}

impl ReceiptStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh UUID v4 to the receipt, store it, and return the id
    pub fn put(&self, mut receipt: Receipt) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        receipt.id = id.clone();

        let mut receipts = self.receipts.write().unwrap_or_else(PoisonError::into_inner);
        receipts.insert(id.clone(), receipt);
        id
    }

    /// Look up a receipt by id
    pub fn get(&self, id: &str) -> Result<Receipt> {
        let receipts = self.receipts.read().unwrap_or_else(PoisonError::into_inner);
        receipts
            .get(id)
            .cloned()
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }

    /// Number of stored receipts
    pub fn len(&self) -> usize {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
