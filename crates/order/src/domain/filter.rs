//! Translation of the `GET /orders` query into a store predicate.
//!
//! `status` is an exact match and `customerName` a case-insensitive substring
//! match. An absent parameter imposes no constraint; an empty `customerName`
//! is still a constraint, it just matches every name.

use crate::{domain::requests::order::FindAllOrders, model::Order as OrderModel};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: Option<String>,
    pub customer_name: Option<String>,
}

impl From<&FindAllOrders> for OrderFilter {
    fn from(req: &FindAllOrders) -> Self {
        Self {
            status: req.status.clone(),
            customer_name: req.customer_name.clone(),
        }
    }
}

impl OrderFilter {
    /// `ILIKE` pattern for the name filter, with LIKE metacharacters escaped so
    /// the user text is matched literally.
    pub fn customer_name_pattern(&self) -> Option<String> {
        self.customer_name
            .as_deref()
            .map(|name| format!("%{}%", escape_like(name)))
    }

    /// Same predicate as the SQL translation, evaluated in process.
    pub fn matches(&self, order: &OrderModel) -> bool {
        let status_ok = self
            .status
            .as_deref()
            .is_none_or(|status| order.status == status);

        let name_ok = self.customer_name.as_deref().is_none_or(|needle| {
            order
                .customer_name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });

        status_ok && name_ok
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
