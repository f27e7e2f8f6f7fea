/// Ordering direction for a single [`Order`] clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// One ordering clause: a property name and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub property: String,
    pub direction: Direction,
}

/// A caller-defined ordering carried through [`Pageable`](crate::Pageable).
///
/// restbase never interprets it; the page fetcher or the persistence backend
/// decides what the property names mean. `Sort::unsorted()` is the default
/// everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self { orders: Vec::new() }
    }

    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            orders: vec![Order {
                property: property.into(),
                direction: Direction::Asc,
            }],
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            orders: vec![Order {
                property: property.into(),
                direction: Direction::Desc,
            }],
        }
    }

    /// Append the clauses of `other` after the clauses of `self`.
    pub fn and(mut self, other: Sort) -> Self {
        self.orders.extend(other.orders);
        self
    }

    pub fn is_sorted(&self) -> bool {
        !self.orders.is_empty()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}
