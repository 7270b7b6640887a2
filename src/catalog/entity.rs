use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DRAFT: &str = "DRAFT";

const CART_STATES: &[&str] = &["DRAFT", "ACTIVE", "REFERRED_MED", "ARCHIVED"];

/// Declared in lifecycle order; the position is the status rank.
const ORDER_STATES: &[&str] = &[
    "DRAFT",
    "NEW",
    "ON_APPROVAL",
    "IN_PRODUCTION",
    "FITTING",
    "WAREHOUSE",
    "ISSUED",
];

const OVERHEAD_STATES: &[&str] = &["DRAFT", "NEW", "SENT", "PROCESSED"];

/// The three entities that carry a lifecycle. Each has its own state vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A patient's case record.
    Cart,
    /// A service order for a prosthetic or orthopedic device.
    Order,
    /// A warehouse invoice bundling completed orders.
    Overhead,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Cart, EntityKind::Order, EntityKind::Overhead];

    pub fn states(self) -> &'static [&'static str] {
        match self {
            EntityKind::Cart => CART_STATES,
            EntityKind::Order => ORDER_STATES,
            EntityKind::Overhead => OVERHEAD_STATES,
        }
    }

    pub fn has_state(self, state: &str) -> bool {
        self.states().contains(&state)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Cart => "cart",
            EntityKind::Order => "order",
            EntityKind::Overhead => "overhead",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown entity kind '{}'", s))
    }
}

/// Position of an order status in the lifecycle, `None` for unknown codes.
pub fn order_status_rank(status: &str) -> Option<usize> {
    ORDER_STATES.iter().position(|s| *s == status)
}

/// The least advanced of a set of order statuses.
///
/// Callers store the result under an overhead's computed `orders_status` field before
/// validating its dispatch. Unknown codes rank below every known status, so a single
/// unrecognised order holds the whole invoice back.
pub fn least_advanced_status<'a, I>(statuses: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    statuses.into_iter().min_by_key(|s| order_status_rank(s))
}
