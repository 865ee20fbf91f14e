//! Service Layer
//!
//! In-memory controllers driving the fridge and shopping tabs.

mod add_item_form;
mod fridge_list;
mod session;
mod shopping_list;

pub use add_item_form::AddItemForm;
pub use fridge_list::{DecrementOutcome, FridgeList};
pub use session::{AddFormSnapshot, FridgeSession, SessionSnapshot, SubscriptionId};
pub use shopping_list::ShoppingList;
