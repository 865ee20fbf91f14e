//! UI Components
//!
//! Reusable Leptos components.

mod tab_bar;
mod fridge_view;
mod fridge_item_card;
mod add_item_sheet;
mod move_to_shopping_prompt;
mod shopping_view;
mod confirm_remove_button;

pub use tab_bar::TabBar;
pub use fridge_view::FridgeView;
pub use fridge_item_card::FridgeItemCard;
pub use add_item_sheet::AddItemSheet;
pub use move_to_shopping_prompt::MoveToShoppingPrompt;
pub use shopping_view::ShoppingView;
pub use confirm_remove_button::ConfirmRemoveButton;
