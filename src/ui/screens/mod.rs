mod add_product;
mod delete_product;
mod edit_product;
mod initial;
mod main_menu;
mod sign_in;
mod sign_up;
mod view_inventory;

pub use add_product::AddProductScreen;
pub use delete_product::DeleteProductScreen;
pub use edit_product::EditProductScreen;
pub use initial::InitialScreen;
pub use main_menu::MainMenuScreen;
pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;
pub use view_inventory::ViewInventoryScreen;
