mod card;
mod draft_controls;
mod form_field;
mod nav_bar;
mod page_background;
mod success_banner;
mod theme_toggle;

pub use card::Card;
pub use draft_controls::DraftControls;
pub use form_field::{FieldKind, FormField};
pub use nav_bar::NavBar;
pub use page_background::PageBackground;
pub use success_banner::{banner_element_id, SuccessBanner};
pub use theme_toggle::ThemeToggle;
