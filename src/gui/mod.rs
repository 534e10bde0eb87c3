//! Interactive widgets drawn on the menu.

pub mod button;
pub mod link;

pub use button::AnimatedButton;
pub use link::MenuLink;
