pub mod left;
pub mod sidebar;
pub mod team_switcher;

pub use left::{Left, RailToggle};
pub use sidebar::Sidebar;
pub use team_switcher::TeamSwitcher;
