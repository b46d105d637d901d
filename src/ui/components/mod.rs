mod banner;
mod button;
mod card;
mod modal;
mod section_header;
mod status_indicator;

pub use banner::Banner;
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use modal::Modal;
pub use section_header::SectionHeader;
pub use status_indicator::StatusIndicator;
