mod app_state;
pub mod events;
pub mod title_row;
pub mod titled_box;

pub use app_state::*;
pub use events::EventsService;
pub use title_row::TitleRow;
