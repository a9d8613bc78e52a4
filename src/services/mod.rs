pub mod gdmc;
pub mod image_source;
pub mod player;
pub mod screen;
pub mod state_store;
pub mod transport;

pub use gdmc::GdmcTransport;
pub use image_source::ImageSource;
pub use player::{fetch_player_info, PlayerInfo};
pub use screen::{RenderOptions, RenderReport, ScreenService};
pub use state_store::{FileStateStore, InMemoryStateStore, SurfaceStateStore};
pub use transport::{CommandResponse, Transport};
