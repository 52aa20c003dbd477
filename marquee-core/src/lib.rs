pub mod button;
pub mod cancel;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod display;
pub mod error;
pub mod font;
pub mod geometry;
pub mod rasterizer;
pub mod scroll;
pub mod surface;

#[cfg(test)]
mod testing;

pub use button::Button;
pub use cancel::CancelToken;
pub use config::Config;
pub use conversation::{run_conversation, ConversationEnd, TextSource};
pub use display::{BannerDisplay, DisplayOutcome, DisplaySettings};
pub use error::{ConfigError, FontError, MarqueeError, MarqueeResult};
pub use font::{FontLoader, GlyphFont, TrueTypeFont, TrueTypeLoader};
pub use geometry::Viewport;
pub use rasterizer::{rasterize, GlyphGrid};
pub use surface::{OutputSurface, TerminalSurface};
