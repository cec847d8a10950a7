//! Headless page adapter (scraper-backed)

mod document;
mod page;

pub use page::{FrameScroll, HeadlessPage, HeadlessPageError};
