//! HTTP adapters

mod listing_fetcher;

pub use listing_fetcher::ReqwestListingFetcher;
