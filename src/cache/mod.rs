// Cache module.
// In-memory lesson listing cache plus the on-disk cache directory used for logs.

pub mod listing;
pub mod paths;

pub use listing::ListingCache;
