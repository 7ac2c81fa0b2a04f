// Service exports
pub mod cache;
pub mod catalog;
pub mod supabase;

pub use cache::CatalogCache;
pub use catalog::ContentCatalog;
pub use supabase::{SupabaseClient, SupabaseError, SupabaseTables};
