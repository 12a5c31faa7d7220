//! Stateless repository structs, one per table.

mod session_repo;
mod translation_repo;
mod user_repo;

pub use session_repo::SessionRepo;
pub use translation_repo::TranslationRepo;
pub use user_repo::UserRepo;
