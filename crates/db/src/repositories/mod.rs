pub mod owie_log_repo;

pub use owie_log_repo::OwieLogRepo;
