pub mod owies;
