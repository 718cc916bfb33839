pub mod owie_log;
