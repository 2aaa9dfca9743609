pub mod styling;
