pub mod check;
pub mod config_file;
pub mod expr;
pub mod generate;
pub mod input;

#[cfg(test)]
mod config_file_tests;
#[cfg(test)]
mod input_tests;
