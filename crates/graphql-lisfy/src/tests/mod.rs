mod atom_tests;
mod utils;
