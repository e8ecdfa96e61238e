pub mod assets;
pub mod leads;
