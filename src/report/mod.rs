mod data;
mod generate;
mod html;
mod io;

pub use generate::generate_report;
