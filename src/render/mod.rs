//! Presentation adapters over the interpolation core: point tables,
//! plot sampling and the method explanation text.

pub mod errors;
pub mod explain;
pub mod plot;
pub mod table;
