//! Domain data: the material catalog and tunable physics settings.

pub mod materials;
pub mod settings;
