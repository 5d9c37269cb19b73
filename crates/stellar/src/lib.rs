//! Stellar classification and the seed → star property generator.

pub mod occurrence;
pub mod physics;
pub mod properties;
pub mod sampling;
pub mod spectral;
pub mod stellar_color;
pub mod stellar_type;


pub use properties::{sample_mass, sample_stellar_type, BodyPropertyGenerator, StellarProperties};
pub use spectral::{BrownDwarfClass, LuminosityClass, SpectralType};
pub use stellar_color::StellarColor;
pub use stellar_type::StellarType;
