pub mod altair680;
pub mod ihex;
pub mod kaypro;
pub mod rc2014;
pub mod registry;
pub mod romfile;
pub mod system09;

pub use altair680::Altair680;
pub use kaypro::Kaypro;
pub use rc2014::Rc2014;
pub use registry::{build, BuildError, SystemConfig, SystemEntry};
pub use system09::System09;
