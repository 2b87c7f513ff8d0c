pub mod covers;
pub mod knv;

pub use covers::download_cover;
pub use knv::KnvClient;
