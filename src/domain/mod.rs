pub mod tld;

pub use tld::Tld;
