pub mod anchor;

pub use anchor::AnchorPosition;
