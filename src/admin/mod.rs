//! Cluster and collection administration commands.

pub mod action;
pub mod builder;

pub use self::action::AdminAction;
pub use self::builder::CollectionAdmin;
