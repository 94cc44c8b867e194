pub mod account;
pub mod directory;
pub mod index_tree;
pub mod ledger;
pub mod transaction;
