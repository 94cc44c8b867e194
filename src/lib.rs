//! In-memory account ledger: accounts indexed by number in a hash directory,
//! mirrored in a search tree for sorted listings, each with its own
//! newest-first transaction history.

pub mod app;
pub mod common;
pub mod domain;
pub mod io;
pub mod worker;
