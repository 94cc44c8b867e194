pub mod create;
pub mod deposit;
pub mod inquiry;
pub mod withdrawal;
