// Candidate table side-channel: CSV upload plus a single experience filter.

pub mod filter;
pub mod handlers;
pub mod table;
