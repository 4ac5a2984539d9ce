pub mod graphs;
pub mod script;
pub mod search;
pub mod utility;
