pub mod collision;
pub mod probes;
