// crates/splicecut-core/src/helpers/mod.rs

pub mod time;
