#[macro_use]
pub mod macros;

agg_mod![config, models, utils];
