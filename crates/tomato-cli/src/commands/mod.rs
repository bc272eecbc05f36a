pub mod run;
pub mod shifts;
