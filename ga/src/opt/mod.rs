pub mod ga_optimizer;
pub mod report;
