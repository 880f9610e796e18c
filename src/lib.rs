// Ballot: rank-fusion voting for seed-guided term expansion
//
// This is the library root. Each module corresponds to one stage of the
// fusion pipeline: loading the corpus artifacts, fusing the rankings,
// joining document evidence, and writing the results back out.

pub mod config;
pub mod corpus;
pub mod fusion;
pub mod output;
pub mod pipeline;
