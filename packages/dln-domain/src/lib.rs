mod mode;
mod results;
mod weights;

pub use mode::SearchMode;
pub use results::{Pagination, ResultPage, ScoredDocument};
pub use weights::{WEIGHT_SUM_TOLERANCE, WeightSumError, WeightVector};
