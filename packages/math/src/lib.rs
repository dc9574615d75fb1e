pub mod divisor;
pub mod multiples;
pub mod series;

pub use divisor::{gcd, lcm};
pub use multiples::{
    count_multiples_below, find_sum_hard_way, find_sum_optimized_way, sum_multiples_below,
};
pub use series::series_sum;
