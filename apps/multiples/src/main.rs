use clap::Parser;
use math::{find_sum_hard_way, find_sum_optimized_way};

#[derive(Parser)]
#[command(name = "multiples")]
#[command(about = "Sum the integers below a limit divisible by either of two divisors")]
struct Cli {
    /// Exclusive upper bound
    #[arg(short, long, default_value_t = 1000)]
    limit: i64,

    /// First divisor
    #[arg(long, default_value_t = 3)]
    divisor1: i64,

    /// Second divisor
    #[arg(long, default_value_t = 5)]
    divisor2: i64,

    /// Use the O(limit) enumeration instead of the closed form
    #[arg(long)]
    brute_force: bool,
}

fn main() {
    let cli = Cli::parse();

    let sum = if cli.brute_force {
        find_sum_hard_way(cli.limit, cli.divisor1, cli.divisor2)
    } else {
        find_sum_optimized_way(cli.limit, cli.divisor1, cli.divisor2)
    };

    println!(
        "The sum of all multiples of {} or {} below {} is: {}",
        cli.divisor1, cli.divisor2, cli.limit, sum
    );
}
