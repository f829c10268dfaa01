use lib::prelude::*;
use y2023::cubes::game_sums;

#[entry(input = "d02.txt", expect = (8, 2286))]
fn main(input: IStr) -> Result<(u32, u64)> {
    game_sums(input)
}
