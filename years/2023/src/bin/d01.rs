use lib::prelude::*;
use y2023::calibration::calibration_sums;

#[entry(input = "d01.txt", expect = (209, 281))]
fn main(input: IStr) -> Result<(u32, u32)> {
    calibration_sums(input)
}
