use lib::prelude::*;
use y2023::schematic::{Schematic, SymbolClass};

#[entry(input = "d03.txt", expect = (4361, 467835))]
fn main(mut input: IStr) -> Result<(u64, u64)> {
    let schematic = input.next::<Schematic>()?;
    let part_sum = schematic.part_number_sum()?;
    let gear_sum = schematic.gear_ratio_sum(SymbolClass::GEAR)?;
    Ok((part_sum, gear_sum))
}
