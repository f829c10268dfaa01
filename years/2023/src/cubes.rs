//! Games of colored cubes drawn from a bag.

use core::num::ParseIntError;
use core::str::FromStr;

use lib::prelude::{Context, IStr, NonEmpty};
use log::debug;
use thiserror::Error;

/// Errors raised when parsing a game record.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing `:` after game header")]
    MissingColon,
    #[error("expected `Game <id>`, but found `{0}`")]
    BadHeader(String),
    #[error("bad game id")]
    BadId(#[source] ParseIntError),
    #[error("expected `<count> <color>`, but found `{0}`")]
    BadCubes(String),
    #[error("bad cube count `{count}`")]
    BadCount {
        count: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unknown color `{0}`")]
    UnknownColor(String),
}

/// A number of cubes of each color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cubes {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Cubes {
    /// The bag every game is checked against.
    pub const BAG: Self = Self {
        red: 12,
        green: 13,
        blue: 14,
    };

    /// Test if these cubes could have been drawn from `bag`.
    #[inline]
    pub fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    /// The per-color maximum of two sets of cubes.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    /// The product of every color.
    ///
    /// # Examples
    ///
    /// ```
    /// use y2023::cubes::Cubes;
    ///
    /// let cubes = Cubes { red: 4, green: 2, blue: 6 };
    /// assert_eq!(cubes.power(), 48);
    /// ```
    #[inline]
    pub fn power(&self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

/// Parse a single draw, like `3 blue, 4 red`.
///
/// A color which is repeated in a draw is added up.
impl FromStr for Cubes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cubes = Cubes::default();

        for part in s.split(',').map(str::trim) {
            let Some((count, color)) = part.split_once(' ') else {
                return Err(Error::BadCubes(part.to_owned()));
            };

            let n = count.parse::<u32>().map_err(|source| Error::BadCount {
                count: count.to_owned(),
                source,
            })?;

            let slot = match color {
                "red" => &mut cubes.red,
                "green" => &mut cubes.green,
                "blue" => &mut cubes.blue,
                other => return Err(Error::UnknownColor(other.to_owned())),
            };

            *slot = slot.saturating_add(n);
        }

        Ok(cubes)
    }
}

/// A single game record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<Cubes>,
}

impl Game {
    /// Test if every draw in the game fits in `bag`.
    pub fn is_possible(&self, bag: &Cubes) -> bool {
        self.draws.iter().all(|draw| draw.fits_in(bag))
    }

    /// The fewest cubes of each color the game could have been played with.
    pub fn minimum(&self) -> Cubes {
        self.draws.iter().fold(Cubes::default(), |a, &b| a.max(b))
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (header, rest) = s.split_once(':').ok_or(Error::MissingColon)?;

        let Some(("Game", id)) = header.trim().split_once(' ') else {
            return Err(Error::BadHeader(header.to_owned()));
        };

        let id = id.trim().parse().map_err(Error::BadId)?;

        let draws = rest
            .split(';')
            .map(str::parse)
            .collect::<Result<Vec<Cubes>, Error>>()?;

        Ok(Self { id, draws })
    }
}

/// Sum the ids of every game possible with [`Cubes::BAG`], and the power of
/// the minimum set of cubes of every game.
pub fn game_sums(mut input: IStr) -> lib::prelude::Result<(u32, u64)> {
    let mut o1 = 0u32;
    let mut o2 = 0u64;

    while let Some(game) = input.try_line::<Game>()? {
        let possible = game.is_possible(&Cubes::BAG);
        let power = game.minimum().power();
        debug!("game {}: possible: {possible}, power: {power}", game.id);

        if possible {
            o1 = o1.checked_add(game.id).context("id sum overflow")?;
        }

        o2 = o2.checked_add(power).context("power sum overflow")?;
    }

    Ok((o1, o2))
}

lib::from_input! {
    |(NonEmpty(line)): NonEmpty<&str>| -> Game {
        Ok(line.parse()?)
    }
}
