use std::fmt;
use std::str::FromStr;

use derive_more::{Deref, From};

use crate::error::Error;
use crate::ensure_digits;

pub struct Bio {
    pub name:   Name,
    pub weight: Weight,
    pub height: Height,
}

#[derive(Debug, Clone)]
pub struct Name(String);

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.chars().all(char::is_alphabetic) {
            Ok(Name(s.to_owned()))
        } else {
            Err(Error::Entry)
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Deref, From)]
pub struct Weight(f64); // lbs

impl FromStr for Weight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(char::is_alphabetic) {
            return Err(Error::Entry);
        }

        s.trim().parse().map(Weight).map_err(|_| Error::Entry)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref, From)]
pub struct Height(u8); // inches

impl FromStr for Height {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s.chars()
            .filter_map(|c| c.to_digit(10))
            .take(2)
            .map(|d| d as u8)
            .collect();

        let height = ensure_digits!(digits, 2, Height(digits[0] * 12 + digits[1]))?;

        if *height == 0 {
            return Err(Error::Zero);
        }

        Ok(height)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} inches in height", self.0)
    }
}
