use std::fmt;

use derive_more::From;

use crate::bio::Bio;

/// Quetelet's index over imperial units, rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, From)]
pub struct Bmi(f64);

impl Bmi {
    pub fn of(bio: &Bio) -> Self {
        let height = *bio.height as f64;
        let bmi = (*bio.weight / height / height) * 703.0;

        Bmi((bmi * 10.0).round() / 10.0)
    }

    // Classifies the rounded value. The historical thresholds leave two
    // holes: exactly 18.5, and (29.9, 30.0] - those yield no category.
    pub fn category(self) -> Option<Category> {
        let bmi = self.0;

        if bmi < 18.5 {
            Some(Category::Underweight)
        } else if bmi > 18.5 && bmi <= 24.9 {
            Some(Category::Normal)
        } else if bmi > 24.9 && bmi <= 29.9 {
            Some(Category::Overweight)
        } else if bmi > 30.0 {
            Some(Category::Obese)
        } else {
            None
        }
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Category::Underweight => f.write_str("You are underweight."),
            Category::Normal      => f.write_str("You have normal weight"),
            Category::Overweight  => f.write_str("You are overweight"),
            Category::Obese       => f.write_str("You are overweight and need help."),
        }
    }
}
