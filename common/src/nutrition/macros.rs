use std::iter::Sum;
use std::ops::{Add, AddAssign, Div};

use serde::{Deserialize, Serialize};

/// Carbohydrates, proteins and fats, in grams.
///
/// On an [`Ingredient`](super::Ingredient) the values are per 100 grams of
/// that ingredient; on a recipe they are per serving.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroNutrients {
    pub carbohydrates: f64,
    pub proteins: f64,
    pub fats: f64,
}

impl MacroNutrients {
    pub fn new(carbohydrates: f64, proteins: f64, fats: f64) -> Self {
        Self {
            carbohydrates,
            proteins,
            fats,
        }
    }

    /// Macros contained in `grams` of something described per 100 grams.
    pub fn for_grams(&self, grams: f64) -> Self {
        Self {
            carbohydrates: grams * self.carbohydrates / 100.0,
            proteins: grams * self.proteins / 100.0,
            fats: grams * self.fats / 100.0,
        }
    }

    /// Sum of absolute per-component differences.
    pub fn distance(&self, other: &MacroNutrients) -> f64 {
        (self.carbohydrates - other.carbohydrates).abs()
            + (self.proteins - other.proteins).abs()
            + (self.fats - other.fats).abs()
    }
}

impl Add for MacroNutrients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            carbohydrates: self.carbohydrates + rhs.carbohydrates,
            proteins: self.proteins + rhs.proteins,
            fats: self.fats + rhs.fats,
        }
    }
}

impl AddAssign for MacroNutrients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Div<f64> for MacroNutrients {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            carbohydrates: self.carbohydrates / rhs,
            proteins: self.proteins / rhs,
            fats: self.fats / rhs,
        }
    }
}

impl Sum for MacroNutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
