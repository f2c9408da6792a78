use serde::{Deserialize, Serialize};

use crate::step::ScaleStep;

/// Font sizes in pixels for every [`ScaleStep`].
///
/// Field order matches [`ScaleStep::ALL`] so the serialized object lists
/// `h1` through `smaller` in display order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeScale {
    pub h1: f64,
    pub h2: f64,
    pub h3: f64,
    pub h4: f64,
    pub h5: f64,
    pub h6: f64,
    pub p: f64,
    pub small: f64,
    pub smaller: f64,
}

impl TypeScale {
    /// Build a scale by evaluating `size` once per step, in display order.
    pub fn from_fn(mut size: impl FnMut(ScaleStep) -> f64) -> Self {
        Self {
            h1: size(ScaleStep::H1),
            h2: size(ScaleStep::H2),
            h3: size(ScaleStep::H3),
            h4: size(ScaleStep::H4),
            h5: size(ScaleStep::H5),
            h6: size(ScaleStep::H6),
            p: size(ScaleStep::P),
            small: size(ScaleStep::Small),
            smaller: size(ScaleStep::Smaller),
        }
    }

    pub fn get(&self, step: ScaleStep) -> f64 {
        match step {
            ScaleStep::H1 => self.h1,
            ScaleStep::H2 => self.h2,
            ScaleStep::H3 => self.h3,
            ScaleStep::H4 => self.h4,
            ScaleStep::H5 => self.h5,
            ScaleStep::H6 => self.h6,
            ScaleStep::P => self.p,
            ScaleStep::Small => self.small,
            ScaleStep::Smaller => self.smaller,
        }
    }

    pub fn get_mut(&mut self, step: ScaleStep) -> &mut f64 {
        match step {
            ScaleStep::H1 => &mut self.h1,
            ScaleStep::H2 => &mut self.h2,
            ScaleStep::H3 => &mut self.h3,
            ScaleStep::H4 => &mut self.h4,
            ScaleStep::H5 => &mut self.h5,
            ScaleStep::H6 => &mut self.h6,
            ScaleStep::P => &mut self.p,
            ScaleStep::Small => &mut self.small,
            ScaleStep::Smaller => &mut self.smaller,
        }
    }

    /// Heading sizes `[h1, h2, h3, h4, h5, h6]`.
    pub fn headings(&self) -> [f64; 6] {
        [self.h1, self.h2, self.h3, self.h4, self.h5, self.h6]
    }

    /// Replace the heading sizes, leaving body steps untouched.
    pub fn set_headings(&mut self, headings: [f64; 6]) {
        let [h1, h2, h3, h4, h5, h6] = headings;
        self.h1 = h1;
        self.h2 = h2;
        self.h3 = h3;
        self.h4 = h4;
        self.h5 = h5;
        self.h6 = h6;
    }

    /// Iterate `(step, size)` pairs largest first.
    pub fn iter(&self) -> impl Iterator<Item = (ScaleStep, f64)> + '_ {
        ScaleStep::ALL.iter().map(move |step| (*step, self.get(*step)))
    }

    /// Returns true when every step is no larger than the one above it.
    pub fn is_descending(&self) -> bool {
        let sizes: Vec<f64> = self.iter().map(|(_, size)| size).collect();
        sizes.windows(2).all(|pair| pair[0] >= pair[1])
    }
}
