//! The function catalog.
//!
//! A fixed, enumerable set of functions the plotter knows how to draw, each
//! bound to a default domain, sample step and display color.

use crossterm::style::Color;

/// A plottable catalog function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `sin(x)`
    Sine,
    /// `cos(x)`
    Cosine,
    /// `tan(x)`
    Tangent,
    /// `e^x`
    Exponential,
    /// `ln(x)`
    NaturalLog,
    /// `2x + 1`
    Linear,
    /// `x² - 2x + 1`
    Quadratic,
}

impl Function {
    /// All catalog entries, in menu order.
    pub const ALL: [Function; 7] = [
        Function::Sine,
        Function::Cosine,
        Function::Tangent,
        Function::Exponential,
        Function::NaturalLog,
        Function::Linear,
        Function::Quadratic,
    ];

    /// Resolve a 1-based menu choice.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Function::Sine),
            2 => Some(Function::Cosine),
            3 => Some(Function::Tangent),
            4 => Some(Function::Exponential),
            5 => Some(Function::NaturalLog),
            6 => Some(Function::Linear),
            7 => Some(Function::Quadratic),
            _ => None,
        }
    }

    /// Menu label.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sine => "Sine",
            Function::Cosine => "Cosine",
            Function::Tangent => "Tangent",
            Function::Exponential => "Exponential",
            Function::NaturalLog => "Natural log",
            Function::Linear => "Linear (2x + 1)",
            Function::Quadratic => "Quadratic (x^2 - 2x + 1)",
        }
    }

    /// Evaluate the function at `x`.
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Function::Sine => x.sin(),
            Function::Cosine => x.cos(),
            Function::Tangent => x.tan(),
            Function::Exponential => x.exp(),
            Function::NaturalLog => x.ln(),
            Function::Linear => 2.0 * x + 1.0,
            Function::Quadratic => x * x - 2.0 * x + 1.0,
        }
    }

    /// Default plot configuration for this function.
    ///
    /// The log domain starts at 0.1 to keep `ln` away from zero; the
    /// exponential starts at 0 so part of its curve stays inside the
    /// plotter's fixed vertical range.
    pub fn config(self) -> PlotConfig {
        let (color, domain_min, domain_max) = match self {
            Function::Sine => (Color::Blue, -3.0, 3.0),
            Function::Cosine => (Color::Green, -3.0, 3.0),
            Function::Tangent => (Color::Yellow, -3.0, 3.0),
            Function::Exponential => (Color::Red, 0.0, 3.0),
            Function::NaturalLog => (Color::Blue, 0.1, 3.0),
            Function::Linear => (Color::Green, -3.0, 3.0),
            Function::Quadratic => (Color::Yellow, -3.0, 3.0),
        };

        PlotConfig {
            function: self,
            color,
            domain_min,
            domain_max,
            step: 0.1,
        }
    }
}

/// Immutable parameters of one plot session.
#[derive(Debug, Clone, Copy)]
pub struct PlotConfig {
    /// The catalog function to draw.
    pub function: Function,
    /// Display color of the plotted samples.
    pub color: Color,
    /// Inclusive lower bound of the sampled domain.
    pub domain_min: f64,
    /// Exclusive upper bound of the sampled domain.
    pub domain_max: f64,
    /// Increment between successive domain values.
    pub step: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_choice_covers_the_menu() {
        for (i, expected) in Function::ALL.iter().enumerate() {
            assert_eq!(Function::from_choice(i as u32 + 1), Some(*expected));
        }
        assert_eq!(Function::from_choice(0), None);
        assert_eq!(Function::from_choice(8), None);
        assert_eq!(Function::from_choice(99), None);
    }

    #[test]
    fn sample_functions_evaluate() {
        assert_eq!(Function::Linear.eval(-1.5), -2.0);
        assert_eq!(Function::Quadratic.eval(1.0), 0.0);
        assert_eq!(Function::Quadratic.eval(3.0), 4.0);
        assert!((Function::Sine.eval(0.0)).abs() < 1e-12);
        assert!((Function::Exponential.eval(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_domains_match_the_catalog() {
        let log = Function::NaturalLog.config();
        assert_eq!(log.domain_min, 0.1);
        assert_eq!(log.domain_max, 3.0);
        assert_eq!(log.color, Color::Blue);

        let exp = Function::Exponential.config();
        assert_eq!(exp.domain_min, 0.0);
        assert_eq!(exp.color, Color::Red);

        for function in Function::ALL {
            assert_eq!(function.config().step, 0.1);
        }
    }
}
